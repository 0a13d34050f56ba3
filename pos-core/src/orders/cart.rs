//! Draft cart manager
//!
//! In-memory cart the order-entry workflow mutates while an order is
//! being built. Holds a catalog view (products and modifiers), keeps line
//! items reconciled against it, and recomputes totals on every mutation.
//! Persistence of the in-progress cart is the caller's concern.

use std::collections::HashMap;

use shared::models::{Modifier, ModifierPolarity, OrderTotals, Product, TaxConfig};
use shared::order::{DiscountSpec, DraftLineItem, ModifierSelection, OrderDraft, SelectionMode};
use shared::util::line_instance_id;

use super::error::{OrderError, OrderResult};
use super::money;

/// Live cart for one order being built
#[derive(Debug)]
pub struct CartManager {
    products: HashMap<i64, Product>,
    modifiers: HashMap<i64, Modifier>,
    tax: TaxConfig,
    items: Vec<DraftLineItem>,
    totals: OrderTotals,
}

impl CartManager {
    pub fn new(products: Vec<Product>, modifiers: Vec<Modifier>, tax: TaxConfig) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
            modifiers: modifiers.into_iter().map(|m| (m.id, m)).collect(),
            tax,
            items: Vec::new(),
            totals: OrderTotals::default(),
        }
    }

    /// Replace the catalog view; existing lines are reconciled against it
    /// (names and prices refreshed, selections for vanished modifiers
    /// dropped) and totals recomputed.
    pub fn set_catalog(&mut self, products: Vec<Product>, modifiers: Vec<Modifier>) {
        self.products = products.into_iter().map(|p| (p.id, p)).collect();
        self.modifiers = modifiers.into_iter().map(|m| (m.id, m)).collect();
        self.reconcile();
        self.recalculate();
    }

    pub fn items(&self) -> &[DraftLineItem] {
        &self.items
    }

    pub fn totals(&self) -> &OrderTotals {
        &self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product as a new line; returns the line id
    pub fn add_product(&mut self, product_id: i64) -> OrderResult<i64> {
        let product = self.products.get(&product_id).ok_or_else(|| {
            OrderError::InvalidLineItem(format!("unknown product {}", product_id))
        })?;

        let line = DraftLineItem {
            line_id: line_instance_id(),
            product_id,
            name: product.name.clone(),
            base_price: money::to_currency(money::to_cents(product.price)),
            quantity: 1,
            category_id: product.category_id,
            modifiers: Vec::new(),
        };
        let line_id = line.line_id;
        self.items.push(line);
        self.recalculate();
        Ok(line_id)
    }

    /// Set a line's quantity, floored at 1. Unknown lines are ignored
    /// (the line may have been removed by a concurrent tap).
    pub fn update_quantity(&mut self, line_id: i64, quantity: i32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.line_id == line_id) {
            item.quantity = quantity.max(1);
            self.recalculate();
        }
    }

    /// Cycle a modifier's mode on a line
    ///
    /// Add-polarity cycle: default → added → light → default.
    /// Remove-polarity cycle: default → removed → light → default.
    /// Modifiers not offered for the line's product are ignored.
    pub fn toggle_modifier(&mut self, line_id: i64, modifier_id: i64) -> OrderResult<()> {
        let modifier = self.modifiers.get(&modifier_id).ok_or_else(|| {
            OrderError::InvalidLineItem(format!("unknown modifier {}", modifier_id))
        })?;
        let polarity = modifier.polarity;

        let Some(item) = self.items.iter_mut().find(|item| item.line_id == line_id) else {
            return Ok(());
        };

        if let Some(product) = self.products.get(&item.product_id) {
            if !product.modifier_ids.is_empty() && !product.modifier_ids.contains(&modifier_id) {
                return Ok(());
            }
        }

        let current = item
            .modifiers
            .iter()
            .find(|entry| entry.modifier_id == modifier_id)
            .map(|entry| entry.mode)
            .unwrap_or(SelectionMode::Default);
        let next = next_mode(current, polarity);

        apply_mode(item, modifier_id, next);
        self.recalculate();
        Ok(())
    }

    /// Set a modifier's mode on a line directly. Mode `Default` removes
    /// the selection (a default selection is never persisted).
    pub fn set_modifier_mode(
        &mut self,
        line_id: i64,
        modifier_id: i64,
        mode: SelectionMode,
    ) -> OrderResult<()> {
        if !self.modifiers.contains_key(&modifier_id) {
            return Err(OrderError::InvalidLineItem(format!(
                "unknown modifier {}",
                modifier_id
            )));
        }

        let Some(item) = self.items.iter_mut().find(|item| item.line_id == line_id) else {
            return Ok(());
        };

        apply_mode(item, modifier_id, mode);
        self.recalculate();
        Ok(())
    }

    pub fn remove_line(&mut self, line_id: i64) {
        self.items.retain(|item| item.line_id != line_id);
        self.recalculate();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    /// Freeze the current lines into a checkout draft
    pub fn to_draft(
        &self,
        tax_free: bool,
        discount: DiscountSpec,
        note: Option<String>,
    ) -> OrderDraft {
        OrderDraft {
            items: self.items.clone(),
            tax_free,
            discount,
            note,
        }
    }

    /// Refresh lines from the catalog and drop selections whose modifier
    /// no longer exists
    fn reconcile(&mut self) {
        for item in &mut self.items {
            if let Some(product) = self.products.get(&item.product_id) {
                item.name = product.name.clone();
                item.base_price = money::to_currency(money::to_cents(product.price));
                item.category_id = product.category_id;
            }
            item.modifiers
                .retain(|entry| self.modifiers.contains_key(&entry.modifier_id));
        }
    }

    fn recalculate(&mut self) {
        // Reconciliation guarantees resolvable references and the cart
        // enforces quantity >= 1, so totals cannot fail here; fall back
        // to zeroed totals if they somehow do.
        self.totals =
            money::order_totals(&self.items, &self.modifiers, &self.tax, &DiscountSpec::None)
                .unwrap_or_default();
    }
}

fn next_mode(current: SelectionMode, polarity: ModifierPolarity) -> SelectionMode {
    match polarity {
        ModifierPolarity::Add => match current {
            SelectionMode::Default => SelectionMode::Added,
            SelectionMode::Added => SelectionMode::Light,
            _ => SelectionMode::Default,
        },
        ModifierPolarity::Remove => match current {
            SelectionMode::Default => SelectionMode::Removed,
            SelectionMode::Removed => SelectionMode::Light,
            _ => SelectionMode::Default,
        },
    }
}

fn apply_mode(item: &mut DraftLineItem, modifier_id: i64, mode: SelectionMode) {
    if mode == SelectionMode::Default {
        item.modifiers
            .retain(|entry| entry.modifier_id != modifier_id);
        return;
    }
    if let Some(entry) = item
        .modifiers
        .iter_mut()
        .find(|entry| entry.modifier_id == modifier_id)
    {
        entry.mode = mode;
    } else {
        item.modifiers.push(ModifierSelection { modifier_id, mode });
    }
}
