use shared::models::{Modifier, ModifierPolarity, Product, TaxConfig};
use shared::order::SelectionMode;

use super::cart::CartManager;


// ========================================================================
// Helpers: a small burger-counter catalog
// ========================================================================

fn product(id: i64, name: &str, price: f64, category_id: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        category_id,
        modifier_ids: vec![],
        prep_minutes: None,
        sort_order: 0,
        is_active: true,
    }
}

fn modifier(id: i64, name: &str, price: f64, polarity: ModifierPolarity) -> Modifier {
    Modifier {
        id,
        name: name.to_string(),
        price,
        polarity,
        is_active: true,
    }
}

fn catalog_products() -> Vec<Product> {
    vec![
        product(1, "Burger", 10.00, 1),
        product(2, "Fries", 4.50, 2),
        product(3, "Soda", 2.00, 3),
    ]
}

fn catalog_modifiers() -> Vec<Modifier> {
    vec![
        modifier(10, "Extra Cheese", 1.50, ModifierPolarity::Add),
        modifier(11, "No Patty", 4.00, ModifierPolarity::Remove),
    ]
}

fn test_cart() -> CartManager {
    CartManager::new(
        catalog_products(),
        catalog_modifiers(),
        TaxConfig::exclusive(15.0),
    )
}

// ========================================================================
// Cart behavior
// ========================================================================

#[test]
fn test_add_product_starts_at_quantity_one() {
    let mut cart = test_cart();
    let line_id = cart.add_product(1).unwrap();

    assert_eq!(cart.items().len(), 1);
    let item = &cart.items()[0];
    assert_eq!(item.line_id, line_id);
    assert_eq!(item.quantity, 1);
    assert_eq!(item.base_price, 10.00);
    assert_eq!(cart.totals().subtotal, 10.00);
}

#[test]
fn test_add_unknown_product_fails() {
    let mut cart = test_cart();
    assert!(cart.add_product(99).is_err());
    assert!(cart.is_empty());
}

#[test]
fn test_update_quantity_floors_at_one() {
    let mut cart = test_cart();
    let line_id = cart.add_product(1).unwrap();

    cart.update_quantity(line_id, 3);
    assert_eq!(cart.items()[0].quantity, 3);
    assert_eq!(cart.totals().subtotal, 30.00);

    cart.update_quantity(line_id, 0);
    assert_eq!(cart.items()[0].quantity, 1);

    // Unknown line is a no-op
    cart.update_quantity(424_242, 5);
    assert_eq!(cart.items()[0].quantity, 1);
}

#[test]
fn test_toggle_cycles_add_polarity() {
    let mut cart = test_cart();
    let line_id = cart.add_product(1).unwrap();

    cart.toggle_modifier(line_id, 10).unwrap();
    assert_eq!(cart.items()[0].modifiers[0].mode, SelectionMode::Added);
    assert_eq!(cart.totals().subtotal, 11.50);

    cart.toggle_modifier(line_id, 10).unwrap();
    assert_eq!(cart.items()[0].modifiers[0].mode, SelectionMode::Light);
    assert_eq!(cart.totals().subtotal, 10.75);

    // Third tap returns to default, which removes the selection entirely
    cart.toggle_modifier(line_id, 10).unwrap();
    assert!(cart.items()[0].modifiers.is_empty());
    assert_eq!(cart.totals().subtotal, 10.00);
}

#[test]
fn test_toggle_cycles_remove_polarity() {
    let mut cart = test_cart();
    let line_id = cart.add_product(1).unwrap();

    cart.toggle_modifier(line_id, 11).unwrap();
    assert_eq!(cart.items()[0].modifiers[0].mode, SelectionMode::Removed);
    assert_eq!(cart.totals().subtotal, 6.00);

    cart.toggle_modifier(line_id, 11).unwrap();
    assert_eq!(cart.items()[0].modifiers[0].mode, SelectionMode::Light);
    assert_eq!(cart.totals().subtotal, 8.00);

    cart.toggle_modifier(line_id, 11).unwrap();
    assert!(cart.items()[0].modifiers.is_empty());
}

#[test]
fn test_toggle_unknown_modifier_fails() {
    let mut cart = test_cart();
    let line_id = cart.add_product(1).unwrap();
    assert!(cart.toggle_modifier(line_id, 99).is_err());
}

#[test]
fn test_toggle_ignores_modifier_not_offered_for_product() {
    let mut products = catalog_products();
    products[0].modifier_ids = vec![11]; // Burger offers only "No Patty"
    let mut cart = CartManager::new(products, catalog_modifiers(), TaxConfig::exclusive(15.0));
    let line_id = cart.add_product(1).unwrap();

    cart.toggle_modifier(line_id, 10).unwrap();
    assert!(cart.items()[0].modifiers.is_empty());

    cart.toggle_modifier(line_id, 11).unwrap();
    assert_eq!(cart.items()[0].modifiers.len(), 1);
}

#[test]
fn test_set_modifier_mode_default_removes_selection() {
    let mut cart = test_cart();
    let line_id = cart.add_product(1).unwrap();

    cart.set_modifier_mode(line_id, 10, SelectionMode::Light).unwrap();
    assert_eq!(cart.items()[0].modifiers[0].mode, SelectionMode::Light);

    cart.set_modifier_mode(line_id, 10, SelectionMode::Default).unwrap();
    assert!(cart.items()[0].modifiers.is_empty());
}

#[test]
fn test_remove_line_and_clear() {
    let mut cart = test_cart();
    let first = cart.add_product(1).unwrap();
    cart.add_product(2).unwrap();

    cart.remove_line(first);
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.totals().subtotal, 4.50);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.totals().total, 0.0);
}

#[test]
fn test_set_catalog_reconciles_lines() {
    let mut cart = test_cart();
    let line_id = cart.add_product(1).unwrap();
    cart.toggle_modifier(line_id, 10).unwrap();

    // Price change propagates; removed modifier selection is dropped
    let mut products = catalog_products();
    products[0].price = 12.00;
    cart.set_catalog(products, vec![modifier(11, "No Patty", 4.00, ModifierPolarity::Remove)]);

    let item = &cart.items()[0];
    assert_eq!(item.base_price, 12.00);
    assert!(item.modifiers.is_empty());
    assert_eq!(cart.totals().subtotal, 12.00);
}

#[test]
fn test_cart_totals_include_tax() {
    let mut cart = test_cart();
    cart.add_product(1).unwrap();

    // 10.00 subtotal, 15% exclusive GST
    assert_eq!(cart.totals().tax, 1.50);
    assert_eq!(cart.totals().total, 11.50);
}
