//! End-to-end scenarios driven only through the public aggregate surface.

use procurement_core::{Currency, Money, OrderDate, ProductId, SupplierId, ValidationError};
use procurement_purchasing::{MAX_ITEMS, PurchaseOrder, PurchaseOrderState};

fn new_order(currency: Currency) -> PurchaseOrder {
    PurchaseOrder::new(SupplierId::new(), currency, None).unwrap()
}

fn assert_rejected(result: Result<impl std::fmt::Debug, ValidationError>, expected: &str) {
    match result {
        Err(err) => assert!(
            err.message().contains(expected),
            "unexpected message: {}",
            err.message()
        ),
        Ok(value) => panic!("expected ValidationError containing {expected:?}, got {value:?}"),
    }
}

#[test]
fn two_lines_total_to_459_85_usd() {
    let mut order = new_order(Currency::Usd);
    order.add_item(ProductId::new(), 5, 45.99).unwrap();
    order.add_item(ProductId::new(), 10, 22.99).unwrap();

    assert_eq!(
        order.calculate_total_price().unwrap(),
        Money::new(459.85, Currency::Usd).unwrap()
    );
}

#[test]
fn adding_after_submit_is_rejected() {
    let mut order = new_order(Currency::Usd);
    order.submit().unwrap();
    assert_rejected(
        order.add_item(ProductId::new(), 1, 10.0).map(|_| ()),
        "Items can only be added to a PurchaseOrder in Draft state",
    );
    assert!(order.items().is_empty());
}

#[test]
fn empty_order_has_no_total() {
    let order = new_order(Currency::Eur);
    assert!(order.calculate_total_price().is_err());
}

#[test]
fn approve_without_submit_is_rejected() {
    let mut order = new_order(Currency::Usd);
    assert_rejected(order.approve(), "only be approved from Submitted state");
    assert_eq!(order.state(), PurchaseOrderState::Draft);
}

#[test]
fn fiftieth_item_fits_and_fifty_first_does_not() {
    let mut order = new_order(Currency::Gbp);
    for _ in 0..MAX_ITEMS - 1 {
        order.add_item(ProductId::new(), 1, 1.0).unwrap();
    }
    assert!(order.add_item(ProductId::new(), 1, 1.0).is_ok());
    assert_eq!(order.items().len(), 50);

    assert_rejected(
        order.add_item(ProductId::new(), 1, 1.0).map(|_| ()),
        "cannot contain more than 50 items",
    );
    assert_eq!(order.items().len(), 50);
}

#[test]
fn quantity_boundaries() {
    let mut order = new_order(Currency::Usd);
    assert!(order.add_item(ProductId::new(), 1000, 0.01).is_ok());
    for quantity in [0, 1001] {
        assert_rejected(
            order.add_item(ProductId::new(), quantity, 0.01).map(|_| ()),
            "Quantity must be a positive integer not exceeding 1000",
        );
    }
    assert_eq!(order.items().len(), 1);
}

#[test]
fn cancel_is_allowed_until_completion() {
    let mut canceled_while_shipped = new_order(Currency::Usd);
    canceled_while_shipped.submit().unwrap();
    canceled_while_shipped.approve().unwrap();
    canceled_while_shipped.ship().unwrap();
    canceled_while_shipped.cancel().unwrap();
    assert_eq!(canceled_while_shipped.state(), PurchaseOrderState::Canceled);
    assert_rejected(canceled_while_shipped.cancel(), "already canceled");
    assert_rejected(canceled_while_shipped.submit(), "only be submitted from Draft");

    let mut completed = new_order(Currency::Usd);
    completed.submit().unwrap();
    completed.approve().unwrap();
    completed.ship().unwrap();
    completed.complete().unwrap();
    assert_rejected(completed.cancel(), "Completed PurchaseOrder cannot be canceled");
    assert_eq!(completed.state(), PurchaseOrderState::Completed);
}

#[test]
fn explicit_order_date_is_kept() {
    let date = OrderDate::parse("2023-11-05T08:00:00Z").unwrap();
    let order = PurchaseOrder::new(SupplierId::new(), Currency::Usd, Some(date)).unwrap();
    assert_eq!(order.order_date().to_string(), "2023-11-05T08:00:00+00:00");
}
