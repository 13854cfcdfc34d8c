use serde::Serialize;

use procurement_core::{DomainResult, Money, ProductId, PurchaseOrderId, ValidationError};

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 1000;

/// Purchase order line item.
///
/// Immutable once built. Only [`crate::PurchaseOrder::add_item`] creates items
/// for an order, so the unit price is always in the order's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderItem {
    order_id: PurchaseOrderId,
    product_id: ProductId,
    quantity: u32,
    unit_price: Money,
}

impl PurchaseOrderItem {
    /// Only the owning order builds items:
    ///
    /// ```compile_fail
    /// use procurement_core::{Currency, Money, ProductId, PurchaseOrderId};
    /// use procurement_purchasing::PurchaseOrderItem;
    ///
    /// let price = Money::new(1.0, Currency::Usd).unwrap();
    /// let _ = PurchaseOrderItem::new(PurchaseOrderId::new(), ProductId::new(), 1, price);
    /// ```
    pub(crate) fn new(
        order_id: PurchaseOrderId,
        product_id: ProductId,
        quantity: i64,
        unit_price: Money,
    ) -> DomainResult<Self> {
        if order_id.is_nil() {
            return Err(ValidationError::new(
                "PurchaseOrderItem requires a non-empty order id",
            ));
        }
        if product_id.is_nil() {
            return Err(ValidationError::new(
                "PurchaseOrderItem requires a valid product id",
            ));
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| (MIN_QUANTITY..=MAX_QUANTITY).contains(q))
            .ok_or_else(|| {
                ValidationError::new("Quantity must be a positive integer not exceeding 1000")
            })?;

        Ok(Self {
            order_id,
            product_id,
            quantity,
            unit_price,
        })
    }

    pub fn order_id(&self) -> PurchaseOrderId {
        self.order_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn calculate_subtotal(&self) -> DomainResult<Money> {
        self.unit_price.multiply(f64::from(self.quantity))
    }
}
