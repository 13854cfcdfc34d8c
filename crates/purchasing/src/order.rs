use serde::Serialize;

use procurement_core::{
    AggregateRoot, Currency, DomainResult, Money, OrderDate, ProductId, PurchaseOrderId,
    SupplierId, ValidationError,
};

use crate::item::PurchaseOrderItem;
use crate::state::{LifecycleAction, PurchaseOrderState};

/// Maximum number of line items on one purchase order.
pub const MAX_ITEMS: usize = 50;

/// Aggregate root: PurchaseOrder.
///
/// Owns its items and lifecycle state. A failed operation leaves the order
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrder {
    id: PurchaseOrderId,
    supplier_id: SupplierId,
    currency: Currency,
    order_date: OrderDate,
    items: Vec<PurchaseOrderItem>,
    state: PurchaseOrderState,
    version: u64,
}

impl PurchaseOrder {
    /// Open a new draft order. `order_date` defaults to now.
    pub fn new(
        supplier_id: SupplierId,
        currency: Currency,
        order_date: Option<OrderDate>,
    ) -> DomainResult<Self> {
        if supplier_id.is_nil() {
            return Err(ValidationError::new("PurchaseOrder requires a supplier id"));
        }

        Ok(Self {
            id: PurchaseOrderId::new(),
            supplier_id,
            currency,
            order_date: order_date.unwrap_or_else(OrderDate::now),
            items: Vec::new(),
            state: PurchaseOrderState::Draft,
            version: 0,
        })
    }

    pub fn id_typed(&self) -> PurchaseOrderId {
        self.id
    }

    pub fn supplier_id(&self) -> SupplierId {
        self.supplier_id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn order_date(&self) -> OrderDate {
        self.order_date
    }

    pub fn items(&self) -> &[PurchaseOrderItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn state(&self) -> PurchaseOrderState {
        self.state
    }

    pub fn allowed_actions(&self) -> Vec<LifecycleAction> {
        self.state.allowed_actions()
    }

    /// Append a line priced in the order's currency.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        unit_price: f64,
    ) -> DomainResult<&PurchaseOrderItem> {
        if !self.state.is_draft() {
            return Err(ValidationError::new(
                "Items can only be added to a PurchaseOrder in Draft state",
            ));
        }
        if self.items.len() >= MAX_ITEMS {
            return Err(ValidationError::new(format!(
                "PurchaseOrder cannot contain more than {MAX_ITEMS} items"
            )));
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(ValidationError::new(
                "Unit price must be a non-negative finite number",
            ));
        }

        let unit_price = Money::new(unit_price, self.currency)?;
        let item = PurchaseOrderItem::new(self.id, product_id, quantity, unit_price)?;

        tracing::debug!(
            order_id = %self.id,
            product_id = %product_id,
            quantity = item.quantity(),
            unit_price = %unit_price,
            "purchase order item added"
        );

        self.items.push(item);
        self.version += 1;
        self.items
            .last()
            .ok_or_else(|| ValidationError::new("PurchaseOrder item was not recorded"))
    }

    /// Sum of every item's subtotal, in insertion order.
    pub fn calculate_total_price(&self) -> DomainResult<Money> {
        if self.items.is_empty() {
            return Err(ValidationError::new(
                "Cannot calculate total price of a PurchaseOrder without items",
            ));
        }

        self.items
            .iter()
            .try_fold(Money::zero(self.currency), |total, item| {
                total.add(&item.calculate_subtotal()?)
            })
    }

    pub fn submit(&mut self) -> DomainResult<()> {
        self.apply(LifecycleAction::Submit)
    }

    pub fn approve(&mut self) -> DomainResult<()> {
        self.apply(LifecycleAction::Approve)
    }

    pub fn ship(&mut self) -> DomainResult<()> {
        self.apply(LifecycleAction::Ship)
    }

    pub fn complete(&mut self) -> DomainResult<()> {
        self.apply(LifecycleAction::Complete)
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        self.apply(LifecycleAction::Cancel)
    }

    /// Run one lifecycle action; state is replaced only on success.
    pub fn apply(&mut self, action: LifecycleAction) -> DomainResult<()> {
        let from = self.state;
        let to = from.transition(action)?;

        tracing::info!(
            order_id = %self.id,
            %action,
            %from,
            %to,
            "purchase order transitioned"
        );

        self.state = to;
        self.version += 1;
        Ok(())
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
