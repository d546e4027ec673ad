//! Order data provider.
//!
//! An [`OrderSource`] exposes the application's live order entities, each
//! with nested customer/employee/store sub-objects. [`snapshot_orders`]
//! flattens those entities into owned [`OrderRecord`]s so that a session's
//! dataset is decoupled from the provider's mutability and lifetime.

use chrono::{DateTime, Utc};
use dash_core::models::OrderRecord;

// ── Source entities ───────────────────────────────────────────────────────────

/// Billing address of a customer, as exposed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingAddress {
    pub latitude: f64,
    pub longitude: f64,
}

/// A customer, as exposed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub billing_address: BillingAddress,
}

/// An employee, as exposed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub full_name: String,
}

/// A store, as exposed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub city: String,
    pub location: String,
    pub state: String,
}

/// One live order entity with its nested sub-objects.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceOrder {
    pub invoice_number: String,
    pub po_number: String,
    pub order_terms: String,
    pub order_date: DateTime<Utc>,
    pub ship_date: DateTime<Utc>,
    pub sale_amount: f64,
    pub shipping_amount: f64,
    pub total_amount: f64,
    pub store: Store,
    pub employee: Employee,
    pub customer: Customer,
}

// ── OrderSource ───────────────────────────────────────────────────────────────

/// Supplier of the order entities dashboards bind against.
pub trait OrderSource {
    /// Return the provider's current order entities.
    fn entities(&self) -> Vec<SourceOrder>;
}

/// Flatten the provider's entities into an owned dataset snapshot.
///
/// Every field is copied out; the snapshot shares nothing with the provider,
/// so later provider mutation cannot reach a bound dashboard.
pub fn snapshot_orders(source: &dyn OrderSource) -> Vec<OrderRecord> {
    source.entities().iter().map(flatten).collect()
}

/// Copy one nested order entity into a flat record.
fn flatten(order: &SourceOrder) -> OrderRecord {
    OrderRecord {
        invoice_number: order.invoice_number.clone(),
        po_number: order.po_number.clone(),
        order_terms: order.order_terms.clone(),
        order_date: order.order_date,
        ship_date: order.ship_date,
        sales_amount: order.sale_amount,
        shipping_amount: order.shipping_amount,
        total_amount: order.total_amount,
        store_city: order.store.city.clone(),
        employee: order.employee.full_name.clone(),
        customer: order.customer.name.clone(),
        store_location: order.store.location.clone(),
        store_state: order.store.state.clone(),
        customer_lat: order.customer.billing_address.latitude,
        customer_long: order.customer.billing_address.longitude,
    }
}

// ── InMemoryOrders ────────────────────────────────────────────────────────────

/// An [`OrderSource`] backed by a fixed in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrders {
    entities: Vec<SourceOrder>,
}

impl InMemoryOrders {
    /// Create a provider over the given entities.
    pub fn new(entities: Vec<SourceOrder>) -> Self {
        Self { entities }
    }

    /// Number of entities currently held.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// `true` when the provider holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Append an entity to the collection.
    pub fn push(&mut self, order: SourceOrder) {
        self.entities.push(order);
    }
}

impl OrderSource for InMemoryOrders {
    fn entities(&self) -> Vec<SourceOrder> {
        self.entities.clone()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
