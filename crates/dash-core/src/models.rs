use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flattened snapshot of one sales order.
///
/// Combines order, customer, employee and store attributes into a single flat
/// record so that a bound dashboard reads plain values rather than live
/// entities. Records are produced once per session refresh by copying fields
/// out of the order provider; they are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Invoice number printed on the order.
    pub invoice_number: String,
    /// Customer purchase-order number.
    pub po_number: String,
    /// Payment terms (e.g. "30 Days").
    pub order_terms: String,
    /// UTC timestamp when the order was placed.
    pub order_date: DateTime<Utc>,
    /// UTC timestamp when the order shipped.
    pub ship_date: DateTime<Utc>,
    /// Sale amount in US dollars, before shipping.
    pub sales_amount: f64,
    /// Shipping amount in US dollars.
    pub shipping_amount: f64,
    /// Total amount in US dollars.
    pub total_amount: f64,
    /// City of the fulfilling store.
    pub store_city: String,
    /// Full name of the employee who handled the order.
    pub employee: String,
    /// Name of the ordering customer.
    pub customer: String,
    /// Street location of the fulfilling store.
    pub store_location: String,
    /// State of the fulfilling store.
    pub store_state: String,
    /// Latitude of the customer's billing address.
    pub customer_lat: f64,
    /// Longitude of the customer's billing address.
    pub customer_long: f64,
}
