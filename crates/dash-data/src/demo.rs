//! Built-in demo order collection.
//!
//! Stands in for the application database when salesdash runs headless; the
//! records cover a handful of states so that chart and map widgets have
//! something to group by.

use chrono::{DateTime, TimeZone, Utc};

use crate::orders::{BillingAddress, Customer, Employee, InMemoryOrders, SourceOrder, Store};

/// Build the demo order provider.
pub fn demo_collection() -> InMemoryOrders {
    InMemoryOrders::new(demo_orders())
}

/// The fixed demo entities.
pub fn demo_orders() -> Vec<SourceOrder> {
    vec![
        order(
            "INV-10021",
            "PO-4417",
            "30 Days",
            date(2024, 2, 5, 9, 15),
            date(2024, 2, 9, 13, 0),
            12_400.0,
            320.0,
            ("Portland", "412 Pine St", "Oregon"),
            "Clara Meyer",
            ("Axel Foods", 45.5231, -122.6765),
        ),
        order(
            "INV-10022",
            "PO-4430",
            "15 Days",
            date(2024, 2, 11, 11, 40),
            date(2024, 2, 14, 10, 30),
            7_850.0,
            180.0,
            ("Austin", "88 Congress Ave", "Texas"),
            "Dana Ruiz",
            ("Bluebonnet Retail", 30.2672, -97.7431),
        ),
        order(
            "INV-10023",
            "PO-4431",
            "30 Days",
            date(2024, 3, 1, 8, 5),
            date(2024, 3, 4, 16, 45),
            21_300.0,
            540.0,
            ("Denver", "1600 Blake St", "Colorado"),
            "Miguel Ortega",
            ("Summit Outfitters", 39.7392, -104.9903),
        ),
        order(
            "INV-10024",
            "PO-4458",
            "60 Days",
            date(2024, 3, 18, 14, 20),
            date(2024, 3, 25, 9, 0),
            4_120.0,
            95.0,
            ("Portland", "412 Pine St", "Oregon"),
            "Clara Meyer",
            ("Cascade Grocers", 45.512, -122.6587),
        ),
        order(
            "INV-10025",
            "PO-4460",
            "15 Days",
            date(2024, 4, 2, 10, 55),
            date(2024, 4, 5, 12, 15),
            16_780.0,
            410.0,
            ("Nashville", "34 Music Row", "Tennessee"),
            "Priya Shah",
            ("Opry Hardware", 36.1627, -86.7816),
        ),
        order(
            "INV-10026",
            "PO-4492",
            "30 Days",
            date(2024, 4, 19, 15, 30),
            date(2024, 4, 24, 11, 10),
            9_640.0,
            220.0,
            ("Austin", "88 Congress Ave", "Texas"),
            "Dana Ruiz",
            ("Lone Star Supply", 30.25, -97.75),
        ),
    ]
}

fn date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn order(
    invoice_number: &str,
    po_number: &str,
    order_terms: &str,
    order_date: DateTime<Utc>,
    ship_date: DateTime<Utc>,
    sale_amount: f64,
    shipping_amount: f64,
    store: (&str, &str, &str),
    employee: &str,
    customer: (&str, f64, f64),
) -> SourceOrder {
    let (city, location, state) = store;
    let (customer_name, latitude, longitude) = customer;
    SourceOrder {
        invoice_number: invoice_number.to_string(),
        po_number: po_number.to_string(),
        order_terms: order_terms.to_string(),
        order_date,
        ship_date,
        sale_amount,
        shipping_amount,
        total_amount: sale_amount + shipping_amount,
        store: Store {
            city: city.to_string(),
            location: location.to_string(),
            state: state.to_string(),
        },
        employee: Employee {
            full_name: employee.to_string(),
        },
        customer: Customer {
            name: customer_name.to_string(),
            billing_address: BillingAddress {
                latitude,
                longitude,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{snapshot_orders, OrderSource};

    #[test]
    fn test_demo_collection_is_not_empty() {
        let provider = demo_collection();
        assert!(!provider.is_empty());
        assert_eq!(provider.entities().len(), demo_orders().len());
    }

    #[test]
    fn test_demo_orders_have_consistent_totals() {
        for entity in demo_orders() {
            assert_eq!(
                entity.total_amount,
                entity.sale_amount + entity.shipping_amount
            );
        }
    }

    #[test]
    fn test_demo_orders_flatten_cleanly() {
        let provider = demo_collection();
        let snapshot = snapshot_orders(&provider);
        assert_eq!(snapshot.len(), demo_orders().len());
        for record in &snapshot {
            assert!(!record.invoice_number.is_empty());
            assert!(!record.customer.is_empty());
            assert!(!record.store_state.is_empty());
            assert!(record.order_date <= record.ship_date);
        }
    }
}
