mod bootstrap;

use anyhow::Result;
use dash_core::document::{DashboardDocument, DashboardItem, ItemKind};
use dash_core::settings::Settings;
use dash_data::demo;
use dash_data::store::DashboardStore;
use dash_session::{DashboardSession, LoggingDocumentManager};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("salesdash v{} starting", env!("CARGO_PKG_VERSION"));

    let store = match settings.directory.as_ref() {
        Some(dir) => DashboardStore::new(dir),
        None => DashboardStore::in_current_dir(),
    };

    let mut session = DashboardSession::new(
        store,
        Box::new(demo::demo_collection()),
        Some(Box::new(LoggingDocumentManager)),
    )?;
    let events = session.subscribe();

    tracing::info!(
        directory = %session.directory().display(),
        dashboards = session.dashboards().len(),
        records = session.dataset().len(),
        "session ready"
    );

    match settings.action.as_str() {
        "list" => {
            if session.dashboards().is_empty() {
                println!("No dashboards in {}", session.directory().display());
            }
            for path in session.dashboards() {
                let marker = if session.current_dashboard() == Some(path.as_path()) {
                    "*"
                } else {
                    " "
                };
                println!("{} {}", marker, path.display());
            }
        }

        "new" => session.new_dashboard(),

        "edit" => session.edit_dashboard()?,

        "seed" => {
            let mut document = starter_dashboard();
            session.bind(&mut document);
            let path = session.save(&document)?;
            println!("Saved {}", path.display());
        }

        unknown => {
            eprintln!("Unknown action: {}", unknown);
        }
    }

    // Log anything the session published during the run.
    for event in events.try_iter() {
        tracing::info!(kind = ?event.kind, "session event");
    }

    Ok(())
}

/// A starter dashboard over the order dataset, used by the `seed` action.
fn starter_dashboard() -> DashboardDocument {
    DashboardDocument {
        title: "Sales Overview".to_string(),
        data_sources: Vec::new(),
        items: vec![
            DashboardItem::new(ItemKind::Chart, "Sales by State", "store_state"),
            DashboardItem::new(ItemKind::Grid, "Orders", "invoice_number"),
            DashboardItem::new(ItemKind::Map, "Customers", "customer_lat"),
            DashboardItem::new(ItemKind::Card, "Total Sales", "total_amount"),
        ],
    }
}
