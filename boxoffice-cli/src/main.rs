mod app_config;
mod order_file;

use anyhow::Context;
use boxoffice_core::{MockPaymentService, MockSeatReservationService};
use boxoffice_order::PurchaseOrchestrator;
use order_file::OrderFile;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boxoffice=info,boxoffice_order=info,boxoffice_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: boxoffice <order.json>")?;

    let config = app_config::Config::load().context("Failed to load config")?;
    tracing::debug!("Loaded business rules: {:?}", config.business_rules);

    let order = OrderFile::read(&path).await?;

    // Dry run: nothing leaves the process.
    let payments = Arc::new(MockPaymentService::new());
    let seats = Arc::new(MockSeatReservationService::new());
    let orchestrator = PurchaseOrchestrator::new(payments.clone(), seats.clone())
        .with_rules(config.business_rules);

    orchestrator
        .purchase(order.account_id, &order.tickets)
        .await
        .context("Purchase rejected")?;

    for charge in payments.charges() {
        tracing::info!("Payment: account {} charged {:.2}", charge.account_id, charge.amount);
    }
    for reservation in seats.reservations() {
        tracing::info!(
            "Reservation: account {} holds {} seats",
            reservation.account_id,
            reservation.seat_count
        );
    }

    Ok(())
}
