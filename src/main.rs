mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod component;
mod order_calc;
mod service_calc;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, CalculatorSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting price calculators");

    // Create the system (starts both component tasks)
    let system = CalculatorSystem::new();

    let span = tracing::info_span!("order_calculator");
    async {
        info!("Submitting with nothing selected");
        let view = system.order_client.submit().await.map_err(|e| e.to_string())?;
        if let Some(alert) = view.alert {
            info!(alert = %alert, "Blocking validation message shown");
        }

        info!("Ordering three laptops");
        system.order_client.select_product("laptop").await.map_err(|e| e.to_string())?;
        system.order_client.input_quantity("3").await.map_err(|e| e.to_string())?;
        let view = system.order_client.submit().await.map_err(|e| e.to_string())?;
        match view.result {
            Some(result) => info!(total = %result.total_text, details = %result.details, "Order priced"),
            None => error!("Expected a priced order"),
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("service_calculator");
    async {
        let view = system.service_client.render().await.map_err(|e| e.to_string())?;
        info!(total = %view.total_text, "Initial state");

        info!("Two standard services with the fast-track option");
        system.service_client.select_tier("standard").await.map_err(|e| e.to_string())?;
        system.service_client.set_quantity("2").await.map_err(|e| e.to_string())?;
        let view = system.service_client.select_add_on("fast").await.map_err(|e| e.to_string())?;
        info!(total = %view.total_text, summary = %view.summary, "Price updated");

        let view = system.service_client.toggle_details().await.map_err(|e| e.to_string())?;
        for line in &view.breakdown {
            info!(emphasized = line.emphasized, "{}", line.text);
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
