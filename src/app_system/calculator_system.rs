use tracing::{error, info};

use crate::clients::{OrderCalcClient, ServiceCalcClient};
use crate::component::ComponentActor;
use crate::order_calc::OrderCalculator;
use crate::service_calc::ServiceCalculator;

/// The application system holding both calculator components.
///
/// Responsible for starting the component tasks, wiring clients to them, and
/// shutting everything down in order.
pub struct CalculatorSystem {
    pub order_client: OrderCalcClient,
    pub service_client: ServiceCalcClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CalculatorSystem {
    pub fn new() -> Self {
        let (order_actor, order_inner) = ComponentActor::new(32, OrderCalculator::default());
        let order_client = OrderCalcClient::new(order_inner);
        let order_handle = tokio::spawn(order_actor.run());

        let (service_actor, service_inner) = ComponentActor::new(32, ServiceCalculator::default());
        let service_client = ServiceCalcClient::new(service_inner);
        let service_handle = tokio::spawn(service_actor.run());

        Self {
            order_client,
            service_client,
            handles: vec![order_handle, service_handle],
        }
    }

    /// Graceful shutdown: dropping the clients closes the channels, which
    /// ends each component task's run loop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down calculators...");

        drop(self.order_client);
        drop(self.service_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Component task failed: {:?}", e);
                return Err(format!("Component task failed: {:?}", e));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}

impl Default for CalculatorSystem {
    fn default() -> Self {
        Self::new()
    }
}
