use tracing::{debug, instrument};

use crate::component::ComponentClient;
use crate::order_calc::{OrderCalcError, OrderCalculator, OrderEvent, OrderView};

/// Client for the order calculator component.
///
/// Raw view values (select values, field text) are parsed here, at the
/// boundary; unknown product keys are rejected before anything is dispatched.
#[derive(Clone)]
pub struct OrderCalcClient {
    inner: ComponentClient<OrderCalculator>,
}

impl OrderCalcClient {
    pub fn new(inner: ComponentClient<OrderCalculator>) -> Self {
        Self { inner }
    }

    async fn dispatch(&self, event: OrderEvent) -> Result<OrderView, OrderCalcError> {
        self.inner.dispatch(event).await.map_err(OrderCalcError::from)?
    }

    /// The product select changed. An empty value is the placeholder option.
    #[instrument(skip(self))]
    pub async fn select_product(&self, value: &str) -> Result<OrderView, OrderCalcError> {
        debug!("Sending request");
        let product = if value.is_empty() {
            None
        } else {
            Some(
                value
                    .parse()
                    .map_err(|_| OrderCalcError::UnknownProduct(value.to_string()))?,
            )
        };
        self.dispatch(OrderEvent::ProductChange(product)).await
    }

    /// A keystroke in the quantity field (live validation).
    #[instrument(skip(self))]
    pub async fn input_quantity(&self, text: &str) -> Result<OrderView, OrderCalcError> {
        debug!("Sending request");
        self.dispatch(OrderEvent::QuantityInput(text.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<OrderView, OrderCalcError> {
        debug!("Sending request");
        self.dispatch(OrderEvent::Submit).await
    }

    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<OrderView, OrderCalcError> {
        debug!("Sending request");
        self.dispatch(OrderEvent::Reset).await
    }

    /// Fresh view model for the current state (initial paint, refresh).
    #[instrument(skip(self))]
    pub async fn render(&self) -> Result<OrderView, OrderCalcError> {
        debug!("Sending request");
        self.inner.render().await.map_err(OrderCalcError::from)
    }
}
