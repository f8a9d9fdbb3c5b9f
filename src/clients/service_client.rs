use tracing::{debug, instrument};

use crate::component::ComponentClient;
use crate::service_calc::{ServiceCalcError, ServiceCalculator, ServiceEvent, ServiceView};

/// Client for the service calculator component.
///
/// Radio and select values are parsed here; unknown tier or add-on keys are
/// rejected before anything is dispatched.
#[derive(Clone)]
pub struct ServiceCalcClient {
    inner: ComponentClient<ServiceCalculator>,
}

impl ServiceCalcClient {
    pub fn new(inner: ComponentClient<ServiceCalculator>) -> Self {
        Self { inner }
    }

    async fn dispatch(&self, event: ServiceEvent) -> Result<ServiceView, ServiceCalcError> {
        self.inner.dispatch(event).await.map_err(ServiceCalcError::from)?
    }

    #[instrument(skip(self))]
    pub async fn select_tier(&self, value: &str) -> Result<ServiceView, ServiceCalcError> {
        debug!("Sending request");
        let tier = value
            .parse()
            .map_err(|_| ServiceCalcError::UnknownTier(value.to_string()))?;
        self.dispatch(ServiceEvent::TierChange(tier)).await
    }

    /// Raw text from either linked quantity widget; the echoed view carries
    /// the clamped value both widgets should display.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, text: &str) -> Result<ServiceView, ServiceCalcError> {
        debug!("Sending request");
        self.dispatch(ServiceEvent::QuantityChange(text.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn select_add_on(&self, value: &str) -> Result<ServiceView, ServiceCalcError> {
        debug!("Sending request");
        let add_on = value
            .parse()
            .map_err(|_| ServiceCalcError::UnknownAddOn(value.to_string()))?;
        self.dispatch(ServiceEvent::AddOnChange(add_on)).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_surcharge(&self, enabled: bool) -> Result<ServiceView, ServiceCalcError> {
        debug!("Sending request");
        self.dispatch(ServiceEvent::SurchargeToggle(enabled)).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_details(&self) -> Result<ServiceView, ServiceCalcError> {
        debug!("Sending request");
        self.dispatch(ServiceEvent::DetailsToggle).await
    }

    /// Fresh view model for the current state; the initial paint uses this.
    #[instrument(skip(self))]
    pub async fn render(&self) -> Result<ServiceView, ServiceCalcError> {
        debug!("Sending request");
        self.inner.render().await.map_err(ServiceCalcError::from)
    }
}
