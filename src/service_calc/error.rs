use thiserror::Error;
use crate::component::ComponentError;

/// Errors that can occur while driving the service calculator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceCalcError {
    #[error("unknown service tier value: {0}")]
    UnknownTier(String),
    #[error("unknown add-on select value: {0}")]
    UnknownAddOn(String),
    #[error(transparent)]
    Component(#[from] ComponentError),
}
