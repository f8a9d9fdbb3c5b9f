use thiserror::Error;
use crate::component::ComponentError;

/// Errors that can occur while driving the order calculator.
///
/// User-input problems (no product selected, quantity out of pattern) are
/// recoverable view states, not errors; these variants cover bad values at
/// the view boundary and a torn-down component task.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderCalcError {
    #[error("unknown product select value: {0}")]
    UnknownProduct(String),
    #[error(transparent)]
    Component(#[from] ComponentError),
}
