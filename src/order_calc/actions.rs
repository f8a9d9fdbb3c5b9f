use crate::domain::ProductId;

/// Discrete user-input events for the order calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    /// The product select changed; `None` is the placeholder option.
    ProductChange(Option<ProductId>),
    /// A keystroke in the quantity field (live validation, never blocks).
    QuantityInput(String),
    /// Form submission.
    Submit,
    /// The reset button.
    Reset,
}
