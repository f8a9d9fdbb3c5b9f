use crate::domain::{AddOn, ServiceTier};

/// Discrete user-input events for the service calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEvent {
    /// A tier radio button (or its card) was activated.
    TierChange(ServiceTier),
    /// The numeric field or the range slider changed; raw text as typed.
    QuantityChange(String),
    /// The add-on select changed.
    AddOnChange(AddOn),
    /// The surcharge checkbox changed.
    SurchargeToggle(bool),
    /// The show/hide button for the itemized breakdown. View-only.
    DetailsToggle,
}
