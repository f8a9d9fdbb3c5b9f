use crate::domain::{AddOn, ServiceTier};

/// One row of the itemized breakdown; the final total row is emphasized.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine {
    pub text: String,
    pub emphasized: bool,
}

/// Everything the view needs to redraw the service calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceView {
    /// Whole-ruble total, e.g. "2 000 ₽".
    pub total_text: String,
    /// One-line recap of tier, quantity, and any extras.
    pub summary: String,
    pub breakdown: Vec<BreakdownLine>,
    pub breakdown_visible: bool,
    pub details_toggle_label: &'static str,
    /// Section visibility follows the tier's capabilities.
    pub show_add_on_section: bool,
    pub show_surcharge_section: bool,
    /// Echoed so the numeric field and the range slider stay in sync.
    pub quantity: u32,
    pub tier: ServiceTier,
    pub add_on: AddOn,
    pub surcharge: bool,
}
