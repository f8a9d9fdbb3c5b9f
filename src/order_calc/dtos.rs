/// Validity marker for the quantity field, mirrored by the view as
/// is-valid / is-invalid class toggles. `Neutral` means neither class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMarker {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Where the view should move focus after handling a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFocus {
    ProductSelect,
    QuantityInput,
}

/// A completed calculation, rendered into the result area.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    pub product_name: &'static str,
    pub unit_price_text: String,
    pub quantity: u32,
    pub total_text: String,
    /// One-line recap of product, unit price, and quantity.
    pub details: String,
}

/// Everything the view needs to redraw the order calculator.
///
/// `alert`, `focus`, and `scroll_to_result` are one-shot instructions tied to
/// the dispatch that produced them; a plain `render` never sets them.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub alert: Option<String>,
    pub inline_error: bool,
    pub quantity_marker: FieldMarker,
    pub focus: Option<OrderFocus>,
    pub scroll_to_result: bool,
    pub result: Option<OrderResult>,
}
