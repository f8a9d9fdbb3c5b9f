use tracing::debug;

use crate::component::Component;
use crate::domain::{format_rub, ProductId};
use super::actions::OrderEvent;
use super::dtos::{FieldMarker, OrderFocus, OrderResult, OrderView};
use super::error::OrderCalcError;
use super::validate::{compute_total, validate_quantity};

/// State of the order calculator: the selected product, the raw quantity
/// text as typed, the field marker, and the last computed result (kept so
/// the result area survives unrelated redraws until a reset).
#[derive(Debug, Default)]
pub struct OrderCalculator {
    selected_product: Option<ProductId>,
    quantity_text: String,
    quantity_marker: FieldMarker,
    result: Option<OrderResult>,
}

impl OrderCalculator {
    fn view(&self) -> OrderView {
        OrderView {
            alert: None,
            inline_error: self.quantity_marker == FieldMarker::Invalid,
            quantity_marker: self.quantity_marker,
            focus: None,
            scroll_to_result: false,
            result: self.result.clone(),
        }
    }

    fn handle_submit(&mut self) -> OrderView {
        let Some(product_id) = self.selected_product else {
            debug!("submit without a product selected");
            let mut view = self.view();
            view.alert = Some("Please choose a product from the list!".to_string());
            view.focus = Some(OrderFocus::ProductSelect);
            return view;
        };

        let quantity_text = self.quantity_text.trim().to_string();
        if !validate_quantity(&quantity_text) {
            debug!(quantity = %quantity_text, "submit with invalid quantity");
            self.quantity_marker = FieldMarker::Invalid;
            let mut view = self.view();
            view.focus = Some(OrderFocus::QuantityInput);
            return view;
        }

        self.quantity_marker = FieldMarker::Valid;
        let product = product_id.info();
        // The pattern admits at most three digits, so this cannot fail.
        let quantity: u32 = quantity_text.parse().unwrap_or(1);
        let total = compute_total(product.unit_price, quantity);
        let unit_price_text = format_rub(product.unit_price, 2);
        debug!(product = %product_id, quantity, total = %total, "order computed");

        self.result = Some(OrderResult {
            product_name: product.name,
            details: format!(
                "Selected product: {} ({} each), quantity: {}",
                product.name, unit_price_text, quantity
            ),
            unit_price_text,
            quantity,
            total_text: format_rub(total, 2),
        });

        let mut view = self.view();
        view.scroll_to_result = true;
        view
    }
}

impl Component for OrderCalculator {
    type Event = OrderEvent;
    type View = OrderView;
    type Error = OrderCalcError;

    fn apply(&mut self, event: OrderEvent) -> Result<OrderView, OrderCalcError> {
        match event {
            OrderEvent::ProductChange(product) => {
                self.selected_product = product;
                // A valid quantity clears a stale inline error once a
                // product is picked; an invalid one is left alone so the
                // user is not nagged mid-correction.
                let text = self.quantity_text.trim();
                if !text.is_empty() && validate_quantity(text) {
                    self.quantity_marker = FieldMarker::Valid;
                }
                Ok(self.view())
            }
            OrderEvent::QuantityInput(text) => {
                self.quantity_text = text;
                let trimmed = self.quantity_text.trim();
                self.quantity_marker = if trimmed.is_empty() {
                    FieldMarker::Neutral
                } else if validate_quantity(trimmed) {
                    FieldMarker::Valid
                } else {
                    FieldMarker::Invalid
                };
                Ok(self.view())
            }
            OrderEvent::Submit => Ok(self.handle_submit()),
            OrderEvent::Reset => {
                *self = Self::default();
                let mut view = self.view();
                view.focus = Some(OrderFocus::ProductSelect);
                Ok(view)
            }
        }
    }

    fn render(&self) -> OrderView {
        self.view()
    }
}
