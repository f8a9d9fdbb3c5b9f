use rust_decimal::Decimal;
use tracing::debug;

use crate::component::Component;
use crate::domain::{format_rub, AddOn, ServiceTier};
use super::actions::ServiceEvent;
use super::dtos::{BreakdownLine, ServiceView};
use super::error::ServiceCalcError;
use super::pricing::quote;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 100;

/// State of the service calculator. Only these fields persist; the price is
/// recomputed from them on every render.
#[derive(Debug)]
pub struct ServiceCalculator {
    tier: ServiceTier,
    quantity: u32,
    add_on: AddOn,
    surcharge: bool,
    details_visible: bool,
}

impl Default for ServiceCalculator {
    fn default() -> Self {
        Self {
            tier: ServiceTier::Basic,
            quantity: MIN_QUANTITY,
            add_on: AddOn::None,
            surcharge: false,
            details_visible: false,
        }
    }
}

impl ServiceCalculator {
    fn view(&self) -> ServiceView {
        let quote = quote(self.tier, self.quantity, self.add_on, self.surcharge);
        let total_text = format_rub(quote.final_total, 0);

        let summary = if quote.surcharge_applied() {
            format!(
                "{} × {} pcs + quality guarantee = {}",
                self.tier.display_name(), self.quantity, total_text
            )
        } else if self.tier.offers_add_on() && self.add_on != AddOn::None {
            format!(
                "{} × {} pcs + option = {}",
                self.tier.display_name(), self.quantity, total_text
            )
        } else {
            format!("{} × {} pcs = {}", self.tier.display_name(), self.quantity, total_text)
        };

        let mut breakdown = vec![BreakdownLine {
            text: format!(
                "Base price: {} × {} = {}",
                format_rub(self.tier.base_price(), 0),
                self.quantity,
                format_rub(quote.base_total, 0)
            ),
            emphasized: false,
        }];
        if self.tier.offers_add_on() && quote.add_on_total > Decimal::ZERO {
            breakdown.push(BreakdownLine {
                text: format!(
                    "Option \"{}\": {} × {} = {}",
                    self.add_on.display_name(),
                    format_rub(self.add_on.price(), 0),
                    self.quantity,
                    format_rub(quote.add_on_total, 0)
                ),
                emphasized: false,
            });
        }
        if quote.surcharge_applied() {
            breakdown.push(BreakdownLine {
                text: "Quality guarantee: +50%".to_string(),
                emphasized: false,
            });
        }
        breakdown.push(BreakdownLine {
            text: format!("Total: {}", total_text),
            emphasized: true,
        });

        ServiceView {
            total_text,
            summary,
            breakdown,
            breakdown_visible: self.details_visible,
            details_toggle_label: if self.details_visible {
                "Hide calculation details"
            } else {
                "Show calculation details"
            },
            show_add_on_section: self.tier.offers_add_on(),
            show_surcharge_section: self.tier.offers_surcharge(),
            quantity: self.quantity,
            tier: self.tier,
            add_on: self.add_on,
            surcharge: self.surcharge,
        }
    }
}

impl Component for ServiceCalculator {
    type Event = ServiceEvent;
    type View = ServiceView;
    type Error = ServiceCalcError;

    fn apply(&mut self, event: ServiceEvent) -> Result<ServiceView, ServiceCalcError> {
        match event {
            ServiceEvent::TierChange(tier) => {
                self.tier = tier;
                debug!(tier = %tier, "service tier changed");
            }
            ServiceEvent::QuantityChange(text) => {
                // Non-numeric input leaves the stored quantity alone; the
                // echoed view snaps the widget back to the last good value.
                let trimmed = text.trim();
                if let Ok(n) = trimmed.parse::<i64>() {
                    self.quantity = n.clamp(MIN_QUANTITY as i64, MAX_QUANTITY as i64) as u32;
                    debug!(quantity = self.quantity, "quantity changed");
                } else if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    // All digits but past i64 range: still numeric, clamp
                    self.quantity = MAX_QUANTITY;
                    debug!(quantity = self.quantity, "quantity changed");
                } else {
                    debug!(input = %text, "ignoring unparsable quantity");
                }
            }
            ServiceEvent::AddOnChange(add_on) => {
                self.add_on = add_on;
                debug!(add_on = %add_on, "add-on changed");
            }
            ServiceEvent::SurchargeToggle(enabled) => {
                self.surcharge = enabled;
                debug!(surcharge = enabled, "surcharge toggled");
            }
            ServiceEvent::DetailsToggle => {
                self.details_visible = !self.details_visible;
                debug!(visible = self.details_visible, "details toggled");
            }
        }
        Ok(self.view())
    }

    fn render(&self) -> ServiceView {
        self.view()
    }
}
