#[cfg(test)]
mod tests {
    use crate::app_system::CalculatorSystem;
    use crate::order_calc::{FieldMarker, OrderCalcError, OrderFocus};
    use crate::service_calc::ServiceCalcError;

    #[tokio::test]
    async fn test_order_submission_flow() {
        let system = CalculatorSystem::new();
        let order = &system.order_client;

        order.select_product("laptop").await.unwrap();
        let view = order.input_quantity("3").await.unwrap();
        assert_eq!(view.quantity_marker, FieldMarker::Valid);

        let view = order.submit().await.unwrap();
        assert!(view.scroll_to_result);
        let result = view.result.expect("result rendered");
        assert_eq!(result.product_name, "Laptop");
        assert_eq!(result.total_text, "8\u{a0}999,97\u{a0}₽");
        assert_eq!(
            result.details,
            "Selected product: Laptop (2\u{a0}999,99\u{a0}₽ each), quantity: 3"
        );

        // The result stays rendered until a reset
        let view = order.render().await.unwrap();
        assert!(view.result.is_some());
        assert!(!view.scroll_to_result);

        let view = order.reset().await.unwrap();
        assert!(view.result.is_none());
        assert_eq!(view.focus, Some(OrderFocus::ProductSelect));
        assert_eq!(view.quantity_marker, FieldMarker::Neutral);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_order_validation_paths() {
        let system = CalculatorSystem::new();
        let order = &system.order_client;

        // No product selected: blocking alert, focus back to the select
        order.input_quantity("3").await.unwrap();
        let view = order.submit().await.unwrap();
        assert!(view.alert.is_some());
        assert_eq!(view.focus, Some(OrderFocus::ProductSelect));
        assert!(view.result.is_none());

        // Out-of-range quantity: inline error, product selection preserved
        order.select_product("headphones").await.unwrap();
        order.input_quantity("1000").await.unwrap();
        let view = order.submit().await.unwrap();
        assert!(view.alert.is_none());
        assert!(view.inline_error);
        assert_eq!(view.focus, Some(OrderFocus::QuantityInput));
        assert!(view.result.is_none());

        // Correcting only the quantity completes the submission
        order.input_quantity("999").await.unwrap();
        let view = order.submit().await.unwrap();
        let result = view.result.expect("result rendered");
        assert_eq!(result.product_name, "Headphones");
        assert_eq!(result.quantity, 999);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_view_values_are_rejected_at_the_boundary() {
        let system = CalculatorSystem::new();

        let err = system.order_client.select_product("toaster").await.unwrap_err();
        assert_eq!(err, OrderCalcError::UnknownProduct("toaster".to_string()));

        let err = system.service_client.select_tier("gold").await.unwrap_err();
        assert_eq!(err, ServiceCalcError::UnknownTier("gold".to_string()));

        let err = system.service_client.select_add_on("slow").await.unwrap_err();
        assert_eq!(err, ServiceCalcError::UnknownAddOn("slow".to_string()));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_service_session() {
        let system = CalculatorSystem::new();
        let service = &system.service_client;

        // Initial paint before any event
        let view = service.render().await.unwrap();
        assert_eq!(view.total_text, "500\u{a0}₽");
        assert!(!view.show_add_on_section);
        assert!(!view.breakdown_visible);

        // Standard tier exposes the add-on selector
        let view = service.select_tier("standard").await.unwrap();
        assert!(view.show_add_on_section);
        assert!(!view.show_surcharge_section);

        service.set_quantity("2").await.unwrap();
        let view = service.select_add_on("fast").await.unwrap();
        assert_eq!(view.total_text, "2\u{a0}000\u{a0}₽");

        // Premium drops the stale add-on and exposes the surcharge toggle
        let view = service.select_tier("premium").await.unwrap();
        assert!(view.show_surcharge_section);
        assert_eq!(view.total_text, "2\u{a0}400\u{a0}₽");

        service.set_quantity("1").await.unwrap();
        let view = service.toggle_surcharge(true).await.unwrap();
        assert_eq!(view.total_text, "1\u{a0}800\u{a0}₽");

        // Breakdown becomes visible on toggle, pricing untouched
        let view = service.toggle_details().await.unwrap();
        assert!(view.breakdown_visible);
        assert_eq!(view.total_text, "1\u{a0}800\u{a0}₽");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_service_quantity_widgets_stay_in_sync() {
        let system = CalculatorSystem::new();
        let service = &system.service_client;

        // Both widgets render whatever the echoed clamped value is
        let view = service.set_quantity("150").await.unwrap();
        assert_eq!(view.quantity, 100);

        let view = service.set_quantity("0").await.unwrap();
        assert_eq!(view.quantity, 1);

        let view = service.set_quantity("42").await.unwrap();
        assert_eq!(view.quantity, 42);

        // Two renders with unchanged state are identical
        let first = service.render().await.unwrap();
        let second = service.render().await.unwrap();
        assert_eq!(first, second);

        system.shutdown().await.unwrap();
    }
}
