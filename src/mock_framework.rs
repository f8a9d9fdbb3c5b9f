//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_dispatch`] or [`expect_render`] to assert behavior.

use tokio::sync::{mpsc, oneshot};
use crate::component::{Component, ComponentClient, ComponentRequest};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit/integration tests, we don't want to spin up a full `ComponentActor` if we are
/// just testing the *Client* logic (boundary parsing, error mapping).
///
/// Instead, we create a "Mock Client". This client sends messages to a channel we control
/// (`receiver`). We can then inspect the messages arriving on that channel and assert they
/// are correct, and answer them however the test needs.
pub fn create_mock_client<C: Component>(
    buffer_size: usize,
) -> (ComponentClient<C>, mpsc::Receiver<ComponentRequest<C>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ComponentClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<C: Component>(
    receiver: &mut mpsc::Receiver<ComponentRequest<C>>,
) -> Option<(C::Event, oneshot::Sender<Result<C::View, C::Error>>)> {
    match receiver.recv().await {
        Some(ComponentRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Render request
pub async fn expect_render<C: Component>(
    receiver: &mut mpsc::Receiver<ComponentRequest<C>>,
) -> Option<oneshot::Sender<C::View>> {
    match receiver.recv().await {
        Some(ComponentRequest::Render { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::OrderCalcClient;
    use crate::order_calc::{FieldMarker, OrderCalcError, OrderCalculator, OrderEvent, OrderView};

    fn empty_view() -> OrderView {
        OrderView {
            alert: None,
            inline_error: false,
            quantity_marker: FieldMarker::Neutral,
            focus: None,
            scroll_to_result: false,
            result: None,
        }
    }

    #[tokio::test]
    async fn test_mock_client_answers_dispatch() {
        let (inner, mut receiver) = create_mock_client::<OrderCalculator>(10);
        let client = OrderCalcClient::new(inner);

        let submit_task = tokio::spawn(async move { client.submit().await });

        let (event, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch");
        assert_eq!(event, OrderEvent::Submit);
        responder.send(Ok(empty_view())).unwrap();

        let view = submit_task.await.unwrap().unwrap();
        assert!(view.result.is_none());
    }

    #[tokio::test]
    async fn test_mock_client_answers_render() {
        let (inner, mut receiver) = create_mock_client::<OrderCalculator>(10);
        let client = OrderCalcClient::new(inner);

        let render_task = tokio::spawn(async move { client.render().await });

        let responder = expect_render(&mut receiver).await.expect("Expected Render");
        responder.send(empty_view()).unwrap();

        let view = render_task.await.unwrap().unwrap();
        assert_eq!(view.quantity_marker, FieldMarker::Neutral);
    }

    #[tokio::test]
    async fn test_unknown_product_never_reaches_the_component() {
        let (inner, mut receiver) = create_mock_client::<OrderCalculator>(10);
        let client = OrderCalcClient::new(inner);

        let err = client.select_product("toaster").await.unwrap_err();
        assert_eq!(err, OrderCalcError::UnknownProduct("toaster".to_string()));

        // The boundary rejected the value; no message was sent
        assert!(receiver.try_recv().is_err());
    }
}
