use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION (Component trait)
// =============================================================================

/// Trait for a UI-driven calculator component managed by a `ComponentActor`.
///
/// A component owns its state, reduces discrete view events into new state,
/// and renders a view model the presentation layer can display verbatim.
/// Derived values are never stored: `render` recomputes them from state, so
/// rendering twice with unchanged state yields identical output.
pub trait Component: Send + 'static {
    /// A discrete user-input event coming from the view layer.
    type Event: Send + Debug;
    /// Everything the view layer needs to redraw this component.
    type View: Send + Debug;
    /// Rejection of an event the component cannot apply.
    type Error: Send + Debug;

    /// Apply one event to the state and return the resulting view model.
    fn apply(&mut self, event: Self::Event) -> Result<Self::View, Self::Error>;

    /// Render the current state without mutating it (initial paint, refresh).
    fn render(&self) -> Self::View;
}

// =============================================================================
// 2. THE MESSAGES
// =============================================================================

/// Channel-level failures between a client and its component task.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComponentError {
    #[error("component channel closed")]
    ChannelClosed,
    #[error("component task dropped the response")]
    Dropped,
}

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ComponentRequest<C: Component> {
    Dispatch {
        event: C::Event,
        respond_to: Response<C::View, C::Error>,
    },
    Render {
        respond_to: oneshot::Sender<C::View>,
    },
}

// =============================================================================
// 3. THE ACTOR
// =============================================================================

/// Owns one component instance and serializes every event on a single task.
///
/// All state mutation happens here, in response to one message at a time, so
/// the components never need interior locking.
pub struct ComponentActor<C: Component> {
    receiver: mpsc::Receiver<ComponentRequest<C>>,
    component: C,
}

impl<C: Component> ComponentActor<C> {
    pub fn new(buffer_size: usize, component: C) -> (Self, ComponentClient<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, component };
        let client = ComponentClient { sender };
        (actor, client)
    }

    /// Runs until every client handle is dropped.
    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ComponentRequest::Dispatch { event, respond_to } => {
                    let result = self.component.apply(event);
                    let _ = respond_to.send(result);
                }
                ComponentRequest::Render { respond_to } => {
                    let _ = respond_to.send(self.component.render());
                }
            }
        }
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

pub struct ComponentClient<C: Component> {
    sender: mpsc::Sender<ComponentRequest<C>>,
}

// Manual impl: a derive would demand `C: Clone`, but only the sender half
// needs cloning and components themselves never leave their actor.
impl<C: Component> Clone for ComponentClient<C> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<C: Component> ComponentClient<C> {
    pub fn new(sender: mpsc::Sender<ComponentRequest<C>>) -> Self {
        Self { sender }
    }

    /// Send one event and wait for the resulting view model.
    ///
    /// The outer error is transport failure; the inner error is the
    /// component rejecting the event.
    pub async fn dispatch(
        &self,
        event: C::Event,
    ) -> Result<Result<C::View, C::Error>, ComponentError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| ComponentError::ChannelClosed)?;
        response.await.map_err(|_| ComponentError::Dropped)
    }

    /// Fetch a fresh view model for the current state.
    pub async fn render(&self) -> Result<C::View, ComponentError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ComponentRequest::Render { respond_to })
            .await
            .map_err(|_| ComponentError::ChannelClosed)?;
        response.await.map_err(|_| ComponentError::Dropped)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
