//! Dispatch targets for intents.

use std::fmt;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

/// Destination for intents emitted by a view.
///
/// Cheap to clone. A parent hands each child a derived dispatcher (see
/// [`Dispatcher::map`]) that tags the child's intents before they reach the
/// parent's own target.
pub struct Dispatcher<A> {
    sink: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A: 'static> Dispatcher<A> {
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Dispatcher backed by an mpsc channel.
    ///
    /// Intents arrive on the receiver in the order they were dispatched.
    pub fn channel() -> (Self, Receiver<A>)
    where
        A: Send,
    {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Self::new(move |action| {
            if tx.send(action).is_err() {
                tracing::trace!("Dispatch: action dropped (receiver gone)");
            }
        });
        (dispatcher, rx)
    }

    pub fn dispatch(&self, action: A) {
        (self.sink)(action);
    }

    /// Derive a target for another intent type.
    ///
    /// Every intent sent to the returned dispatcher is passed through `wrap`
    /// and forwarded here.
    pub fn map<B, F>(&self, wrap: F) -> Dispatcher<B>
    where
        B: 'static,
        F: Fn(B) -> A + Send + Sync + 'static,
    {
        let parent = self.clone();
        Dispatcher::new(move |action| parent.dispatch(wrap(action)))
    }
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<A> fmt::Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
