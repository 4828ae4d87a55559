//! # Stores
//!
//! Reducers for each state slice, and a plain single-threaded [`Store`] that
//! owns one slice together with the durable storage its transitions write to.
//! The web client wraps the same reducers in `yewdux` stores instead.

pub mod catalogue;
pub mod contacts;
pub mod session;

pub use catalogue::{CatalogueAction, CatalogueState, RequestId};
pub use contacts::{ContactsAction, ContactsState};
pub use session::{SessionAction, SessionState};

use crate::{lifecycle::Dispatcher, storage::DurableStorage};
use std::cell::{Ref, RefCell};

/// A state slice that evolves by actions.
pub trait Reducer {
    type Action;

    /// Applies `action`. Persistence side effects go to `storage` before returning.
    fn reduce(&mut self, action: Self::Action, storage: &dyn DurableStorage);
}

/// Owns one state slice and its storage; dispatching reduces in place.
#[derive(Debug)]
pub struct Store<S, B> {
    state: RefCell<S>,
    storage: B,
}

impl<S, B> Store<S, B>
where
    S: Reducer,
    B: DurableStorage,
{
    pub const fn new(state: S, storage: B) -> Self {
        Self {
            state: RefCell::new(state),
            storage,
        }
    }

    /// Borrows the current state. Do not hold it across a dispatch.
    pub fn state(&self) -> Ref<'_, S> {
        self.state.borrow()
    }

    pub const fn storage(&self) -> &B {
        &self.storage
    }

    pub fn into_state(self) -> S {
        self.state.into_inner()
    }
}

impl<S, B> Dispatcher<S::Action> for Store<S, B>
where
    S: Reducer,
    B: DurableStorage,
{
    fn dispatch(&self, action: S::Action) {
        self.state.borrow_mut().reduce(action, &self.storage);
    }
}
