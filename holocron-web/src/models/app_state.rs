use crate::storage::BrowserStorage;
use shared::store::{CatalogueState, ContactsState, Reducer, SessionState};
use std::ops::Deref;
use yewdux::{Dispatch, Store};

/// A yewdux store wrapping one shared reducer.
pub trait ReducerStore: Store + Clone {
    type State: Reducer;

    fn state_mut(&mut self) -> &mut Self::State;
}

/// Turns a yewdux dispatch into a dispatcher for the action clients.
///
/// Every action is reduced in place against browser local storage.
pub fn reducer<S>(dispatch: &Dispatch<S>) -> impl Fn(<S::State as Reducer>::Action) + 'static
where
    S: ReducerStore,
{
    let dispatch = dispatch.clone();
    move |action| {
        dispatch.reduce_mut(|store| store.state_mut().reduce(action, &BrowserStorage));
    }
}

macro_rules! reducer_store {
    ($(#[$meta:meta])* $name:ident($state:ty), $init:expr) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Store)]
        pub struct $name(pub $state);

        impl Default for $name {
            fn default() -> Self {
                Self($init)
            }
        }

        impl Deref for $name {
            type Target = $state;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ReducerStore for $name {
            type State = $state;

            fn state_mut(&mut self) -> &mut Self::State {
                &mut self.0
            }
        }
    };
}

reducer_store!(
    /// Listings, detail and favorites; favorites come back from local storage.
    CatalogueStore(CatalogueState),
    CatalogueState::rehydrate(&BrowserStorage)
);

reducer_store!(
    /// The contact collection.
    ContactsStore(ContactsState),
    ContactsState::default()
);

reducer_store!(
    /// The signed-in user; the token comes back from local storage.
    SessionStore(SessionState),
    SessionState::rehydrate(&BrowserStorage)
);

/// Text of the navbar search box, shared by the listing pages.
#[derive(Default, Clone, PartialEq, Eq, Store)]
pub struct SearchTerm(pub String);

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::{
        models::{EntityKind, LikePayload},
        storage::{DurableStorage, FAVORITES_KEY, TOKEN_KEY},
        store::{CatalogueAction, SessionAction},
    };
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_like_is_persisted_to_local_storage() {
        BrowserStorage.remove(FAVORITES_KEY).unwrap();
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<CatalogueStore>::new(&cx);
        let dispatcher = reducer(&dispatch);

        dispatcher(CatalogueAction::ToggleLike(LikePayload {
            uid: Some("1".to_string()),
            kind: Some(EntityKind::People),
            ..LikePayload::default()
        }));

        assert!(dispatch.get().is_favorite("1", EntityKind::People));
        assert!(BrowserStorage.read(FAVORITES_KEY).unwrap().contains("\"uid\":\"1\""));

        let reloaded = Dispatch::<CatalogueStore>::new(&yewdux::Context::new());
        assert!(reloaded.get().is_favorite("1", EntityKind::People));
        BrowserStorage.remove(FAVORITES_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_session_rehydrates_from_token() {
        BrowserStorage.write(TOKEN_KEY, "abc").unwrap();
        let dispatch = Dispatch::<SessionStore>::new(&yewdux::Context::new());
        assert!(dispatch.get().is_authenticated);

        reducer(&dispatch)(SessionAction::Logout);
        assert!(!dispatch.get().is_authenticated);
        assert_eq!(BrowserStorage.read(TOKEN_KEY), None);
    }
}
