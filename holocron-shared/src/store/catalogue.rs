use super::Reducer;
use crate::{
    models::{EntityKind, FavoriteEntry, LikePayload, Load, Page, Property},
    storage::{DurableStorage, read_favorites, write_favorites},
};
use tracing::{debug, warn};

/// Monotonic id tagging one fetch, so late responses can be told apart.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueAction {
    FetchStarted {
        kind: EntityKind,
        request: RequestId,
    },
    PageLoaded {
        kind: EntityKind,
        request: RequestId,
        page: Page,
    },
    FetchFailed {
        kind: EntityKind,
        request: RequestId,
        message: String,
    },
    DetailStarted {
        request: RequestId,
    },
    DetailLoaded {
        request: RequestId,
        properties: Vec<Property>,
    },
    DetailFailed {
        request: RequestId,
        message: String,
    },
    ToggleLike(LikePayload),
}

/// A loadable value plus the id of the newest request issued for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Slot<T> {
    load: Load<T>,
    latest: Option<RequestId>,
}

impl<T> Slot<T> {
    fn start(&mut self, request: RequestId) {
        self.latest = Some(request);
        self.load = Load::Loading;
    }

    /// Settles the slot unless a newer request superseded `request`.
    fn settle(&mut self, request: RequestId, load: Load<T>) {
        if self.latest == Some(request) {
            self.load = load;
        } else {
            debug!(request, latest = ?self.latest, "dropping stale response");
        }
    }
}

/// Catalogue listings, the open detail view and the favorites set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueState {
    people: Slot<Page>,
    planets: Slot<Page>,
    vehicles: Slot<Page>,
    detail: Slot<Vec<Property>>,
    favorites: Vec<FavoriteEntry>,
}

impl CatalogueState {
    /// Empty listings with the favorites read back from `storage`.
    #[must_use]
    pub fn rehydrate(storage: &dyn DurableStorage) -> Self {
        Self {
            favorites: read_favorites(storage),
            ..Self::default()
        }
    }

    /// Listing state for `kind`.
    #[must_use]
    pub const fn page(&self, kind: EntityKind) -> &Load<Page> {
        &self.slot(kind).load
    }

    #[must_use]
    pub const fn detail(&self) -> &Load<Vec<Property>> {
        &self.detail.load
    }

    /// Favorites in insertion order.
    #[must_use]
    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    /// Favorites of one kind, in insertion order.
    pub fn favorites_of(&self, kind: EntityKind) -> impl Iterator<Item = &FavoriteEntry> {
        self.favorites.iter().filter(move |entry| entry.kind == kind)
    }

    #[must_use]
    pub fn is_favorite(&self, uid: &str, kind: EntityKind) -> bool {
        self.favorites.iter().any(|entry| entry.matches(uid, kind))
    }

    const fn slot(&self, kind: EntityKind) -> &Slot<Page> {
        match kind {
            EntityKind::People => &self.people,
            EntityKind::Planets => &self.planets,
            EntityKind::Vehicles => &self.vehicles,
        }
    }

    fn slot_mut(&mut self, kind: EntityKind) -> &mut Slot<Page> {
        match kind {
            EntityKind::People => &mut self.people,
            EntityKind::Planets => &mut self.planets,
            EntityKind::Vehicles => &mut self.vehicles,
        }
    }

    fn toggle_like(&mut self, payload: LikePayload, storage: &dyn DurableStorage) {
        let Some(entry) = payload.into_entry() else {
            debug!("ignoring like without uid or type");
            return;
        };

        if let Some(position) = self
            .favorites
            .iter()
            .position(|known| known.matches(&entry.uid, entry.kind))
        {
            self.favorites.remove(position);
        } else {
            self.favorites.push(entry);
        }

        if let Err(error) = write_favorites(storage, &self.favorites) {
            warn!(%error, "failed to persist favorites");
        }
    }
}

impl Reducer for CatalogueState {
    type Action = CatalogueAction;

    fn reduce(&mut self, action: CatalogueAction, storage: &dyn DurableStorage) {
        match action {
            CatalogueAction::FetchStarted { kind, request } => self.slot_mut(kind).start(request),
            CatalogueAction::PageLoaded {
                kind,
                request,
                page,
            } => self.slot_mut(kind).settle(request, Load::Loaded(page)),
            CatalogueAction::FetchFailed {
                kind,
                request,
                message,
            } => self.slot_mut(kind).settle(request, Load::Failed(message)),
            CatalogueAction::DetailStarted { request } => self.detail.start(request),
            CatalogueAction::DetailLoaded {
                request,
                properties,
            } => self.detail.settle(request, Load::Loaded(properties)),
            CatalogueAction::DetailFailed { request, message } => {
                self.detail.settle(request, Load::Failed(message));
            }
            CatalogueAction::ToggleLike(payload) => self.toggle_like(payload, storage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::CatalogueItem,
        storage::{FAVORITES_KEY, MemoryStorage},
    };

    fn item(uid: &str, name: &str) -> CatalogueItem {
        CatalogueItem {
            uid: uid.into(),
            name: name.into(),
            url: format!("https://www.swapi.tech/api/people/{uid}"),
        }
    }

    fn like(uid: &str, kind: EntityKind) -> CatalogueAction {
        CatalogueAction::ToggleLike(LikePayload {
            uid: Some(uid.into()),
            kind: Some(kind),
            ..LikePayload::default()
        })
    }

    #[test]
    fn start_marks_only_that_kind_loading() {
        let storage = MemoryStorage::new();
        let mut state = CatalogueState::default();
        state.reduce(
            CatalogueAction::FetchStarted {
                kind: EntityKind::Planets,
                request: 1,
            },
            &storage,
        );

        assert!(state.page(EntityKind::Planets).is_loading());
        assert_eq!(state.page(EntityKind::People), &Load::Idle);
    }

    #[test]
    fn page_loaded_replaces_items_and_cursors() {
        let storage = MemoryStorage::new();
        let mut state = CatalogueState::default();
        let (a, b) = (item("1", "Luke Skywalker"), item("2", "C-3PO"));
        state.reduce(
            CatalogueAction::FetchStarted {
                kind: EntityKind::People,
                request: 1,
            },
            &storage,
        );
        state.reduce(
            CatalogueAction::PageLoaded {
                kind: EntityKind::People,
                request: 1,
                page: Page {
                    items: vec![a.clone(), b.clone()],
                    previous: None,
                    next: Some("url2".into()),
                },
            },
            &storage,
        );

        let page = state.page(EntityKind::People).value().unwrap();
        assert_eq!(page.items, vec![a, b]);
        assert_eq!(page.previous, None);
        assert_eq!(page.next.as_deref(), Some("url2"));
        assert!(!state.page(EntityKind::People).is_loading());
    }

    #[test]
    fn failure_of_one_kind_leaves_others_untouched() {
        let storage = MemoryStorage::new();
        let mut state = CatalogueState::default();
        state.reduce(
            CatalogueAction::FetchStarted {
                kind: EntityKind::People,
                request: 1,
            },
            &storage,
        );
        state.reduce(
            CatalogueAction::PageLoaded {
                kind: EntityKind::People,
                request: 1,
                page: Page::default(),
            },
            &storage,
        );
        state.reduce(
            CatalogueAction::FetchStarted {
                kind: EntityKind::Vehicles,
                request: 2,
            },
            &storage,
        );
        state.reduce(
            CatalogueAction::FetchFailed {
                kind: EntityKind::Vehicles,
                request: 2,
                message: "Not Found".into(),
            },
            &storage,
        );

        assert_eq!(state.page(EntityKind::Vehicles).error(), Some("Not Found"));
        assert_eq!(state.page(EntityKind::People), &Load::Loaded(Page::default()));
    }

    #[test]
    fn stale_responses_are_ignored() {
        let storage = MemoryStorage::new();
        let mut state = CatalogueState::default();
        for request in [1, 2] {
            state.reduce(
                CatalogueAction::FetchStarted {
                    kind: EntityKind::People,
                    request,
                },
                &storage,
            );
        }
        let newest = Page {
            items: vec![item("11", "Anakin Skywalker")],
            ..Page::default()
        };
        state.reduce(
            CatalogueAction::PageLoaded {
                kind: EntityKind::People,
                request: 2,
                page: newest.clone(),
            },
            &storage,
        );
        state.reduce(
            CatalogueAction::PageLoaded {
                kind: EntityKind::People,
                request: 1,
                page: Page {
                    items: vec![item("1", "Luke Skywalker")],
                    ..Page::default()
                },
            },
            &storage,
        );
        state.reduce(
            CatalogueAction::FetchFailed {
                kind: EntityKind::People,
                request: 1,
                message: "late".into(),
            },
            &storage,
        );

        assert_eq!(state.page(EntityKind::People), &Load::Loaded(newest));
    }

    #[test]
    fn detail_follows_its_own_requests() {
        let storage = MemoryStorage::new();
        let mut state = CatalogueState::default();
        state.reduce(CatalogueAction::DetailStarted { request: 4 }, &storage);
        assert!(state.detail().is_loading());

        let rows = vec![Property {
            label: "name".into(),
            value: "Tatooine".into(),
        }];
        state.reduce(
            CatalogueAction::DetailLoaded {
                request: 4,
                properties: rows.clone(),
            },
            &storage,
        );
        assert_eq!(state.detail(), &Load::Loaded(rows));
    }

    #[test]
    fn double_toggle_restores_favorites() {
        let storage = MemoryStorage::new();
        let mut state = CatalogueState::default();
        state.reduce(like("1", EntityKind::People), &storage);
        let before = state.favorites().to_vec();

        state.reduce(like("2", EntityKind::Planets), &storage);
        state.reduce(like("2", EntityKind::Planets), &storage);

        assert_eq!(state.favorites(), before.as_slice());
        assert_eq!(read_favorites(&storage), before);
    }

    #[test]
    fn same_uid_in_different_kinds_are_distinct() {
        let storage = MemoryStorage::new();
        let mut state = CatalogueState::default();
        state.reduce(like("1", EntityKind::People), &storage);
        state.reduce(like("1", EntityKind::Vehicles), &storage);

        assert_eq!(state.favorites().len(), 2);
        assert!(state.is_favorite("1", EntityKind::Vehicles));
        assert_eq!(state.favorites_of(EntityKind::People).count(), 1);
    }

    #[test]
    fn incomplete_like_is_a_no_op() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "[]");
        let mut state = CatalogueState::rehydrate(&storage);
        state.reduce(like("1", EntityKind::People), &storage);
        let before = state.clone();

        state.reduce(
            CatalogueAction::ToggleLike(LikePayload {
                uid: Some("1".into()),
                ..LikePayload::default()
            }),
            &storage,
        );
        state.reduce(
            CatalogueAction::ToggleLike(LikePayload {
                kind: Some(EntityKind::People),
                ..LikePayload::default()
            }),
            &storage,
        );

        assert_eq!(state, before);
    }

    #[test]
    fn toggle_persists_synchronously() {
        let storage = MemoryStorage::new();
        let mut state = CatalogueState::default();
        state.reduce(
            CatalogueAction::ToggleLike(LikePayload::for_item(
                &item("1", "Luke Skywalker"),
                EntityKind::People,
            )),
            &storage,
        );

        let stored = storage.read(FAVORITES_KEY).unwrap();
        assert!(stored.contains(r#""uid":"1""#));
        assert!(stored.contains(r#""type":"people""#));
        assert!(stored.contains("Luke Skywalker"));
    }

    #[test]
    fn rehydrate_tolerates_placeholder_values() {
        for raw in ["undefined", "null", "[{broken"] {
            let storage = MemoryStorage::with_entry(FAVORITES_KEY, raw);
            assert!(CatalogueState::rehydrate(&storage).favorites().is_empty());
        }
    }
}
