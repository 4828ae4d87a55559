use super::Reducer;
use crate::{
    models::{Contact, ContactId, ContactPatch, Load},
    storage::DurableStorage,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactsAction {
    FetchStarted,
    Loaded(Vec<Contact>),
    FetchFailed(String),
    Added(Contact),
    Updated(ContactPatch),
    /// Carries the bare id of the removed contact.
    Deleted(ContactId),
    /// A create/update/delete call failed; the collection is kept.
    MutationFailed(String),
}

/// The contact collection of the configured user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactsState {
    pub collection: Load<Vec<Contact>>,
    /// Last mutation failure, cleared by the next fetch or successful mutation.
    pub notice: Option<String>,
}

impl ContactsState {
    /// Loaded contacts, or an empty slice.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        self.collection.value().map(Vec::as_slice).unwrap_or_default()
    }

    /// Contacts matching `term` on any text field; all of them for a blank term.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let term = term.trim();
        self.contacts()
            .iter()
            .filter(|contact| term.is_empty() || contact.matches(term))
            .collect()
    }

    fn mutate(&mut self, apply: impl FnOnce(&mut Vec<Contact>)) {
        if matches!(self.collection, Load::Idle) {
            self.collection = Load::Loaded(Vec::new());
        }
        match self.collection.value_mut() {
            Some(contacts) => {
                apply(contacts);
                self.notice = None;
            }
            None => debug!("ignoring contact mutation while the collection is not loaded"),
        }
    }
}

impl Reducer for ContactsState {
    type Action = ContactsAction;

    fn reduce(&mut self, action: ContactsAction, _storage: &dyn DurableStorage) {
        match action {
            ContactsAction::FetchStarted => {
                self.collection = Load::Loading;
                self.notice = None;
            }
            ContactsAction::Loaded(contacts) => self.collection = Load::Loaded(contacts),
            ContactsAction::FetchFailed(message) => self.collection = Load::Failed(message),
            ContactsAction::Added(contact) => self.mutate(|contacts| contacts.push(contact)),
            ContactsAction::Updated(patch) => self.mutate(|contacts| {
                if let Some(contact) = contacts.iter_mut().find(|contact| contact.id == patch.id) {
                    contact.merge(&patch);
                }
            }),
            ContactsAction::Deleted(id) => {
                self.mutate(|contacts| contacts.retain(|contact| contact.id != id));
            }
            ContactsAction::MutationFailed(message) => self.notice = Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn contact(id: u64, name: &str, phone: &str) -> Contact {
        Contact {
            id: ContactId::from(id),
            name: name.into(),
            address: String::new(),
            phone: phone.into(),
            email: String::new(),
        }
    }

    fn loaded(contacts: Vec<Contact>) -> ContactsState {
        ContactsState {
            collection: Load::Loaded(contacts),
            notice: None,
        }
    }

    #[test]
    fn fetch_lifecycle() {
        let storage = MemoryStorage::new();
        let mut state = ContactsState::default();
        state.reduce(ContactsAction::FetchStarted, &storage);
        assert!(state.collection.is_loading());

        state.reduce(
            ContactsAction::Loaded(vec![contact(1, "Luke", "01")]),
            &storage,
        );
        assert_eq!(state.contacts().len(), 1);

        state.reduce(ContactsAction::FetchStarted, &storage);
        state.reduce(ContactsAction::FetchFailed("no user".into()), &storage);
        assert_eq!(state.collection.error(), Some("no user"));
        assert!(state.contacts().is_empty());
    }

    #[test]
    fn delete_removes_exactly_the_matching_id() {
        let storage = MemoryStorage::new();
        let mut state = loaded(vec![contact(5, "Leia", "2"), contact(6, "Han", "1")]);
        state.reduce(ContactsAction::Deleted(ContactId::from(5)), &storage);

        assert_eq!(state.contacts(), &[contact(6, "Han", "1")]);
    }

    #[test]
    fn update_merges_into_the_existing_contact() {
        let storage = MemoryStorage::new();
        let mut state = loaded(vec![contact(6, "Han", "1")]);
        state.reduce(
            ContactsAction::Updated(ContactPatch {
                name: Some("X".into()),
                ..ContactPatch::new(ContactId::from(6))
            }),
            &storage,
        );

        assert_eq!(state.contacts(), &[contact(6, "X", "1")]);
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let storage = MemoryStorage::new();
        let mut state = loaded(vec![contact(6, "Han", "1")]);
        let before = state.clone();
        state.reduce(
            ContactsAction::Updated(ContactPatch {
                name: Some("X".into()),
                ..ContactPatch::new(ContactId::from(99))
            }),
            &storage,
        );

        assert_eq!(state, before);
    }

    #[test]
    fn add_appends_and_promotes_an_idle_collection() {
        let storage = MemoryStorage::new();
        let mut state = ContactsState::default();
        state.reduce(ContactsAction::Added(contact(1, "Luke", "01")), &storage);
        state.reduce(ContactsAction::Added(contact(2, "Leia", "02")), &storage);

        let names: Vec<&str> = state.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Luke", "Leia"]);
    }

    #[test]
    fn mutation_failure_keeps_the_collection() {
        let storage = MemoryStorage::new();
        let mut state = loaded(vec![contact(6, "Han", "1")]);
        state.reduce(
            ContactsAction::MutationFailed("Error creating contact".into()),
            &storage,
        );

        assert_eq!(state.notice.as_deref(), Some("Error creating contact"));
        assert_eq!(state.contacts().len(), 1);

        state.reduce(ContactsAction::Deleted(ContactId::from(6)), &storage);
        assert!(state.notice.is_none());
    }

    #[test]
    fn search_filters_case_insensitively() {
        let state = loaded(vec![contact(5, "Leia", "2"), contact(6, "Han", "555")]);
        assert_eq!(state.search("HAN").len(), 1);
        assert_eq!(state.search("55")[0].name, "Han");
        assert_eq!(state.search("  ").len(), 2);
    }
}
