//! # Action clients
//!
//! Call sites that pair one network request with the actions of a store.
//! Every client is generic over the [`Transport`] so tests can script it.

pub mod auth;
pub mod catalogue;
pub mod contacts;

pub use auth::AuthClient;
pub use catalogue::{CatalogueClient, RequestSequence};
pub use contacts::ContactsClient;

use crate::{config::ClientConfig, request::Transport};

/// Joins `path` onto `base` with exactly one slash between them.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The three clients built from one configuration, sharing a transport.
#[derive(Debug)]
pub struct Clients<T> {
    pub catalogue: CatalogueClient<T>,
    pub contacts: ContactsClient<T>,
    pub auth: AuthClient<T>,
    /// Owner of the contact collection.
    pub contacts_user: String,
}

impl<T: Transport + Clone> Clients<T> {
    #[must_use]
    pub fn from_config(config: &ClientConfig, transport: T) -> Self {
        Self {
            catalogue: CatalogueClient::new(transport.clone(), config.catalogue_base_url.clone()),
            contacts: ContactsClient::new(transport.clone(), config.contacts_base_url.clone()),
            auth: AuthClient::new(transport, config.auth_base_url.clone()),
            contacts_user: config.contacts_user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_one_slash() {
        assert_eq!(endpoint("http://a/", "/b"), "http://a/b");
        assert_eq!(endpoint("http://a", "b/c"), "http://a/b/c");
    }

    #[test]
    fn clients_follow_the_configuration() {
        let config = ClientConfig {
            catalogue_base_url: "https://swapi.example/api".into(),
            ..ClientConfig::with_defaults()
        };
        let clients = Clients::from_config(&config, crate::request::ReqwestTransport::new());

        assert_eq!(clients.contacts_user, "chanchitoFeliz");
        assert_eq!(
            clients
                .catalogue
                .first_page_url(crate::models::EntityKind::People),
            "https://swapi.example/api/people"
        );
    }
}
