//! Frontend configuration module
//!
//! Endpoints are fixed at build time: any `HOLOCRON_*` variable present when
//! the bundle is compiled replaces the matching default.

use shared::config::ClientConfig;

/// The client configuration baked into this build.
pub fn client_config() -> ClientConfig {
    let mut config = ClientConfig::with_defaults();
    if let Some(url) = option_env!("HOLOCRON_CATALOGUE_URL") {
        config.catalogue_base_url = url.to_string();
    }
    if let Some(url) = option_env!("HOLOCRON_CONTACTS_URL") {
        config.contacts_base_url = url.to_string();
    }
    if let Some(user) = option_env!("HOLOCRON_CONTACTS_USER") {
        config.contacts_user = user.to_string();
    }
    if let Some(url) = option_env!("HOLOCRON_AUTH_URL") {
        config.auth_base_url = url.to_string();
    }
    config
}
