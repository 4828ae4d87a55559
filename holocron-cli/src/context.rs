use crate::storage::{FileStorage, default_data_dir};
use anyhow::{Context as _, Result};
use shared::{actions::Clients, config::ClientConfig, request::ReqwestTransport};
use std::path::Path;

/// Everything a command needs: configuration, clients and local storage.
#[derive(Debug)]
pub struct Context {
    pub config: ClientConfig,
    pub clients: Clients<ReqwestTransport>,
    pub storage: FileStorage,
}

impl Context {
    pub fn load(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let config = ClientConfig::load_config(config_path).with_context(|| match config_path {
            Some(path) => format!("failed to load configuration from {}", path.display()),
            None => "failed to resolve configuration".to_string(),
        })?;
        let storage = match data_dir {
            Some(dir) => FileStorage::in_dir(dir),
            None => FileStorage::in_dir(&default_data_dir()),
        };
        let clients = Clients::from_config(&config, ReqwestTransport::new());
        Ok(Self {
            config,
            clients,
            storage,
        })
    }
}
