//! Per-invocation session: resolved config plus a ready HTTP client

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};

use crate::api::{HttpClient, Resource, ResourceApi};
use crate::cli::GlobalOpts;
use crate::core::{Config, ViewState};
use crate::schema::{FormValidator, SchemaRegistry};

pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
    pub global: GlobalOpts,
}

impl Session {
    /// Load the config file and layer `--server`/`--token` (or their
    /// environment variables) over it
    pub fn open(global: &GlobalOpts) -> Result<Self> {
        let config_path = match &global.config {
            Some(path) => path.clone(),
            None => Config::default_path().into_diagnostic()?,
        };
        let mut config = Config::load(&config_path).into_diagnostic()?;
        config.apply_overrides(global.server.as_deref(), global.token.as_deref());

        Ok(Self {
            config,
            config_path,
            global: global.clone(),
        })
    }

    /// Persist the config file (without the flag/environment overrides)
    pub fn save_file(&self, update: impl FnOnce(&mut Config)) -> Result<()> {
        let mut on_disk = Config::load(&self.config_path).into_diagnostic()?;
        update(&mut on_disk);
        on_disk.save(&self.config_path).into_diagnostic()
    }

    pub fn client(&self) -> Result<HttpClient> {
        HttpClient::from_config(&self.config).into_diagnostic()
    }

    pub fn api<T: Resource>(&self) -> Result<ResourceApi<T>> {
        Ok(ResourceApi::new(self.client()?))
    }

    /// Unfiltered first page at the configured page size for `T`
    pub fn view_state<T: Resource>(&self) -> ViewState {
        ViewState::new(self.config.page_size(T::PATH, T::PAGE_SIZE))
    }

    pub fn validator(&self) -> Result<FormValidator> {
        Ok(FormValidator::new(&SchemaRegistry::default())?)
    }
}
