//! Application state shared across all commands.
//!
//! The [`AppState`] struct is wrapped in a `Mutex` by the caller so that
//! every command handler can reach it.

use trainboard_shared::EmployeeId;
use trainboard_store::sample::sample_snapshot;
use trainboard_store::{Store, StoreError};

use crate::config::ClientConfig;

/// The admin currently logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub employee_id: EmployeeId,
    pub name: String,
}

/// Central application state.
pub struct AppState {
    /// The entity store holding the current snapshot.
    pub store: Store,

    /// `None` until an admin logs in; cleared again on logout.
    pub admin: Option<AdminSession>,

    pub config: ClientConfig,
}

impl AppState {
    /// Create an empty state with default configuration.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            admin: None,
            config: ClientConfig::default(),
        }
    }

    /// Seed the store as `config` asks: the seed file if one is set,
    /// otherwise the sample dataset if enabled, otherwise nothing.
    pub fn from_config(config: ClientConfig) -> Result<Self, StoreError> {
        let store = match (&config.seed_path, config.load_sample_data) {
            (Some(path), _) => Store::open_at(path)?,
            (None, true) => Store::from_snapshot(sample_snapshot()),
            (None, false) => Store::new(),
        };
        Ok(Self {
            store,
            admin: None,
            config,
        })
    }

    /// The active admin session, or the error a mutating command returns
    /// without one.
    pub fn require_admin(&self) -> Result<&AdminSession, String> {
        self.admin
            .as_ref()
            .ok_or_else(|| "Admin login required".to_string())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn sample_data_is_loaded_by_default() {
        let state = AppState::from_config(ClientConfig::default()).unwrap();
        assert_eq!(state.store.list_departments().len(), 4);
        assert!(state.admin.is_none());
        assert!(state.require_admin().is_err());
    }

    #[test]
    fn empty_store_when_sample_data_disabled() {
        let config = ClientConfig {
            load_sample_data: false,
            ..ClientConfig::default()
        };
        let state = AppState::from_config(config).unwrap();
        assert!(state.store.list_trainings().is_empty());
    }

    #[test]
    fn seed_file_wins_over_sample_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"departments":[{{"id":"d","name":"Ops","color":"#E57373"}}]}}"##
        )
        .unwrap();

        let config = ClientConfig {
            seed_path: Some(file.path().to_path_buf()),
            ..ClientConfig::default()
        };
        let state = AppState::from_config(config).unwrap();
        assert_eq!(state.store.list_departments().len(), 1);
        assert!(state.store.list_employees().is_empty());
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let config = ClientConfig {
            seed_path: Some("/definitely/not/here.json".into()),
            ..ClientConfig::default()
        };
        assert!(matches!(AppState::from_config(config), Err(StoreError::Io(_))));
    }
}
