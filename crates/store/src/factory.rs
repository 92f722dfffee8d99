use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::backend::{
    InMemoryNotesRepository, InMemoryUserRepository, NotesRepository, UserRepository,
};
use crate::types::{default_users, User};

/// Storage backends the factory can build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// `RwLock`ed maps; contents are lost on restart.
    #[default]
    InMemory,
}

impl BackendKind {
    /// Parses a backend name, falling back to the default for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(backend = %name, "unknown_store_backend; using in_memory");
            BackendKind::default()
        })
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in_memory" | "in-memory" | "memory" => Ok(BackendKind::InMemory),
            other => Err(format!("unknown backend '{other}'")),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::InMemory => f.write_str("in_memory"),
        }
    }
}

/// Store section of the service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend name, e.g. `"in_memory"`.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Users loaded into the user repository at startup.
    #[serde(default = "default_users")]
    pub seed_users: Vec<User>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            seed_users: default_users(),
        }
    }
}

fn default_backend() -> String {
    BackendKind::default().to_string()
}

/// Repositories handed to the HTTP layer.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub notes: Arc<dyn NotesRepository>,
}

/// Builds repositories for the configured backend.
///
/// ```
/// use store::{RepositoryFactory, StoreConfig};
///
/// let repos = RepositoryFactory::create(&StoreConfig::default());
/// assert!(repos.users.find_user_by_id(1).unwrap().is_some());
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    pub fn create(config: &StoreConfig) -> Repositories {
        let kind = BackendKind::from_name_or_default(&config.backend);
        info!(
            backend = %kind,
            seed_users = config.seed_users.len(),
            "store_initialized"
        );
        match kind {
            BackendKind::InMemory => Repositories {
                users: Arc::new(InMemoryUserRepository::new(config.seed_users.clone())),
                notes: Arc::new(InMemoryNotesRepository::new()),
            },
        }
    }
}
