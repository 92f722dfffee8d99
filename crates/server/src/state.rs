use crate::config::ServerConfig;
use classify::HourClassifier;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use store::{NotesRepository, Repositories, RepositoryFactory, UserRepository};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// User lookups for /about/{id}
    pub users: Arc<dyn UserRepository>,

    /// Note storage for /notes
    pub notes: Arc<dyn NotesRepository>,

    /// Hour classifier built from `config.hours`
    pub hours: HourClassifier,

    /// Prometheus render handle, present once the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state with repositories from the configured backend
    pub fn new(config: ServerConfig) -> Self {
        let repositories = RepositoryFactory::create(&config.store);
        Self::with_repositories(config, repositories)
    }

    /// Create server state around caller-supplied repositories
    pub fn with_repositories(config: ServerConfig, repositories: Repositories) -> Self {
        Self {
            hours: HourClassifier::new(config.hours),
            config: Arc::new(config),
            users: repositories.users,
            notes: repositories.notes,
            metrics: None,
        }
    }

    /// Attach the Prometheus handle used by /metrics
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Release repository resources; errors are logged, not returned
    pub fn close(&self) {
        if let Err(err) = self.users.close() {
            tracing::warn!(error = %err, "Failed to close user repository");
        }
        if let Err(err) = self.notes.close() {
            tracing::warn!(error = %err, "Failed to close notes repository");
        }
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
