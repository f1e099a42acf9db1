//! API server state

use std::sync::Arc;

use crate::api::envelope::{Envelope, ErrorSink, TracingErrorSink};
use crate::assets::{AssetStore, MockAssetStore};
use crate::auth::{Authenticator, DemoAuthenticator};
use crate::config::AppConfig;
use crate::ident::IdGenerator;
use crate::types::Environment;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Error envelope unit, fixed per instance
    pub envelope: Envelope,

    /// Credential verification and session issuance seam
    pub authenticator: Arc<dyn Authenticator>,

    /// Asset catalogue seam
    pub assets: Arc<dyn AssetStore>,
}

impl AppState {
    /// Create state with explicit collaborators
    pub fn new(
        environment: Environment,
        sink: Arc<dyn ErrorSink>,
        authenticator: Arc<dyn Authenticator>,
        assets: Arc<dyn AssetStore>,
    ) -> Self {
        Self {
            envelope: Envelope::new(environment, sink),
            authenticator,
            assets,
        }
    }

    /// Create state wired with the shipped mock collaborators
    pub fn demo(config: &AppConfig) -> Self {
        let ids = Arc::new(IdGenerator::new());

        Self::new(
            config.runtime.environment,
            Arc::new(TracingErrorSink),
            Arc::new(DemoAuthenticator::new(&config.auth, ids.clone())),
            Arc::new(MockAssetStore::new(ids)),
        )
    }
}
