use std::sync::Arc;

use compass_auth::jwt::TokenVerifier;
use compass_bedrock::converse::BedrockGenerator;
use compass_bedrock::generator::SharedGenerator;
use compass_storage::memory::MemoryStore;
use compass_storage::s3::S3Store;
use compass_storage::store::SharedStore;

use crate::config::{CompassConfig, StorageBackend};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub generator: SharedGenerator,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(store: SharedStore, generator: SharedGenerator, verifier: TokenVerifier) -> Self {
        Self {
            store,
            generator,
            verifier: Arc::new(verifier),
        }
    }

    pub async fn from_config(config: &CompassConfig) -> Self {
        let store: SharedStore = match config.storage.backend {
            StorageBackend::Memory => {
                tracing::warn!("using in-memory storage; records will not survive a restart");
                Arc::new(MemoryStore::new())
            }
            StorageBackend::S3 => Arc::new(
                S3Store::connect(config.storage.bucket.clone(), &config.storage.region).await,
            ),
        };

        let generator = Arc::new(
            BedrockGenerator::connect(&config.generation.region, config.generation.model_id.clone())
                .await,
        );

        let verifier = TokenVerifier::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.issuer.as_deref(),
        );

        Self::new(store, generator, verifier)
    }
}
