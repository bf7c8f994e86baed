use std::sync::Arc;

use bank::{get_catalog, weapons::Catalog};
use tracing::warn;

use super::{
    config::Config, csrf::CsrfTokens, database::VoteStore, error::StateError, limiter::RateLimiter,
    pages::Pages,
};

pub struct State {
    pub catalog: Catalog,
    pub config: Config,
    pub store: VoteStore,
    pub csrf: CsrfTokens,
    pub limiter: RateLimiter,
    pub pages: Pages,
}

impl State {
    pub async fn new(config: Config) -> Result<Arc<Self>, StateError> {
        let store = super::database::init_store(&config).await?;

        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: VoteStore) -> Result<Arc<Self>, StateError> {
        let catalog = get_catalog();

        let secret = match &config.csrf_secret {
            Some(secret) => secret.as_bytes().to_vec(),
            None => {
                warn!("CSRF_SECRET not set, tokens will not survive a restart");
                rand::random::<[u8; 32]>().to_vec()
            }
        };

        Ok(Arc::new(Self {
            catalog,
            csrf: CsrfTokens::new(&secret, config.csrf_ttl).map_err(|_| StateError::CsrfSecret)?,
            limiter: RateLimiter::per_minute(config.votes_per_minute),
            pages: Pages::new()?,
            config,
            store,
        }))
    }
}
