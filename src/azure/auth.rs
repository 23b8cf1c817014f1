//! Azure Authentication
//!
//! Bearer tokens for ARM calls. Real AAD credential flows are out of scope
//! for this crate; tokens come from the environment or from the caller, and
//! the [`TokenProvider`] trait is the seam where a full credential chain
//! could be plugged in.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::error::{Error, Result};

/// Environment variable consulted by [`Credentials::from_env`].
pub const TOKEN_ENV_VAR: &str = "AZURE_ACCESS_TOKEN";

/// Token expiry buffer - refresh tokens this much before they actually expire
/// This prevents using tokens that are about to expire during a request
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Default token TTL if we can't determine expiry (conservative: 30 minutes)
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Source of bearer tokens.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> BoxFuture<'_, Result<String>>;
}

/// Provider returning a fixed token supplied at construction.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn token(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move { Ok(self.token.clone()) })
    }
}

/// Provider reading the token from `AZURE_ACCESS_TOKEN` on every refresh,
/// so an externally rotated value is picked up without restarting.
pub struct EnvTokenProvider;

impl TokenProvider for EnvTokenProvider {
    fn token(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            std::env::var(TOKEN_ENV_VAR).map_err(|_| Error::MissingConfig(TOKEN_ENV_VAR))
        })
    }
}

/// Azure credentials holder with token caching
#[derive(Clone)]
pub struct Credentials {
    provider: Arc<dyn TokenProvider>,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    /// Check if this cached token is still valid
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

impl Credentials {
    /// Wrap an arbitrary provider.
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            provider,
            token_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Use a fixed token supplied by the caller.
    pub fn from_static(token: impl Into<String>) -> Self {
        Self::new(Arc::new(StaticTokenProvider::new(token)))
    }

    /// Read the token from `AZURE_ACCESS_TOKEN`.
    ///
    /// Fails immediately when the variable is unset so misconfiguration
    /// surfaces at client construction rather than on the first call.
    pub fn from_env() -> Result<Self> {
        if std::env::var(TOKEN_ENV_VAR).is_err() {
            return Err(Error::MissingConfig(TOKEN_ENV_VAR));
        }
        Ok(Self::new(Arc::new(EnvTokenProvider)))
    }

    /// Get an access token for API calls, checking expiry before returning
    /// a cached value.
    pub async fn get_token(&self) -> Result<String> {
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let token = self.provider.token().await?;

        // Providers here don't expose expiry, so apply a conservative TTL
        let expires_at = Instant::now() + DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER;

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: token.clone(),
                expires_at,
            });
        }

        tracing::debug!(
            "New token cached, expires in ~{} minutes",
            (DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER).as_secs() / 60
        );

        Ok(token)
    }

    /// Force refresh the token
    pub async fn refresh_token(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }

        self.get_token().await
    }
}
