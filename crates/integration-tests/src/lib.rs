//! Integration tests for the MODA storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p moda-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `page_flows` - page runtime driven through events and virtual time
//! - `server` - the HTTP surface over a real socket

use std::net::SocketAddr;
use std::time::Duration;

use moda_storefront::config::StorefrontConfig;
use moda_storefront::state::AppState;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A storefront served on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with no sign-up delay.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind.
    pub async fn start() -> std::io::Result<Self> {
        Self::with_signup_delay(Duration::ZERO).await
    }

    /// Start a server whose `POST /signup` waits `delay`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind.
    pub async fn with_signup_delay(delay: Duration) -> std::io::Result<Self> {
        let config = StorefrontConfig {
            port: 0,
            signup_delay: delay,
            ..StorefrontConfig::default()
        };
        let listener = TcpListener::bind(config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        let app = moda_storefront::app(AppState::new(config));

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "test server stopped");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
