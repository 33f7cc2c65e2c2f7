//! HTTP server that binds the axum router to a TCP socket.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::services::ContactService;

mod handlers;
mod router;
mod views;

pub use router::{build_router, AppState};

/// Errors that can occur in the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        /// The address string.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server encountered an I/O error while serving.
    #[error("server error: {0}")]
    Serve(String),
}

/// Axum-based HTTP server for the contact book.
pub struct HttpServer {
    addr: SocketAddr,
    state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server on the given port.
    pub fn new(service: Arc<dyn ContactService>, port: u16) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            state: AppState { service },
        }
    }

    /// The address the server will bind to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Starts the server and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: self.addr.to_string(),
                source: e,
            })?;

        tracing::info!(addr = %self.addr, "contact book server ready");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteContactRepository;
    use crate::services::ContactServiceImpl;

    fn make_service() -> Arc<dyn ContactService> {
        let repo = Arc::new(SqliteContactRepository::open_in_memory().expect("in-memory db"));
        Arc::new(ContactServiceImpl::new(repo))
    }

    #[test]
    fn new_sets_correct_port() {
        let server = HttpServer::new(make_service(), 3000);
        assert_eq!(server.addr().port(), 3000);
    }

    #[test]
    fn bind_error_displays_address() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:8080".into(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert!(err.to_string().contains("127.0.0.1:8080"));
    }
}
