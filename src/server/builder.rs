//! ServerBuilder for fluent API to build the order HTTP server

use super::dispatcher::{Clock, OrderDispatcher};
use super::router::build_app;
use crate::config::{StorageBackend, StorageConfig};
use crate::core::OrderStore;
use crate::storage::InMemoryOrderStore;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the order service router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryOrderStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn OrderStore>>,
    clock: Option<Clock>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            clock: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the order store (required)
    pub fn with_store(mut self, store: impl OrderStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared order store
    pub fn with_shared_store(mut self, store: Arc<dyn OrderStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the clock that dates new orders
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Add routes outside the order resource, e.g. admin or metrics endpoints
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Open the store described by the storage config
    ///
    /// For `postgres` this connects a pool and applies the schema.
    pub async fn with_store_from_config(self, config: &StorageConfig) -> Result<Self> {
        match config.backend {
            StorageBackend::InMemory => {
                tracing::info!("Using in-memory order store");
                Ok(self.with_store(InMemoryOrderStore::new()))
            }
            StorageBackend::Postgres => self.with_postgres_store(config).await,
        }
    }

    #[cfg(feature = "postgres")]
    async fn with_postgres_store(self, config: &StorageConfig) -> Result<Self> {
        use crate::storage::postgres::{PostgresOrderStore, ensure_schema};
        use sqlx::postgres::PgPoolOptions;

        let url = config
            .database_url
            .as_deref()
            .context("storage.database_url is required for the postgres backend")?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(url)
            .await
            .context("Failed to connect to PostgreSQL")?;
        ensure_schema(&pool).await?;

        tracing::info!(max_connections = config.max_connections, "Using PostgreSQL order store");
        Ok(self.with_store(PostgresOrderStore::new(pool)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn with_postgres_store(self, _config: &StorageConfig) -> Result<Self> {
        anyhow::bail!("the postgres backend requires building with the `postgres` feature")
    }

    /// Build the dispatcher alone, without HTTP routing
    pub fn build_dispatcher(&mut self) -> Result<OrderDispatcher> {
        let store = self
            .store
            .take()
            .ok_or_else(|| anyhow::anyhow!("OrderStore is required. Call .with_store()"))?;

        let dispatcher = OrderDispatcher::new(store);
        Ok(match self.clock {
            Some(clock) => dispatcher.with_clock(clock),
            None => dispatcher,
        })
    }

    /// Build the final REST router
    ///
    /// This generates:
    /// - CRUD routes for orders
    /// - Health check routes
    /// - Any custom routes
    pub fn build(mut self) -> Result<Router> {
        let dispatcher = self.build_dispatcher()?;

        let mut app = build_app(dispatcher);
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
