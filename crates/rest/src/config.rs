//! Server configuration for the Seqgate HTTP API.
//!
//! Supports programmatic construction, command line arguments, and
//! environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SEQGATE_PORT` | 8080 | Server port |
//! | `SEQGATE_HOST` | 127.0.0.1 | Host to bind |
//! | `SEQGATE_LOG_LEVEL` | info | Log level |
//! | `SEQGATE_DATABASE_URL` | seqgate.db | SQLite database path (`:memory:` for in-memory) |
//! | `SEQGATE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SEQGATE_ENABLE_CORS` | true | Enable CORS |
//! | `SEQGATE_CORS_ORIGINS` | * | Allowed origins |
//! | `SEQGATE_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `SEQGATE_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//!
//! # Example
//!
//! ```rust
//! use seqgate_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..ServerConfig::from_env()
//! };
//! ```

use clap::Parser;

/// Server configuration for the Seqgate HTTP API.
#[derive(Debug, Clone, Parser)]
#[command(name = "seqgate")]
#[command(about = "Seqgate lab data gateway")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SEQGATE_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SEQGATE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "SEQGATE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// SQLite database path, or `:memory:` for an in-memory database.
    #[arg(long, env = "SEQGATE_DATABASE_URL", default_value = "seqgate.db")]
    pub database_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "SEQGATE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "SEQGATE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "SEQGATE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "SEQGATE_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "SEQGATE_CORS_HEADERS",
        default_value = "Content-Type,Accept"
    )]
    pub cors_headers: String,
}

impl ServerConfig {
    /// Creates a configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self::parse_from(["seqgate"])
    }

    /// Creates a configuration suitable for tests: in-memory database, no
    /// CORS, short timeout.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            database_url: ":memory:".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
        }
    }

    /// The socket address string to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration, returning all problems found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !["error", "warn", "info", "debug", "trace"]
            .contains(&self.log_level.to_lowercase().as_str())
        {
            errors.push(format!("invalid log level: {}", self.log_level));
        }
        if self.request_timeout == 0 {
            errors.push("request timeout must be at least 1 second".to_string());
        }
        if self.database_url.trim().is_empty() {
            errors.push("database url must not be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
