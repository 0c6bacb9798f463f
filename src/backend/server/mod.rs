//! Server Module
//!
//! Initializes and configures the Axum HTTP server.
//!
//! - **`config`** - Layered configuration (defaults, TOML file, environment)
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - User store selection and app creation
//!
//! # Example
//!
//! ```rust,no_run
//! use formauth::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig, SessionSettings};
pub use init::{build_state, create_app, StartupError};
pub use state::AppState;
