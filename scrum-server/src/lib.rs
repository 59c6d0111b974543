//! # scrum-server
//!
//! HTTP API server for ScrumAgent. Exposes the planning endpoints
//! (`/api/scrum/analyze`, `/api/scrum/fix`), the account endpoints
//! (`/api/auth/*`), and the GitHub integration (`/api/github/oauth`,
//! `/api/github/board`).
//!
//! The server is stateless apart from the in-memory user store; the
//! analyzer and GitHub clients are injected through their traits so tests
//! can run against mocks.
//!
//! # Example
//!
//! ```rust,ignore
//! use scrum_server::{ServerConfig, create_app};
//!
//! let config = ServerConfig::new(analyzer, exchanger, board);
//! let app = create_app(config);
//! axum::serve(listener, app).await?;
//! ```

mod config;
pub mod rest;

pub use config::{AutoBoardConfig, DEFAULT_SECRET, SecurityConfig, ServerConfig};
pub use rest::create_app;
