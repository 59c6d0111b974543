//! # scrum-github
//!
//! GitHub integration for ScrumAgent:
//!
//! - [`OauthClient`] - authorization code exchange plus user profile fetch
//! - [`BoardClient`] - materializes a generated plan as a repository with
//!   labeled issues and a classic project board
//!
//! The HTTP surface depends on the [`CodeExchanger`] and [`BoardCreator`]
//! traits, never on the concrete clients.

mod board;
mod config;
mod error;
mod oauth;

pub use board::{BoardClient, BoardCreator, BoardSummary};
pub use config::{GITHUB_API_BASE, GITHUB_OAUTH_BASE, GitHubConfig, USER_AGENT};
pub use error::{GitHubError, Result};
pub use oauth::{AuthorizedUser, CodeExchanger, OauthClient};
