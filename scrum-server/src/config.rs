use std::{sync::Arc, time::Duration};

use scrum_auth::{InMemoryUserStore, TokenManager};
use scrum_core::SpecAnalyzer;
use scrum_github::{BoardCreator, CodeExchanger};

/// Fallback signing secret, matching the development default of the
/// original deployment. Override it in any real environment.
pub const DEFAULT_SECRET: &str = "man7ebbech";

/// Security configuration for the ScrumAgent server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all, which is NOT recommended for production)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 10MB)
    pub max_body_size: usize,
    /// Request timeout duration (default: 30 seconds)
    pub request_timeout: Duration,
    /// Whether to include upstream error details in responses (default: false for production)
    pub expose_error_details: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(), // Empty = permissive (for dev), should be configured for prod
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_timeout: Duration::from_secs(30),
            expose_error_details: false,
        }
    }
}

impl SecurityConfig {
    /// Create a development configuration (permissive CORS, detailed errors)
    pub fn development() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 10 * 1024 * 1024,
            request_timeout: Duration::from_secs(60),
            expose_error_details: true,
        }
    }

    /// Create a production configuration with specific allowed origins
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins,
            max_body_size: 10 * 1024 * 1024,
            request_timeout: Duration::from_secs(30),
            expose_error_details: false,
        }
    }
}

/// Server-side credentials for automatic board creation after analysis.
#[derive(Clone, Debug)]
pub struct AutoBoardConfig {
    pub token: String,
    pub username: String,
}

/// Configuration for the ScrumAgent server.
#[derive(Clone)]
pub struct ServerConfig {
    pub analyzer: Arc<dyn SpecAnalyzer>,
    pub exchanger: Arc<dyn CodeExchanger>,
    pub board: Arc<dyn BoardCreator>,
    pub user_store: Arc<InMemoryUserStore>,
    pub tokens: Arc<TokenManager>,
    pub auto_board: Option<AutoBoardConfig>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(
        analyzer: Arc<dyn SpecAnalyzer>,
        exchanger: Arc<dyn CodeExchanger>,
        board: Arc<dyn BoardCreator>,
    ) -> Self {
        Self {
            analyzer,
            exchanger,
            board,
            user_store: Arc::new(InMemoryUserStore::with_demo_user()),
            tokens: Arc::new(TokenManager::new(DEFAULT_SECRET)),
            auto_board: None,
            security: SecurityConfig::default(),
        }
    }

    pub fn with_user_store(mut self, user_store: Arc<InMemoryUserStore>) -> Self {
        self.user_store = user_store;
        self
    }

    pub fn with_token_manager(mut self, tokens: Arc<TokenManager>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Enable automatic board creation with a server-side token.
    pub fn with_auto_board(mut self, token: impl Into<String>, username: impl Into<String>) -> Self {
        self.auto_board = Some(AutoBoardConfig { token: token.into(), username: username.into() });
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure allowed CORS origins
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    /// Configure maximum request body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    /// Configure request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }

    /// Enable detailed upstream error messages (for development only)
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.security.expose_error_details = expose;
        self
    }
}
