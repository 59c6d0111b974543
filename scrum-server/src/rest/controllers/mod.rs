pub mod auth;
pub mod github;
pub mod scrum;

pub use auth::AuthController;
pub use github::GithubController;
pub use scrum::ScrumController;
