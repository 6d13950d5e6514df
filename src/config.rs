/// Application configuration
/// In debug builds: loads from .env file first
/// In release builds: reads the environment directly
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the movie recommendation backend
    pub backend_url: String,
    /// Signed-in user's email (stand-in for the external auth provider)
    pub user_email: Option<String>,
    /// Signed-in user's display name
    pub user_name: Option<String>,
}

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            // Try to load .env file
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Config: Dev mode activated - loaded .env file");
            } else {
                tracing::info!("Config: No .env file found, using defaults");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    fn from_env() -> Self {
        let backend_url = std::env::var("FLICKPICK_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let user_email = std::env::var("FLICKPICK_USER_EMAIL").ok();
        let user_name = std::env::var("FLICKPICK_USER_NAME").ok();

        Self {
            backend_url,
            user_email,
            user_name,
        }
    }
}
