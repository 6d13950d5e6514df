use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("backend returned status {0}")]
    Status(StatusCode),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A movie as the backend returns it. `rating` is only present on the
/// rated-movies endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Backend response envelope
#[derive(Debug, Deserialize)]
struct MoviesResponse {
    data: Vec<Movie>,
}

/// Client for the movie recommendation backend.
#[derive(Clone)]
pub struct MovieClient {
    http: Client,
    base_url: String,
}

impl MovieClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Fetch the full catalog for a user (`GET /all-movies`).
    pub async fn all_movies(&self, user_email: &str) -> Result<Vec<Movie>, ApiError> {
        self.fetch_movies("/all-movies", ("user_email", user_email))
            .await
    }

    /// Fetch the movies the user has rated (`GET /rated-movies`).
    pub async fn rated_movies(&self, email: &str) -> Result<Vec<Movie>, ApiError> {
        self.fetch_movies("/rated-movies", ("email", email)).await
    }

    async fn fetch_movies(
        &self,
        path: &str,
        query: (&str, &str),
    ) -> Result<Vec<Movie>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(&[query]).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Backend request to {} failed with status {}", url, status);
            return Err(ApiError::Status(status));
        }

        let body: MoviesResponse = serde_json::from_str(&response.text().await?)?;
        Ok(body.data)
    }
}
