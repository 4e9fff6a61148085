//! REST client for boards and columns.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become [`ApiError::Network`] for reads and
//! [`ApiError::Create`] for the board POST. Nothing here retries; the page
//! controller decides what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Board, BoardId, Column};
#[cfg(feature = "csr")]
use super::types::NewBoard;
use crate::config::ApiConfig;

/// Failure of a single remote call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Network { status: u16 },
    #[error("board creation failed with status {status}")]
    Create { status: u16 },
    #[error("request did not complete: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Remote operations the page needs from the backend.
#[async_trait(?Send)]
pub trait BoardApi {
    /// `GET {base}/Boards`.
    async fn list_boards(&self) -> Result<Vec<Board>, ApiError>;

    /// `GET {base}/ColumnByBoardId?BoardId={id}`.
    async fn list_columns(&self, board_id: &BoardId) -> Result<Vec<Column>, ApiError>;

    /// `POST {base}/Boards` with `{Name, IsActive: true}`.
    async fn create_board(&self, name: &str) -> Result<Board, ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn boards_endpoint(base_url: &str) -> String {
    format!("{base_url}/Boards")
}

#[cfg(any(test, feature = "csr"))]
fn columns_endpoint(base_url: &str, board_id: &BoardId) -> String {
    format!(
        "{base_url}/ColumnByBoardId?BoardId={}",
        urlencoding::encode(board_id.as_str())
    )
}

/// [`BoardApi`] backed by the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct HttpBoardApi {
    config: ApiConfig,
}

impl HttpBoardApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait(?Send)]
impl BoardApi for HttpBoardApi {
    async fn list_boards(&self) -> Result<Vec<Board>, ApiError> {
        #[cfg(feature = "csr")]
        {
            get_json(&boards_endpoint(self.base_url())).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn list_columns(&self, board_id: &BoardId) -> Result<Vec<Column>, ApiError> {
        #[cfg(feature = "csr")]
        {
            get_json(&columns_endpoint(self.base_url(), board_id)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = board_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_board(&self, name: &str) -> Result<Board, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&boards_endpoint(self.base_url()))
                .json(&NewBoard::active(name))
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Create { status: resp.status() });
            }
            resp.json::<Board>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Network { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
