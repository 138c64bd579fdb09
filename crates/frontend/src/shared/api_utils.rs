//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use super::error::FetchError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
/// Returns an empty string if window is not available (relative URLs).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path and an already encoded query string
pub fn api_url(path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", api_base(), path)
    } else {
        format!("{}{}?{}", api_base(), path, query)
    }
}

/// Serialize request parameters into a query string (`serde_qs` bracket notation for lists)
pub fn to_query_string<Q: Serialize>(params: &Q) -> Result<String, FetchError> {
    serde_qs::to_string(params).map_err(|e| FetchError::Request(e.to_string()))
}

/// GET `path?query` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str, query: &str) -> Result<T, FetchError> {
    let url = api_url(path, query);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}
