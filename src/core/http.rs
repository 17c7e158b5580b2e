//! HTTP utilities for database/auth service communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};

/// Header carrying the project's public key on every request.
pub const APIKEY: HeaderName = HeaderName::from_static("apikey");

/// PostgREST preference header.
pub const PREFER: HeaderName = HeaderName::from_static("prefer");

/// Accept value that makes PostgREST answer with a single object.
pub const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Build the headers every service call carries.
///
/// The bearer token is the user's access token when signed in, otherwise
/// the anon key itself.
pub fn service_headers(anon_key: &str, access_token: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(APIKEY, HeaderValue::from_str(anon_key)?);
    let bearer = format!("Bearer {}", access_token.unwrap_or(anon_key));
    h.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
    Ok(h)
}

/// Total row count from a PostgREST `Content-Range` value (`0-24/57`, `*/0`).
pub fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.parse().ok()
}
