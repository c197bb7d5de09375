/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod projects;
pub mod services;

use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

impl RequestConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("Token not set. Use `studio login` to log in.")]
    MissingToken,
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Server responded with {status}: {}", detail.as_deref().unwrap_or("no details"))]
    Api { status: u16, detail: Option<String> },
}

impl ConnectorError {
    /// Message for the user: the server's own detail when it sent one,
    /// otherwise the generic text for the failed action.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ConnectorError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

pub type RequestType = reqwest::Method;

#[derive(Deserialize, Debug)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
    message: Option<String>,
}

pub(crate) fn extract_detail(bytes: &[u8]) -> Option<String> {
    let body = serde_json::from_slice::<ErrorBody>(bytes).ok()?;

    match body.detail {
        Some(serde_json::Value::String(detail)) => Some(detail),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .next()
            .map(str::to_string),
        _ => body.message,
    }
}

async fn check_status(res: reqwest::Response) -> Result<Vec<u8>, ConnectorError> {
    let status = res.status();
    let bytes = res.bytes().await?;

    if !status.is_success() {
        let detail = extract_detail(&bytes);
        tracing::debug!(status = status.as_u16(), ?detail, "api request rejected");
        return Err(ConnectorError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(bytes.to_vec())
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ConnectorError> {
    let body = check_status(res).await?;
    Ok(serde_json::from_slice::<T>(&body)?)
}

/// For endpoints whose success body carries nothing the client needs.
async fn parse_ack(res: reqwest::Response) -> Result<(), ConnectorError> {
    check_status(res).await.map(|_| ())
}

fn get_client(
    config: RequestConfig,
    endpoint: String,
    request_type: RequestType,
    login: bool,
) -> Result<reqwest::RequestBuilder, ConnectorError> {
    let url = format!(
        "{}/api/{}",
        config.server_url.trim_end_matches('/'),
        endpoint
    );
    tracing::debug!(method = request_type.as_str(), url = url.as_str(), "sending request");

    let client = reqwest::Client::new();
    let mut client = client.request(request_type, url);

    client = client.header("Content-Type", "application/json");

    if !login {
        return Ok(client);
    }

    let token = match config.token {
        Some(token) if !token.is_empty() => token,
        _ => return Err(ConnectorError::MissingToken),
    };

    client = client.header("Authorization", format!("Bearer {}", token));

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        let body = br#"{"detail": "Invalid credentials"}"#;
        assert_eq!(extract_detail(body), Some("Invalid credentials".to_string()));
    }

    #[test]
    fn test_extract_detail_validation_list() {
        let body = br#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#;
        assert_eq!(extract_detail(body), Some("field required".to_string()));
    }

    #[test]
    fn test_extract_detail_message_fallback() {
        let body = br#"{"message": "Not allowed"}"#;
        assert_eq!(extract_detail(body), Some("Not allowed".to_string()));
    }

    #[test]
    fn test_extract_detail_not_json() {
        assert_eq!(extract_detail(b"<html>502</html>"), None);
    }

    #[test]
    fn test_user_message_prefers_server_detail() {
        let err = ConnectorError::Api {
            status: 404,
            detail: Some("Email not found".to_string()),
        };
        assert_eq!(err.user_message("Failed to send code"), "Email not found");

        let err = ConnectorError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message("Failed to send code"), "Failed to send code");
        assert_eq!(
            ConnectorError::MissingToken.user_message("Failed"),
            "Failed"
        );
    }

    #[test]
    fn test_get_client_requires_token_for_login_endpoints() {
        let config = RequestConfig::new("http://localhost:8000");
        let res = get_client(config, "bookings".to_string(), RequestType::GET, true);
        assert!(matches!(res, Err(ConnectorError::MissingToken)));

        let config = RequestConfig::new("http://localhost:8000").with_token("");
        let res = get_client(config, "bookings".to_string(), RequestType::GET, true);
        assert!(matches!(res, Err(ConnectorError::MissingToken)));
    }

    #[test]
    fn test_get_client_builds_api_url() {
        let config = RequestConfig::new("http://localhost:8000/").with_token("abc");
        let req = get_client(config, "bookings".to_string(), RequestType::GET, true)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(req.url().as_str(), "http://localhost:8000/api/bookings");
        assert_eq!(req.headers()["Authorization"], "Bearer abc");
    }
}
