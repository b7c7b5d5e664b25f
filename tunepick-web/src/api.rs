//! HTTP transport for the save endpoint.

use tracing::debug;
use tunepick_common::endpoints::SAVE_PATH;
use tunepick_common::{ArtistSaver, SaveError, SaveRequest, SaveResponse};

/// Where API requests are sent. The page is served by the same backend, so
/// the base is the page origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Use the current page origin. Falls back to an empty base outside a browser.
    pub fn from_window() -> Self {
        let origin = web_sys_x::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    pub fn save_url(&self) -> String {
        format!("{}{}", self.base_url, SAVE_PATH)
    }
}

/// Posts the draft list as JSON to the save endpoint.
pub struct HttpArtistSaver {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpArtistSaver {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl ArtistSaver for HttpArtistSaver {
    async fn save(&self, request: &SaveRequest) -> Result<SaveResponse, SaveError> {
        let url = self.config.save_url();
        debug!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        decode_save_response(status, &body)
    }
}

/// A body carrying a `reason` is a response regardless of HTTP status, since
/// the backend reports rejections in the body.
fn decode_save_response(http_status: u16, body: &str) -> Result<SaveResponse, SaveError> {
    match serde_json::from_str::<SaveResponse>(body) {
        Ok(response) => Ok(response),
        Err(_) if !(200..300).contains(&http_status) => Err(SaveError::HttpStatus(http_status)),
        Err(e) => Err(SaveError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_url_joins_origin() {
        let config = ApiConfig::new("https://tunepick.example.com/");
        assert_eq!(config.save_url(), "https://tunepick.example.com/save");
        assert_eq!(ApiConfig::new("").save_url(), "/save");
    }

    #[test]
    fn test_decode_ok_body() {
        let response = decode_save_response(200, r#"{"reason":"ok"}"#).unwrap();
        assert_eq!(response.reason, "ok");
        assert!(response.is_accepted());
    }

    #[test]
    fn test_decode_rejection_in_body() {
        let response =
            decode_save_response(200, r#"{"status":401,"reason":"Invalid artist ID entered"}"#)
                .unwrap();
        assert!(!response.is_accepted());
    }

    #[test]
    fn test_decode_error_page() {
        assert_eq!(
            decode_save_response(500, "<html>Internal Server Error</html>"),
            Err(SaveError::HttpStatus(500))
        );
    }

    #[test]
    fn test_decode_garbage_on_success_status() {
        assert!(matches!(
            decode_save_response(200, "not json"),
            Err(SaveError::Decode(_))
        ));
    }

    #[test]
    fn test_reason_on_error_status_still_decodes() {
        let response = decode_save_response(401, r#"{"reason":"Please sign in"}"#).unwrap();
        assert_eq!(response.reason, "Please sign in");
    }
}
