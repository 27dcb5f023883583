use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::auth;
use crate::error::ApiError;

/// All backend routes hang off this prefix; the frontend is served from the
/// same origin.
pub const API_BASE: &str = "/api";

/// Standard response envelope used by every backend endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct Api {
    base: String,
    client: reqwest::Client,
}

impl Default for Api {
    fn default() -> Self {
        Api::new(base_url())
    }
}

// reqwest wants absolute URLs, so the base is resolved against the page
// origin up front.
#[cfg(feature = "web")]
fn base_url() -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{API_BASE}")
}

#[cfg(not(feature = "web"))]
fn base_url() -> String {
    API_BASE.to_string()
}

impl Api {
    pub fn new(base: impl Into<String>) -> Api {
        Api {
            base: base.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Builds a request for `path` relative to the API base, attaching the
    /// stored bearer token when the visitor is logged in.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, format!("{}{}", self.base, path));
        if let Some(token) = auth::token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn run<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let envelope = Self::run_raw::<T>(builder).await?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    async fn run_raw<T: DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let envelope: ApiEnvelope<T> = response.json().await?;
        if !status.is_success() || !envelope.success {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: envelope
                    .error
                    .unwrap_or_else(|| "Request failed".to_string()),
            });
        }
        Ok(envelope)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::run(self.request(Method::GET, path)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        Self::run(self.request(Method::POST, path).json(body)).await
    }

    /// POST for endpoints that acknowledge with a bare `{success, message}`
    /// envelope and no `data` payload.
    pub async fn post_ok<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: serde::Serialize + ?Sized,
    {
        Self::run_raw::<serde_json::Value>(self.request(Method::POST, path).json(body)).await?;
        Ok(())
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        Self::run(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::run(self.request(Method::DELETE, path)).await
    }

    /// Multipart POST. No JSON content-type header is set so the client can
    /// emit a `multipart/form-data` boundary, e.g. for event image uploads.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        Self::run(self.request(Method::POST, path).multipart(form)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_success_payload() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).expect("valid envelope");
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(vec![1, 2, 3]));
        assert_eq!(envelope.error, None);
    }

    #[test]
    fn envelope_decodes_error_payload() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"error":"Invalid event ID"}"#)
                .expect("valid envelope");
        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.error.as_deref(), Some("Invalid event ID"));
    }

    #[test]
    fn envelope_decodes_message_only_ack() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"Visitor tracked"}"#)
                .expect("valid envelope");
        assert!(envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Visitor tracked"));
    }
}
