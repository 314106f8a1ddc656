use crate::domain::model::{Cookie, FormParams};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Form-encoded POST transport. The response body is parsed as JSON; any
/// non-success status or malformed body surfaces as an error.
#[async_trait]
pub trait FormApi: Send + Sync {
    async fn post_form(&self, endpoint: &str, params: &FormParams) -> Result<serde_json::Value>;
}

/// Capabilities the session routines need from the hosting browser page.
/// Implementations own their interior mutability.
pub trait BrowserEnv: Send + Sync {
    fn user_agent(&self) -> String;
    fn confirm(&self, prompt: &str) -> bool;
    fn set_cookie(&self, cookie: &Cookie);
    fn reload(&self);
}

/// Policy deciding whether logout needs an explicit user confirmation for
/// a given user-agent string.
pub trait ConfirmPolicy: Send + Sync {
    fn requires_confirmation(&self, user_agent: &str) -> bool;
}
