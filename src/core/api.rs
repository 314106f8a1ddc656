use crate::core::form::encode_form_body;
use crate::domain::model::FormParams;
use crate::domain::ports::FormApi;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP-backed [`FormApi`] implementation.
#[derive(Debug, Clone, Default)]
pub struct HttpFormApi {
    client: Client,
}

impl HttpFormApi {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FormApi for HttpFormApi {
    async fn post_form(&self, endpoint: &str, params: &FormParams) -> Result<serde_json::Value> {
        validate_url("endpoint", endpoint)?;

        let body = encode_form_body(params);
        tracing::debug!("POST {} ({} params)", endpoint, params.len());

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ClientError::StatusError {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let value = serde_json::from_str(&text)?;
        Ok(value)
    }
}
