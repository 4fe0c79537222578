use crate::utils::{ApiConfig, Result, RowTranslatorError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// A service that maps text to its translation in `dest_lang`.
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str, dest_lang: &str) -> Result<String>;
}

/// Client for the public Google Translate web endpoint.
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
    source_lang: String,
}

impl GoogleTranslateClient {
    pub fn new(api: &ApiConfig, source_lang: impl Into<String>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: api.endpoint.clone(),
            source_lang: source_lang.into(),
        })
    }

    async fn call_api(&self, text: &str, dest_lang: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", dest_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RowTranslatorError::ApiError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let raw = response.text().await?;
        let body: JsonValue = serde_json::from_str(&raw)?;
        parse_translation_response(&body)
    }
}

#[async_trait]
impl Translate for GoogleTranslateClient {
    async fn translate(&self, text: &str, dest_lang: &str) -> Result<String> {
        // The endpoint rejects an empty query.
        if text.is_empty() {
            return Ok(String::new());
        }
        self.call_api(text, dest_lang).await
    }
}

/// Joins the translated segments found at `body[0][i][0]`.
fn parse_translation_response(body: &JsonValue) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(JsonValue::as_array)
        .ok_or_else(|| RowTranslatorError::ApiError("Malformed translation response".to_string()))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(JsonValue::as_str))
        .collect())
}
