use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::EndpointConfig;
use crate::errors::{DashError, Result};
use crate::payload::{ApiEnvelope, DataQuery, Payload};

/// Anything that can answer a [`DataQuery`] with a line payload.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch(&self, query: &DataQuery) -> Result<Payload>;
    fn name(&self) -> &str;
}

/// Line data endpoint over HTTP: one GET per query, no retries.
pub struct HttpSource {
    client: reqwest::Client,
    config: EndpointConfig,
}

impl HttpSource {
    pub fn new(config: EndpointConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| DashError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: EndpointConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn map_send_error(&self, err: reqwest::Error) -> DashError {
        if err.is_timeout() {
            DashError::TimeoutError(self.config.request_timeout())
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl MetricsSource for HttpSource {
    async fn fetch(&self, query: &DataQuery) -> Result<Payload> {
        debug!("Requesting {} with {:?}", self.config.base_url, query.params());

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        // Error statuses may still carry a well-formed envelope with a message.
        match serde_json::from_slice::<ApiEnvelope>(&body) {
            Ok(envelope) => envelope.into_result(),
            Err(e) if status.is_success() => Err(e.into()),
            Err(_) => {
                warn!("Line data endpoint returned HTTP {}", status);
                Err(DashError::HttpStatus(status.as_u16()))
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let source = HttpSource::new(EndpointConfig {
            base_url: "http://localhost:3000/influx/data/".to_string(),
            request_timeout_ms: 100,
        })
        .unwrap();
        assert_eq!(source.base_url(), "http://localhost:3000/influx/data");
        assert_eq!(source.name(), "http");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let source = HttpSource::new(EndpointConfig {
            base_url: "http://127.0.0.1:9/influx/data".to_string(),
            request_timeout_ms: 500,
        })
        .unwrap();
        let query = DataQuery::new(
            &crate::config::TrackingConfig::default(),
            "Shift A",
            crate::payload::DateSelector::Today,
        );
        let err = source.fetch(&query).await.unwrap_err();
        assert!(matches!(
            err,
            DashError::NetworkError(_) | DashError::TimeoutError(_)
        ));
    }
}
