use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::core::rates::{RateProvider, RateTable};

/// Provider for the fawazahmed0 currency API (served from the jsDelivr
/// CDN). One request returns every rate from a single base currency.
pub struct CurrencyApiProvider {
    base_url: String,
}

impl CurrencyApiProvider {
    pub fn new(base_url: &str) -> Self {
        CurrencyApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

// Body shape: {"date": "2024-03-06", "usd": {"eur": 0.92, ...}}.
// The table key matches the requested base code.
#[derive(Debug, Deserialize)]
struct CurrencyApiResponse {
    date: Option<String>,
    #[serde(flatten)]
    tables: HashMap<String, HashMap<String, f64>>,
}

#[async_trait]
impl RateProvider for CurrencyApiProvider {
    async fn fetch_table(&self, base: &str) -> Result<RateTable> {
        let base = base.to_lowercase();
        let url = format!("{}/v1/currencies/{base}.json", self.base_url);
        debug!("Requesting rate table from {}", url);

        let client = reqwest::Client::builder().user_agent("xrate/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for currency: {} URL: {}", e, base, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for currency: {}",
                response.status(),
                base
            ));
        }

        let text = response.text().await?;

        let data: CurrencyApiResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", base, e))?;

        let rates = data
            .tables
            .get(&base)
            .cloned()
            .ok_or_else(|| anyhow!("No rate table found for currency: {}", base))?;

        let date = data
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

        Ok(RateTable { base, date, rates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(base: &str, mock_response: &str) -> wiremock::MockServer {
        let mock_server = wiremock::MockServer::start().await;
        let request_path = format!("/v1/currencies/{base}.json");

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    const MOCK_JSON: &str = r#"{
        "date": "2024-03-06",
        "usd": {
            "eur": 0.92,
            "ngn": 1530.25,
            "jpy": 150.12
        }
    }"#;

    #[tokio::test]
    async fn test_successful_table_fetch() {
        let mock_server = create_mock_server("usd", MOCK_JSON).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri());

        let table = provider.fetch_table("usd").await.unwrap();

        assert_eq!(table.base, "usd");
        assert_eq!(table.rate_to("eur"), Some(0.92));
        assert_eq!(table.rate_to("ngn"), Some(1530.25));
        assert_eq!(table.rate_to("jpy"), Some(150.12));
        let date = table.date.unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
    }

    #[tokio::test]
    async fn test_base_code_is_lowercased_for_request() {
        let mock_server = create_mock_server("usd", MOCK_JSON).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri());

        let table = provider.fetch_table("USD").await.unwrap();
        assert_eq!(table.base, "usd");
    }

    #[tokio::test]
    async fn test_table_without_date() {
        let mock_server = create_mock_server("usd", r#"{"usd": {"eur": 0.92}}"#).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri());

        let table = provider.fetch_table("usd").await.unwrap();
        assert!(table.date.is_none());
        assert_eq!(table.rate_to("eur"), Some(0.92));
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/currencies/usd.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let provider = CurrencyApiProvider::new(&mock_server.uri());
        let result = provider.fetch_table("usd").await;

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for currency: usd"
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_server = create_mock_server("usd", "not json").await;
        let provider = CurrencyApiProvider::new(&mock_server.uri());

        let result = provider.fetch_table("usd").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response for usd")
        );
    }

    #[tokio::test]
    async fn test_missing_base_table_in_body() {
        // Body is valid JSON but keyed by a different base
        let mock_server = create_mock_server("usd", r#"{"eur": {"usd": 1.08}}"#).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri());

        let result = provider.fetch_table("usd").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No rate table found for currency: usd"
        );
    }
}
