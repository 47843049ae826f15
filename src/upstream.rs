/// Upstream task API client
///
/// The preferred data source: a GET against the ELWOSA Task API with a fixed
/// timeout. The body is parsed as JSON and passed through to the client
/// unmodified; the gateway does not validate its shape against the database
/// projection. Any failure here (connect error, timeout, non-2xx status,
/// non-JSON body) sends the request down the database fallback path.
use crate::config::UpstreamConfig;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

/// Builds the HTTP client used for upstream calls
///
/// The timeout covers the whole request, connect included; a slow upstream
/// blocks the handler for at most this long before the fallback runs.
pub fn build_client(config: &UpstreamConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
}

/// Fetches the task list from the upstream API
///
/// # Errors
///
/// Returns an error on any transport failure, non-2xx status, or a body
/// that is not valid JSON. Callers treat every error the same way: fall
/// back to the database.
pub async fn fetch_tasks(
    client: &reqwest::Client,
    config: &UpstreamConfig,
) -> reqwest::Result<JsonValue> {
    debug!(url = %config.url, "Fetching tasks from upstream API");

    let tasks = client
        .get(&config.url)
        .send()
        .await?
        .error_for_status()?
        .json::<JsonValue>()
        .await?;

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_UPSTREAM_TIMEOUT_SECONDS;

    fn test_upstream_config(url: &str) -> UpstreamConfig {
        UpstreamConfig {
            url: url.to_string(),
            timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
        }
    }

    #[test]
    fn test_build_client() {
        let config = test_upstream_config("http://localhost:8001/tasks");
        assert!(build_client(&config).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_tasks_unreachable_is_error() {
        // Port 1 on localhost: connection refused immediately
        let config = test_upstream_config("http://127.0.0.1:1/tasks");
        let client = build_client(&config).unwrap();

        assert!(fetch_tasks(&client, &config).await.is_err());
    }
}
