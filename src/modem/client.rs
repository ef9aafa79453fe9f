use crate::config::ModemConfig;
use crate::error::FetchError;
use reqwest::Client as HttpClient;

pub struct Client {
    http_client: HttpClient,
    config: ModemConfig,
}

impl Client {
    pub fn new(config: ModemConfig) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder().build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Fetches the status page once and returns its body unmodified.
    pub async fn get_status_page(&self) -> Result<String, FetchError> {
        tracing::debug!("GET {}", self.config.url);
        let response = self
            .http_client
            .get(&self.config.url)
            .header("user-agent", "reqwest")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(FetchError::server_error(status, body))
        }
    }
}
