use std::error::Error;
use std::time::Duration;

use reqwest::Client;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client scoped to a single scrape operation: built at the start of
/// the call, dropped on every exit path.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    // The schedule host serves an incomplete certificate chain, so
    // validation has to be off for these requests.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .cookie_store(true)
            .gzip(true)
            .build()?;
        Ok(Fetcher { client })
    }

    pub async fn get_text(&self, url: &str) -> Result<String> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
