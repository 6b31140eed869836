pub(crate) mod error;

use cinevis_dataset::Dataset;
use cinevis_dataset::RawRecord;
use reqwest::blocking::Client;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Downloads datasets published as a JSON document.
pub(crate) struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Result<Dataset> {
        log::debug!("downloading dataset from `{url}`");
        let response = self.client.get(url).send()?;

        let status_code = response.status();
        if !status_code.is_success() {
            let message = response.text()?;
            return Err(FetchError::Response {
                status_code,
                message,
            });
        }

        let body = response.text()?;
        log::debug!("downloaded {} bytes", body.len());

        parse_dataset(&body)
    }
}

fn parse_dataset(body: &str) -> Result<Dataset> {
    let records: Vec<RawRecord> = serde_json::from_str(body)?;
    Ok(Dataset::new(records))
}
