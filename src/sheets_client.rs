use reqwest::multipart;
use reqwest::Client;

use crate::domain::SubmissionRequest;

/// Apps Script endpoint backing the signup spreadsheet.
pub const SHEETS_ENDPOINT_URL: &str =
    "https://script.google.com/macros/s/AKfycbxCayIgmmTsOjG2PdoZL-tAs3cWnFe3F_Ham1B3jgdv3IYkcp2zlcCYJaIPlKotQbk5/exec";

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("The submission endpoint answered with status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct SheetsClient {
    http_client: Client,
    endpoint_url: String,
}

impl SheetsClient {
    pub fn new(endpoint_url: String) -> Self {
        Self {
            http_client: Client::new(),
            endpoint_url,
        }
    }

    /// Client wired to the production spreadsheet endpoint.
    pub fn production() -> Self {
        Self::new(SHEETS_ENDPOINT_URL.to_string())
    }

    /// Posts the submission as multipart form data. Any status outside the
    /// 2xx range and any transport failure surface as an error; the response
    /// body is never inspected.
    #[tracing::instrument(
        name = "Posting signup to the spreadsheet endpoint",
        skip_all,
        fields(email = %submission.email())
    )]
    pub async fn submit(&self, submission: &SubmissionRequest) -> Result<(), SubmitError> {
        let form = multipart::Form::new()
            .text("name", submission.name().to_string())
            .text("email", submission.email().to_string())
            .text("timestamp", submission.timestamp());
        let response = self
            .http_client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::UnexpectedStatus(status));
        }
        Ok(())
    }
}
