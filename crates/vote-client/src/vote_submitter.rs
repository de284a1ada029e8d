use anyhow::Context;
use http::{
    Uri,
    uri::{Parts, PathAndQuery},
};
use vote_protocol::canonical_message::VOTE_ENDPOINT_PATH;
use vote_protocol::vote_submission::VoteSubmission;

use crate::error::CastError;

/// Sends signed votes to the server collaborator. One POST per submission,
/// no retries, no timeout beyond what the transport does by default.
pub struct VoteSubmitter {
    server_uri: Uri,
    client: reqwest::Client,
}

impl VoteSubmitter {
    pub fn new(server_uri: Uri) -> Self {
        Self::with_client(server_uri, reqwest::Client::new())
    }

    pub fn with_client(server_uri: Uri, client: reqwest::Client) -> Self {
        VoteSubmitter { server_uri, client }
    }

    /// The server URI with its path replaced by `/vote`.
    pub fn endpoint(&self) -> anyhow::Result<Uri> {
        let mut full_uri: Parts = self.server_uri.clone().into_parts();
        full_uri.path_and_query = Some(PathAndQuery::from_static(VOTE_ENDPOINT_PATH));
        Uri::from_parts(full_uri).context("Building vote endpoint URI")
    }

    /// POSTs the submission as JSON and hands back the response body as-is,
    /// whatever the status code. Only a failed exchange is an error.
    pub async fn submit(&self, submission: &VoteSubmission) -> Result<String, CastError> {
        self.post(submission).await.map_err(CastError::Transport)
    }

    async fn post(&self, submission: &VoteSubmission) -> anyhow::Result<String> {
        let endpoint = self.endpoint()?;
        log::info!("Submitting vote to {endpoint}");
        let response = self
            .client
            .post(endpoint.to_string())
            .json(submission)
            .send()
            .await
            .context("Sending vote")?;
        log::debug!("Server answered {}", response.status());
        response.text().await.context("Reading server response")
    }
}
