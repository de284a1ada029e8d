use crate::ballot_input::BallotForm;
use crate::error::CastError;
use crate::vote_signing::sign_ballot;
use crate::vote_submitter::VoteSubmitter;

/// Collect, sign, submit. Each stage short-circuits, so nothing goes over
/// the network unless a signature was produced.
///
/// On success the result is the server's response text, verbatim.
pub async fn cast_vote(form: BallotForm, submitter: &VoteSubmitter) -> Result<String, CastError> {
    let outcome = cast_vote_inner(form, submitter).await;
    match &outcome {
        Ok(_) => log::info!("Vote submitted"),
        Err(e @ CastError::IncompleteInput { .. }) => log::warn!("Vote not cast: {e}"),
        Err(e) => log::error!("Vote not cast: {e}"),
    }
    outcome
}

async fn cast_vote_inner(
    form: BallotForm,
    submitter: &VoteSubmitter,
) -> Result<String, CastError> {
    let ballot = form.collect()?;
    let submission = sign_ballot(ballot)?;
    submitter.submit(&submission).await
}

/// The single line shown to the voter for an attempt.
pub fn status_text(outcome: &Result<String, CastError>) -> &str {
    match outcome {
        Ok(response) => response,
        Err(e) => e.user_message(),
    }
}
