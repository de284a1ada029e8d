pub mod canonical_message;
pub mod vote_submission;
pub mod vote_verification;
