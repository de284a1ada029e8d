pub mod ballot_input;
pub mod cast_vote;
pub mod error;
pub mod private_key;
pub mod vote_signing;
pub mod vote_submitter;
