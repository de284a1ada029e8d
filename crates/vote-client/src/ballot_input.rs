use zeroize::Zeroizing;

use crate::error::CastError;

/// Raw field values as the voter entered them.
pub struct BallotForm {
    pub voter_id: String,
    pub vote_value: String,
    pub private_key: Zeroizing<String>,
    /// The options the ballot offers. Empty means any non-empty value is
    /// passed through.
    pub choices: Vec<String>,
}

/// A ballot with every field present. The key is still in its text
/// encoding; decoding happens in the signer.
pub struct Ballot {
    pub voter_id: String,
    pub vote_value: String,
    pub private_key: Zeroizing<String>,
}

impl BallotForm {
    pub fn new(voter_id: &str, vote_value: &str, private_key: Zeroizing<String>) -> Self {
        BallotForm {
            voter_id: voter_id.to_owned(),
            vote_value: vote_value.to_owned(),
            private_key,
            choices: Vec::new(),
        }
    }

    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }

    /// Trims the identity and key, then checks nothing is missing.
    ///
    /// The vote value is not trimmed; it comes from a fixed option set and
    /// has to match it exactly.
    pub fn collect(self) -> Result<Ballot, CastError> {
        let voter_id = self.voter_id.trim();
        let private_key = Zeroizing::new(self.private_key.trim().to_owned());

        if voter_id.is_empty() {
            return Err(CastError::IncompleteInput { field: "voter id" });
        }
        if self.vote_value.trim().is_empty() {
            return Err(CastError::IncompleteInput { field: "vote value" });
        }
        if !self.choices.is_empty() && !self.choices.contains(&self.vote_value) {
            return Err(CastError::IncompleteInput { field: "vote value" });
        }
        if private_key.is_empty() {
            return Err(CastError::IncompleteInput {
                field: "private key",
            });
        }

        Ok(Ballot {
            voter_id: voter_id.to_owned(),
            vote_value: self.vote_value,
            private_key,
        })
    }
}
