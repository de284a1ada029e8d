use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::serde_as;

use crate::canonical_message::canonical_message;

/// The payload POSTed to the server: who voted, for what, and the proof.
///
/// Serialises as `{"voterId":…,"voteValue":…,"signature":…}` in that field
/// order, with the signature as padded standard base64.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VoteSubmission {
    voter_id: String,
    vote_value: String,
    #[serde_as(as = "Base64")]
    signature: Vec<u8>,
}

impl VoteSubmission {
    pub fn new(voter_id: String, vote_value: String, signature: Vec<u8>) -> Self {
        VoteSubmission {
            voter_id,
            vote_value,
            signature,
        }
    }

    pub fn voter_id(&self) -> &str {
        &self.voter_id
    }

    pub fn vote_value(&self) -> &str {
        &self.vote_value
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The message the signature is supposed to cover.
    pub fn canonical_message(&self) -> String {
        canonical_message(&self.voter_id, &self.vote_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_with_wire_field_names_in_order() {
        let submission = VoteSubmission::new("A".into(), "yes".into(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(
            serde_json::to_string(&submission).unwrap(),
            r#"{"voterId":"A","voteValue":"yes","signature":"3q2+7w=="}"#
        );
    }

    #[test]
    fn parses_server_side_json() {
        let submission: VoteSubmission =
            serde_json::from_str(r#"{"voteValue":"no","signature":"AAE=","voterId":"B"}"#)
                .unwrap();
        assert_eq!(submission.voter_id(), "B");
        assert_eq!(submission.vote_value(), "no");
        assert_eq!(submission.signature(), &[0, 1]);
        assert_eq!(submission.canonical_message(), "B|||no");
    }

    #[test]
    fn rejects_signature_that_is_not_base64() {
        let parsed = serde_json::from_str::<VoteSubmission>(
            r#"{"voterId":"A","voteValue":"yes","signature":"not base64!"}"#,
        );
        assert!(parsed.is_err());
    }
}
