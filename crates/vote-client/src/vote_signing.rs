use anyhow::Context;
use rsa::RsaPrivateKey;
use vote_protocol::canonical_message::{message_digest, signature_scheme};
use vote_protocol::vote_submission::VoteSubmission;

use crate::ballot_input::Ballot;
use crate::error::CastError;
use crate::private_key::decode_private_key;

/// Signs `voter_id|||vote_value` with RSASSA-PKCS1-v1_5 over SHA-256.
/// The scheme has no randomness, so equal inputs give equal signatures.
pub fn sign_vote(
    key: &RsaPrivateKey,
    voter_id: &str,
    vote_value: &str,
) -> anyhow::Result<Vec<u8>> {
    let digest = message_digest(voter_id, vote_value);
    key.sign(signature_scheme(), &digest)
        .context("RSASSA-PKCS1-v1_5 signing")
}

/// Turns a complete ballot into a submission. The key is decoded, used once
/// and dropped before this returns, so it never outlives the signing step.
pub fn sign_ballot(ballot: Ballot) -> Result<VoteSubmission, CastError> {
    let Ballot {
        voter_id,
        vote_value,
        private_key,
    } = ballot;

    let key = decode_private_key(&private_key).map_err(CastError::InvalidKey)?;
    drop(private_key);

    let signature = sign_vote(&key, &voter_id, &vote_value).map_err(CastError::Signing)?;
    drop(key);

    log::debug!("Signed vote for value {vote_value:?}");
    Ok(VoteSubmission::new(voter_id, vote_value, signature))
}
