use anyhow::Context;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rsa::RsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::SignatureScheme;
use thiserror::Error;

use crate::canonical_message::{message_digest, signature_scheme};
use crate::vote_submission::VoteSubmission;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Voter id is not a usable RSA public key: {0:#}")]
    InvalidPublicKey(anyhow::Error),
    #[error("Signature is not standard base64: {0}")]
    InvalidSignatureEncoding(base64::DecodeError),
    #[error("Signature didn't verify")]
    SignatureMismatch,
}

/// Decodes a voter id (base64 of an X.509 SubjectPublicKeyInfo) into the RSA
/// key that should have signed the vote.
pub fn decode_voter_public_key(voter_id: &str) -> Result<RsaPublicKey, VerifyError> {
    let der = BASE64
        .decode(voter_id)
        .context("Decoding voter id base64")
        .map_err(VerifyError::InvalidPublicKey)?;
    RsaPublicKey::from_public_key_der(&der)
        .context("Parsing SubjectPublicKeyInfo")
        .map_err(VerifyError::InvalidPublicKey)
}

/// Checks votes the way the server collaborator does: rebuild the canonical
/// message from the submitted fields and verify it under the voter's key.
pub struct VoteVerification {
    verifying_key: RsaPublicKey,
}

impl VoteVerification {
    pub fn setup(voter_id: &str) -> Result<VoteVerification, VerifyError> {
        Ok(VoteVerification {
            verifying_key: decode_voter_public_key(voter_id)?,
        })
    }

    pub fn with_key(verifying_key: RsaPublicKey) -> VoteVerification {
        VoteVerification { verifying_key }
    }

    pub fn verify(&self, submission: &VoteSubmission) -> Result<(), VerifyError> {
        let digest = message_digest(submission.voter_id(), submission.vote_value());
        signature_scheme()
            .verify(&self.verifying_key, &digest, submission.signature())
            .map_err(|_| VerifyError::SignatureMismatch)
    }
}

impl VoteSubmission {
    /// Verifies against the public key encoded in the submission's own voter id.
    pub fn verify(&self) -> Result<(), VerifyError> {
        VoteVerification::setup(self.voter_id())?.verify(self)
    }

    pub fn verify_with(&self, verifying_key: &RsaPublicKey) -> Result<(), VerifyError> {
        VoteVerification::with_key(verifying_key.clone()).verify(self)
    }
}

/// Verifies a vote from its three wire fields, with the signature still in
/// its base64 text form.
pub fn verify_encoded_vote(
    voter_id: &str,
    vote_value: &str,
    signature: &str,
) -> Result<(), VerifyError> {
    let signature = BASE64
        .decode(signature)
        .map_err(VerifyError::InvalidSignatureEncoding)?;
    VoteSubmission::new(voter_id.to_owned(), vote_value.to_owned(), signature).verify()
}
