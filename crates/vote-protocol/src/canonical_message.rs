use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256};

/// Separates the voter identity from the vote value in the signed message.
/// The server rebuilds the message with the same delimiter, so changing it
/// breaks verification of every vote.
pub const FIELD_DELIMITER: &str = "|||";

/// Path on the server collaborator that accepts signed votes.
pub const VOTE_ENDPOINT_PATH: &str = "/vote";

/// Builds the exact string that gets signed: `voter_id + "|||" + vote_value`.
///
/// Neither field is escaped. A voter id or vote value containing the
/// delimiter makes the split ambiguous; ballot options and key encodings
/// never contain it.
pub fn canonical_message(voter_id: &str, vote_value: &str) -> String {
    let mut message =
        String::with_capacity(voter_id.len() + FIELD_DELIMITER.len() + vote_value.len());
    message.push_str(voter_id);
    message.push_str(FIELD_DELIMITER);
    message.push_str(vote_value);
    message
}

/// SHA-256 of the UTF-8 canonical message. This is what RSASSA-PKCS1-v1_5
/// pads and signs.
pub fn message_digest(voter_id: &str, vote_value: &str) -> Vec<u8> {
    Sha256::digest(canonical_message(voter_id, vote_value).as_bytes()).to_vec()
}

/// RSASSA-PKCS1-v1_5 with the SHA-256 DigestInfo prefix. There is no
/// negotiation; client and server both hardcode this.
pub fn signature_scheme() -> Pkcs1v15Sign {
    Pkcs1v15Sign::new::<Sha256>()
}
