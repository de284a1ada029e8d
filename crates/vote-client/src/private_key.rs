use anyhow::Context;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use rsa::RsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use zeroize::Zeroizing;

/// Standard alphabet, `=` padding optional. Matches what browsers' `atob`
/// accepts once whitespace is removed.
const KEY_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes base64 text of an unencrypted PKCS#8 container into an RSA key.
///
/// ASCII whitespace anywhere in the text is ignored, so line-wrapped output
/// of `openssl base64` or `base64` is fine. Anything else (bad base64, a
/// PKCS#1 or encrypted container, a non-RSA algorithm) is an error. The
/// decoded DER is wiped once parsed.
pub fn decode_private_key(encoded: &str) -> anyhow::Result<RsaPrivateKey> {
    let compact: Zeroizing<String> = Zeroizing::new(
        encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect(),
    );
    let der = Zeroizing::new(
        KEY_BASE64
            .decode(compact.as_bytes())
            .context("Private key is not standard base64")?,
    );
    let key = RsaPrivateKey::from_pkcs8_der(&der)
        .context("Private key is not an unencrypted PKCS#8 RSA key")?;
    log::debug!("Decoded {} bit RSA private key", key.size() * 8);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD as BASE64;

    use super::*;

    const ALICE_KEY: &str = include_str!("../../../testdata/alice.pk8.b64");
    const EC_KEY: &str = include_str!("../../../testdata/ec.pk8.b64");

    #[test]
    fn decodes_pkcs8_rsa_key() {
        let key = decode_private_key(ALICE_KEY.trim()).unwrap();
        assert_eq!(key.size(), 256);
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_private_key("this is not base64!").unwrap_err();
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn rejects_non_pkcs8_bytes() {
        let err = decode_private_key(&BASE64.encode(b"definitely not DER")).unwrap_err();
        assert!(err.to_string().contains("PKCS#8"));
    }

    #[test]
    fn rejects_truncated_container() {
        let der = BASE64.decode(ALICE_KEY.trim()).unwrap();
        assert!(decode_private_key(&BASE64.encode(&der[..der.len() / 2])).is_err());
    }

    #[test]
    fn accepts_line_wrapped_key() {
        let wrapped = ALICE_KEY
            .trim()
            .as_bytes()
            .chunks(64)
            .map(|line| std::str::from_utf8(line).unwrap())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(wrapped.contains('\n'));
        let key = decode_private_key(&format!("{wrapped}\r\n")).unwrap();
        assert_eq!(key.n(), decode_private_key(ALICE_KEY.trim()).unwrap().n());
    }

    #[test]
    fn accepts_key_without_padding() {
        let unpadded = ALICE_KEY.trim().trim_end_matches('=');
        assert!(unpadded.len() < ALICE_KEY.trim().len());
        let key = decode_private_key(unpadded).unwrap();
        assert_eq!(key.n(), decode_private_key(ALICE_KEY.trim()).unwrap().n());
    }

    #[test]
    fn rejects_non_rsa_algorithm() {
        assert!(decode_private_key(EC_KEY.trim()).is_err());
    }

    #[test]
    fn rejects_url_safe_alphabet() {
        let url_safe = ALICE_KEY.trim().replace('+', "-").replace('/', "_");
        if url_safe != ALICE_KEY.trim() {
            assert!(decode_private_key(&url_safe).is_err());
        }
    }
}
