//! The mock session token.
//!
//! A token looks like `header.<payload>.signature`, where the payload is the
//! base64 encoding of the identity as JSON. The outer segments are fixed
//! placeholders and are never checked. Nothing here is signed, so a token
//! proves nothing about who produced it.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::error::TokenError;
use crate::session::Identity;

const HEADER: &str = "header";
const SIGNATURE: &str = "signature";

/// Standard alphabet, padded on encode, padding optional on decode.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode_token(identity: &Identity) -> Result<String, TokenError> {
    let json = serde_json::to_string(identity)?;
    let payload = PAYLOAD_ENGINE.encode(json);
    Ok(format!("{HEADER}.{payload}.{SIGNATURE}"))
}

pub fn decode_token(token: &str) -> Result<Identity, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::SegmentCount(segments.len()));
    }

    let bytes = PAYLOAD_ENGINE.decode(segments[1])?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;

    use super::*;
    use crate::session::Role;

    fn admin() -> Identity {
        Identity {
            id: "1".to_string(),
            username: "admin".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn encoded_token_has_decorative_outer_segments() {
        let token = encode_token(&admin()).unwrap();
        let segments: Vec<&str> = token.split('.').collect();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], "header");
        assert_eq!(segments[2], "signature");
    }

    #[test]
    fn outer_segments_are_not_verified() {
        let token = encode_token(&admin()).unwrap();
        let payload = token.split('.').nth(1).unwrap();
        let forged = format!("anything.{payload}.whatever");

        assert_eq!(decode_token(&forged).unwrap(), admin());
    }

    #[test]
    fn accepts_unpadded_payload() {
        let json = r#"{"id":"2","username":"user","role":"user"}"#;
        let payload = base64::engine::general_purpose::STANDARD_NO_PAD.encode(json);
        let identity = decode_token(&format!("h.{payload}.s")).unwrap();

        assert_eq!(identity.username, "user");
        assert_eq!(identity.role, Role::User);
    }

    #[test]
    fn rejects_unknown_role() {
        let json = r#"{"id":"3","username":"root","role":"superuser"}"#;
        let payload = PAYLOAD_ENGINE.encode(json);

        assert!(matches!(
            decode_token(&format!("h.{payload}.s")),
            Err(TokenError::Json(_))
        ));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(
            decode_token("only-one-segment"),
            Err(TokenError::SegmentCount(1))
        ));
        assert!(matches!(
            decode_token("a.b.c.d"),
            Err(TokenError::SegmentCount(4))
        ));
    }
}
