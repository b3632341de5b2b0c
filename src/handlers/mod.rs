// Three-tier handler layout mirroring the gate composition:
// public (no gates) -> protected (authentication) -> elevated (authentication + admin)
pub mod elevated;
pub mod protected;
pub mod public;

use uuid::Uuid;

use crate::error::ApiError;

/// Parse a path identifier, surfacing malformed input as a 400 instead of
/// letting it reach the store driver.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("invalid id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_uuid() {
        assert!(parse_id("11111111-1111-1111-1111-111111111111").is_ok());
    }

    #[test]
    fn malformed_id_is_bad_request() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
