use serde::{Deserialize, Serialize};

/// Session issued by the external auth provider
///
/// The provider owns sign-in and token refresh; the frontend only reads the
/// token it left behind and attaches it as a bearer header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
}

impl Session {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let session = Session {
            access_token: "tok_abc".to_string(),
        };
        assert_eq!(session.bearer(), "Bearer tok_abc");
    }
}
