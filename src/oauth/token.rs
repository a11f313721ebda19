use std::fmt;

/// Value of the `Authorization` header, i.e. `Bearer <access token>`.
/// The access token is obtained outside of this program and never refreshed here.
#[derive(Clone, PartialEq)]
pub struct Bearer(String);

impl Bearer {
    /// Builds the header value from a raw access token.
    /// Returns `None` for blank tokens.
    pub fn from_access_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(format!("Bearer {token}")))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

// Must never expose the secret, not even in debug logs
impl fmt::Debug for Bearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bearer(***)")
    }
}

#[cfg(test)]
mod tests {
    use crate::oauth::token::Bearer;

    #[test]
    fn test_from_access_token() {
        let bearer = Bearer::from_access_token(" abc123\n");
        assert!(bearer.is_some());
        assert_eq!(bearer.unwrap().as_str(), "Bearer abc123");
    }

    #[test]
    fn test_blank_token() {
        assert_eq!(Bearer::from_access_token(""), None);
        assert_eq!(Bearer::from_access_token("   "), None);
    }

    #[test]
    fn test_debug_is_redacted() {
        let bearer = Bearer::from_access_token("top-secret").unwrap();
        let debug = format!("{:?}", bearer);
        assert!(!debug.contains("top-secret"));
        assert_eq!(debug, "Bearer(***)");
        assert_eq!(bearer.as_str(), "Bearer top-secret");
    }
}
