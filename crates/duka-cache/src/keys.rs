//! Cache key builders for all Duka cache entries.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses. The Redis provider adds the configured
//! deployment prefix on top of these keys.

use uuid::Uuid;

/// Cache key for the session record of a subject.
///
/// The value is the `jti` of the refresh token currently considered valid
/// for that subject.
pub fn session(subject: Uuid) -> String {
    format!("session:{subject}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key() {
        let id = Uuid::nil();
        assert_eq!(session(id), "session:00000000-0000-0000-0000-000000000000");
    }
}
