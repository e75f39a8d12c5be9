//! Authentication credentials for the Zendesk API.
//!
//! Zendesk authenticates every request with HTTP Basic auth. Two schemes
//! exist: the account password as-is, or an API token sent with the
//! `{email}/token` username convention. Exactly one scheme is active per
//! client instance, chosen at construction time.
//!
//! # Security
//!
//! Secrets are held in memory only. `Credentials` deliberately does not
//! derive `Debug` so a password or token can never leak through formatting.

use reqwest::RequestBuilder;

/// Authentication credentials, fixed for the lifetime of a client.
#[derive(Clone)]
pub enum Credentials {
    /// HTTP Basic auth with the account email and password.
    Basic {
        /// Account email, used as the Basic auth username.
        email: String,
        /// Account password.
        /// SECURITY: never log this value!
        password: String,
    },

    /// HTTP Basic auth with an API token. The username becomes
    /// `{email}/token` per the Zendesk convention, the token is the password.
    Token {
        /// Account email the token belongs to.
        email: String,
        /// API token.
        /// SECURITY: never log this value!
        token: String,
    },
}

impl Credentials {
    /// Creates password-based credentials.
    pub fn basic(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Creates API-token credentials.
    pub fn token(email: impl Into<String>, token: impl Into<String>) -> Self {
        Credentials::Token {
            email: email.into(),
            token: token.into(),
        }
    }

    /// Returns the account email these credentials belong to.
    ///
    /// `Credentials` has no `Debug` representation, so this is the one
    /// piece a caller can surface in diagnostics; the secret itself has no
    /// accessor.
    pub fn email(&self) -> &str {
        match self {
            Credentials::Basic { email, .. } => email,
            Credentials::Token { email, .. } => email,
        }
    }

    /// Returns the Basic auth username for the active scheme.
    ///
    /// Token credentials append the `/token` suffix, which is what makes
    /// the two schemes produce different `Authorization` header values for
    /// the same account.
    pub fn username(&self) -> String {
        match self {
            Credentials::Basic { .. } => self.email().to_string(),
            Credentials::Token { .. } => format!("{}/token", self.email()),
        }
    }

    /// Attaches these credentials to an outgoing request.
    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        let secret = match self {
            Credentials::Basic { password, .. } => password,
            Credentials::Token { token, .. } => token,
        };
        request.basic_auth(self.username(), Some(secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use reqwest::Client;

    /// Builds a request with the given credentials applied and returns the
    /// Authorization header value. No network traffic is involved.
    fn authorization_for(credentials: &Credentials) -> String {
        let request = credentials
            .apply(Client::new().get("http://localhost/test"))
            .build()
            .unwrap();
        request
            .headers()
            .get(AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_username_basic() {
        let credentials = Credentials::basic("agent@example.com", "hunter2");
        assert_eq!(credentials.username(), "agent@example.com");
    }

    #[test]
    fn test_username_token_appends_suffix() {
        let credentials = Credentials::token("agent@example.com", "abc123");
        assert_eq!(credentials.username(), "agent@example.com/token");
    }

    #[test]
    fn test_email_accessor() {
        let basic = Credentials::basic("a@example.com", "pw");
        let token = Credentials::token("b@example.com", "tok");
        assert_eq!(basic.email(), "a@example.com");
        assert_eq!(token.email(), "b@example.com");
    }

    #[test]
    fn test_apply_sets_basic_authorization() {
        let auth = authorization_for(&Credentials::basic("agent@example.com", "hunter2"));
        assert!(auth.starts_with("Basic "));
    }

    #[test]
    fn test_schemes_produce_different_headers() {
        let basic = authorization_for(&Credentials::basic("agent@example.com", "secret"));
        let token = authorization_for(&Credentials::token("agent@example.com", "secret"));
        assert_ne!(basic, token);
    }
}
