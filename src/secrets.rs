use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TokenResponse;

/// Gives access to a token and its secret.
pub trait TokenSecretsProvider {
    fn get_token_pair<'a>(&'a self) -> (&'a str, &'a str);
}

/// Request token returned by the first exchange. Hand it back to
/// [`Consumer::authorize_token`](crate::Consumer::authorize_token) once the
/// user has approved it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnauthorizedToken {
    pub token: String,
    pub token_secret: String,
}

/// Access token. Signs every protected resource request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedToken {
    pub token: String,
    pub token_secret: String,
}

impl UnauthorizedToken {
    pub fn new<TKey, TSecret>(token: TKey, token_secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        UnauthorizedToken {
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }
}

impl AuthorizedToken {
    pub fn new<TKey, TSecret>(token: TKey, token_secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        AuthorizedToken {
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }
}

impl From<TokenResponse> for UnauthorizedToken {
    fn from(resp: TokenResponse) -> Self {
        UnauthorizedToken::new(resp.oauth_token, resp.oauth_token_secret)
    }
}

impl From<TokenResponse> for AuthorizedToken {
    fn from(resp: TokenResponse) -> Self {
        AuthorizedToken::new(resp.oauth_token, resp.oauth_token_secret)
    }
}

impl TokenSecretsProvider for UnauthorizedToken {
    fn get_token_pair<'a>(&'a self) -> (&'a str, &'a str) {
        (&self.token, &self.token_secret)
    }
}

impl TokenSecretsProvider for AuthorizedToken {
    fn get_token_pair<'a>(&'a self) -> (&'a str, &'a str) {
        (&self.token, &self.token_secret)
    }
}

impl fmt::Debug for UnauthorizedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedToken")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for AuthorizedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedToken")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}
