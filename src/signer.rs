use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::params::{escape, OrderedParams};

type HmacSha1 = Hmac<Sha1>;

/// Builds the OAuth signature base string.
///
/// `METHOD&escape(url)&escape(k1=v1)%26escape(k2=v2)...` with the pairs taken
/// in sorted key order. Values in `params` are already escaped, so each pair is
/// escaped a second time here, as the protocol requires.
pub fn request_string(method: &str, url: &str, params: &OrderedParams) -> String {
    let mut result = format!("{}&{}", method.to_uppercase(), escape(url));
    for (pos, (key, value)) in params.sorted_pairs().into_iter().enumerate() {
        if pos == 0 {
            result.push('&');
        } else {
            result.push_str(&escape("&"));
        }
        result.push_str(&escape(&format!("{}={}", key, value)));
    }
    result
}

/// HMAC-SHA1 over `message` keyed with `key`, base64 encoded with padding.
pub fn sign(message: &str, key: &str) -> String {
    let mut mac = match HmacSha1::new_from_slice(key.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => unreachable!("hmac keys have no length limit"),
    };
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Signing key for a request: `escape(consumer_secret)&escape(token_secret)`.
#[derive(Clone)]
pub struct Signer<'a> {
    consumer_secret: &'a str,
    token_secret: Option<&'a str>,
}

impl<'a> Signer<'a> {
    pub fn new(consumer_secret: &'a str) -> Self {
        Signer {
            consumer_secret,
            token_secret: None,
        }
    }

    pub fn token_secret(self, token_secret: &'a str) -> Self {
        Signer {
            token_secret: Some(token_secret),
            ..self
        }
    }

    /// The derived key. Without a token secret the key ends in a bare `&`.
    pub fn key(&self) -> String {
        format!(
            "{}&{}",
            escape(self.consumer_secret),
            escape(self.token_secret.unwrap_or_default())
        )
    }

    pub fn generate_signature(&self, method: &str, url: &str, params: &OrderedParams) -> String {
        let base_string = request_string(method, url, params);
        tracing::trace!(%base_string, "signing");
        sign(&base_string, &self.key())
    }
}

impl std::fmt::Debug for Signer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("consumer_secret", &"<redacted>")
            .field("token_secret", &self.token_secret.map(|_| "<redacted>"))
            .finish()
    }
}
