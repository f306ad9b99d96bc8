/*!
oauth1-consumer: the consumer side of OAuth 1.0a.

# Overview

This library walks the three-legged OAuth 1.0a flow (request token, user
authorization, access token) and signs requests to protected resources with
HMAC-SHA1. HTTP is sent through an [`HttpClient`]; by default a blocking
[reqwest](https://crates.io/crates/reqwest) client is installed on first use.
Clock and nonce sources can be injected as well, which makes every signature
reproducible in tests.

# How to use

```rust,no_run
use oauth1_consumer::{Consumer, ConsumerConfig};

# fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
// prepare authorization info
let config = ConsumerConfig::new("[CONSUMER_KEY]", "[CONSUMER_SECRET]")
    .request_token_url("https://api.example.com/oauth/request_token")
    .authorize_token_url("https://api.example.com/oauth/authorize")
    .access_token_url("https://api.example.com/oauth/access_token");
let consumer = Consumer::new(config);

// step 1: acquire request token & token secret
let request_token = consumer.get_request_token()?;

// step 2: acquire user pin
println!("please access to: {}", consumer.token_authorization_url(&request_token));
println!("input pin: ");
let mut user_input = String::new();
std::io::stdin().read_line(&mut user_input)?;

// step 3: acquire access token
let access_token = consumer.authorize_token(&request_token, user_input.trim())?;

// sample: signed GET, query parameters are signed too
let resp = consumer.get(
    "https://api.example.com/1.1/statuses/home_timeline.json",
    &[("count", "5")],
    &access_token,
)?;
println!("{}", String::from_utf8_lossy(resp.body()));
# Ok(())
# }
```

*/
mod client;
mod clock;
mod config;
mod consumer;
mod error;
mod params;
mod request;
mod secrets;
mod signer;
mod token_reader;

// exposed to external program
pub use client::{HttpClient, ReqwestHttpClient, Response, TransportError};
pub use clock::{Clock, NonceGenerator, SeededNonceGenerator, SystemClock};
pub use config::{ConsumerConfig, OUT_OF_BAND_CALLBACK};
pub use consumer::Consumer;
pub use error::{Error, Result, TokenReaderError, TokenReaderResult};
pub use params::{escape, OrderedParams};
pub use request::Request;
pub use secrets::{AuthorizedToken, TokenSecretsProvider, UnauthorizedToken};
pub use signer::{request_string, sign, Signer};
pub use token_reader::{read_oauth_token, TokenReader, TokenResponse};

// exposed constant variables
/// Represents `oauth_callback`.
pub const OAUTH_CALLBACK_KEY: &str = "oauth_callback";
/// Represents `oauth_consumer_key`.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// Represents `oauth_nonce`.
pub const OAUTH_NONCE_KEY: &str = "oauth_nonce";
/// Represents `oauth_signature_method`.
pub const OAUTH_SIGNATURE_METHOD_KEY: &str = "oauth_signature_method";
/// Represents `oauth_signature`.
pub const OAUTH_SIGNATURE_KEY: &str = "oauth_signature";
/// Represents `oauth_timestamp`.
pub const OAUTH_TIMESTAMP_KEY: &str = "oauth_timestamp";
/// Represents `oauth_token`.
pub const OAUTH_TOKEN_KEY: &str = "oauth_token";
/// Represents `oauth_token_secret`.
pub const OAUTH_TOKEN_SECRET_KEY: &str = "oauth_token_secret";
/// Represents `oauth_verifier`.
pub const OAUTH_VERIFIER_KEY: &str = "oauth_verifier";
/// Represents `oauth_version`.
pub const OAUTH_VERSION_KEY: &str = "oauth_version";

/// The only `oauth_version` value.
pub const OAUTH_VERSION: &str = "1.0";
/// The only supported `oauth_signature_method`.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
