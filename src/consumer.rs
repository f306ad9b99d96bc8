use std::fmt;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::params::OrderedParams;
use crate::request::Request;
use crate::secrets::TokenSecretsProvider;
use crate::signer::Signer;
use crate::token_reader::TokenReader;
use crate::{
    AuthorizedToken, Clock, ConsumerConfig, Error, HttpClient, NonceGenerator, ReqwestHttpClient,
    Response, Result, SeededNonceGenerator, SystemClock, UnauthorizedToken,
};
use crate::{
    OAUTH_CALLBACK_KEY, OAUTH_CONSUMER_KEY, OAUTH_NONCE_KEY, OAUTH_SIGNATURE_METHOD_KEY,
    OAUTH_TIMESTAMP_KEY, OAUTH_TOKEN_KEY, OAUTH_VERIFIER_KEY, OAUTH_VERSION, OAUTH_VERSION_KEY,
    SIGNATURE_METHOD,
};

/// OAuth 1.0a consumer: runs the three-legged token exchange and signs
/// requests to protected resources.
///
/// Capabilities that were not injected are installed on first use, once.
pub struct Consumer {
    config: ConsumerConfig,
    http_client: OnceCell<Box<dyn HttpClient>>,
    clock: OnceCell<Box<dyn Clock>>,
    nonce_generator: OnceCell<Box<dyn NonceGenerator>>,
}

impl Consumer {
    pub fn new(config: ConsumerConfig) -> Self {
        Consumer {
            config,
            http_client: OnceCell::new(),
            clock: OnceCell::new(),
            nonce_generator: OnceCell::new(),
        }
    }

    /// Replaces the HTTP transport.
    pub fn with_http_client<T: HttpClient + 'static>(self, http_client: T) -> Self {
        Consumer {
            http_client: OnceCell::with_value(Box::new(http_client) as Box<dyn HttpClient>),
            ..self
        }
    }

    /// Replaces the source of `oauth_timestamp`.
    pub fn with_clock<T: Clock + 'static>(self, clock: T) -> Self {
        Consumer {
            clock: OnceCell::with_value(Box::new(clock) as Box<dyn Clock>),
            ..self
        }
    }

    /// Replaces the source of `oauth_nonce`.
    pub fn with_nonce_generator<T: NonceGenerator + 'static>(self, nonce_generator: T) -> Self {
        Consumer {
            nonce_generator: OnceCell::with_value(Box::new(nonce_generator) as Box<dyn NonceGenerator>),
            ..self
        }
    }

    pub fn config(&self) -> &ConsumerConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Lazily installed capabilities

    fn clock(&self) -> &dyn Clock {
        &**self
            .clock
            .get_or_init(|| Box::new(SystemClock) as Box<dyn Clock>)
    }

    fn nonce_generator(&self) -> &dyn NonceGenerator {
        &**self.nonce_generator.get_or_init(|| {
            Box::new(SeededNonceGenerator::from_clock(self.clock())) as Box<dyn NonceGenerator>
        })
    }

    fn http_client(&self) -> Result<&dyn HttpClient> {
        let client = self.http_client.get_or_try_init(|| {
            debug!("installing default reqwest transport");
            ReqwestHttpClient::new().map(|c| Box::new(c) as Box<dyn HttpClient>)
        })?;
        Ok(&**client)
    }

    // ------------------------------------------------------------------------
    // Token exchange

    /// Step 1: obtains an unauthorized request token.
    ///
    /// # Errors
    ///
    /// This method fails if the transport fails or the response lacks
    /// `oauth_token` or `oauth_token_secret`.
    pub fn get_request_token(&self) -> Result<UnauthorizedToken> {
        let mut params = self.base_params();
        params.add(OAUTH_CALLBACK_KEY, &self.config.callback_url);

        // no token secret yet
        let signer = Signer::new(&self.config.consumer_secret);
        let req = Request::get(self.config.request_token_url.as_str(), params).sign(&signer);

        let resp = self.send(&req)?;
        let token = resp.parse_oauth_token()?;
        debug!(oauth_token = %token.oauth_token, "received request token");
        Ok(token.into())
    }

    /// Step 2: the URL the user visits to authorize `token`. No request is made.
    pub fn token_authorization_url(&self, token: &UnauthorizedToken) -> String {
        format!(
            "{}?{}={}",
            self.config.authorize_token_url, OAUTH_TOKEN_KEY, token.token
        )
    }

    /// Step 3: exchanges an authorized request token and its verifier for an
    /// access token.
    ///
    /// # Errors
    ///
    /// This method fails under the same conditions as
    /// [`get_request_token`](Consumer::get_request_token).
    pub fn authorize_token(
        &self,
        unauthorized_token: &UnauthorizedToken,
        verification_code: &str,
    ) -> Result<AuthorizedToken> {
        let (token, token_secret) = unauthorized_token.get_token_pair();
        let mut params = self.base_params();
        params.add(OAUTH_VERIFIER_KEY, verification_code);
        params.add(OAUTH_TOKEN_KEY, token);

        let signer = Signer::new(&self.config.consumer_secret).token_secret(token_secret);
        let req = Request::get(self.config.access_token_url.as_str(), params).sign(&signer);

        let resp = self.send(&req)?;
        let token = resp.parse_oauth_token()?;
        debug!(oauth_token = %token.oauth_token, "received access token");
        Ok(token.into())
    }

    /// Step 4: a signed GET to a protected resource.
    ///
    /// `user_params` are signed and sent as the query string; they never
    /// appear in the `Authorization` header. The response is returned as is,
    /// whatever its status.
    ///
    /// # Errors
    ///
    /// This method fails if the request cannot be formed or the transport fails.
    pub fn get<K, V>(
        &self,
        url: &str,
        user_params: &[(K, V)],
        token: &AuthorizedToken,
    ) -> Result<Response>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let req = self.signed_get(url, user_params, token);
        self.send(&req)
    }

    /// Builds the signed request [`get`](Consumer::get) sends, without sending it.
    pub fn signed_get<K, V>(
        &self,
        url: &str,
        user_params: &[(K, V)],
        token: &AuthorizedToken,
    ) -> Request
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let (token, token_secret) = token.get_token_pair();
        let mut params = self.base_params();
        params.add(OAUTH_TOKEN_KEY, token);

        let signer = Signer::new(&self.config.consumer_secret).token_secret(token_secret);
        Request::get(url, params)
            .user_params(
                user_params
                    .iter()
                    .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string())),
            )
            .sign(&signer)
    }

    // ------------------------------------------------------------------------
    // Helpers

    fn base_params(&self) -> OrderedParams {
        let mut params = OrderedParams::new();
        params.add(OAUTH_VERSION_KEY, OAUTH_VERSION);
        params.add(OAUTH_SIGNATURE_METHOD_KEY, SIGNATURE_METHOD);
        params.add(OAUTH_TIMESTAMP_KEY, self.clock().seconds().to_string());
        params.add(OAUTH_NONCE_KEY, self.nonce_generator().next63().to_string());
        params.add(OAUTH_CONSUMER_KEY, &self.config.consumer_key);
        for (key, value) in &self.config.additional_params {
            params.add(key.as_str(), value);
        }
        params
    }

    fn send(&self, req: &Request) -> Result<Response> {
        let http_client = self.http_client()?;
        let http_req = req.to_http()?;
        debug!(method = %req.method(), url = %http_req.uri(), "sending signed request");
        tracing::trace!(authorization = %req.authorization_header(), "authorization header");

        let resp = http_client.send(http_req).map_err(Error::Transport)?;
        debug!(status = %resp.status(), "received response");
        Ok(resp)
    }
}

impl fmt::Debug for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("config", &self.config)
            .field("http_client", &self.http_client.get().is_some())
            .field("clock", &self.clock.get().is_some())
            .field("nonce_generator", &self.nonce_generator.get().is_some())
            .finish()
    }
}
