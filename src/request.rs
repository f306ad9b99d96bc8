use http::{header::AUTHORIZATION, Method};

use crate::params::{escape, OrderedParams};
use crate::signer::Signer;
use crate::OAUTH_SIGNATURE_KEY;

/// Separator between the pairs of the `Authorization` header.
const HEADER_SEPARATOR: &str = ", ";

/// A signed (or about to be signed) OAuth request.
///
/// OAuth parameters travel in the `Authorization` header. User parameters take
/// part in the signature but travel in the query string.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: String,
    oauth_params: OrderedParams,
    user_params: Vec<(String, String)>,
}

impl Request {
    pub(crate) fn get<U: Into<String>>(url: U, oauth_params: OrderedParams) -> Self {
        Request {
            method: Method::GET,
            url: url.into(),
            oauth_params,
            user_params: Vec::new(),
        }
    }

    pub(crate) fn user_params<I, K, V>(mut self, user_params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.user_params
            .extend(user_params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Every parameter that takes part in the signature, which is all of them
    /// except `oauth_signature` itself.
    fn signature_params(&self) -> OrderedParams {
        let mut all = self.oauth_params.clone();
        all.remove(OAUTH_SIGNATURE_KEY);
        for (key, value) in &self.user_params {
            all.add(key.as_str(), value);
        }
        all
    }

    /// The base string that [`sign`](Request::sign) computes the signature over.
    pub fn signature_base_string(&self) -> String {
        crate::signer::request_string(self.method.as_str(), &self.url, &self.signature_params())
    }

    /// Computes the signature over OAuth and user parameters and adds it to
    /// the OAuth parameters only.
    pub(crate) fn sign(mut self, signer: &Signer<'_>) -> Self {
        let signature =
            signer.generate_signature(self.method.as_str(), &self.url, &self.signature_params());
        self.oauth_params.add(OAUTH_SIGNATURE_KEY, signature);
        self
    }

    /// `OAuth key1="value1", key2="value2"` over the OAuth parameters, in
    /// sorted key order.
    pub fn authorization_header(&self) -> String {
        let pairs = self
            .oauth_params
            .sorted_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, value))
            .collect::<Vec<_>>();
        format!("OAuth {}", pairs.join(HEADER_SEPARATOR))
    }

    /// The request URL with the escaped user parameters appended as query.
    pub fn target_url(&self) -> String {
        let mut target = self.url.clone();
        let mut separator = '?';
        for (key, value) in &self.user_params {
            target.push(separator);
            target.push_str(&escape(key));
            target.push('=');
            target.push_str(&escape(value));
            separator = '&';
        }
        target
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn oauth_params(&self) -> &OrderedParams {
        &self.oauth_params
    }

    /// Builds the `http` request handed to the transport.
    ///
    /// # Errors
    ///
    /// This method fails whenever the target URL or the header value is not
    /// valid HTTP.
    pub fn to_http(&self) -> http::Result<http::Request<()>> {
        http::Request::builder()
            .method(self.method.clone())
            .uri(self.target_url())
            .header(AUTHORIZATION, self.authorization_header())
            .body(())
    }
}
