use reqwest::blocking::Client as ReqwestClient;

/// Response handed back by an [`HttpClient`].
pub type Response = http::Response<Vec<u8>>;

/// Failure reported by an [`HttpClient`]. Surfaced to the caller unchanged.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Sends a fully-formed, already signed request.
///
/// Status codes are not interpreted by the consumer; a transport that wants
/// non-2xx responses treated as failures must return an error itself. Timeouts
/// and cancellation also belong here.
pub trait HttpClient: Send + Sync {
    fn send(&self, request: http::Request<()>) -> Result<Response, TransportError>;
}

impl<F> HttpClient for F
where
    F: Fn(http::Request<()>) -> Result<Response, TransportError> + Send + Sync,
{
    fn send(&self, request: http::Request<()>) -> Result<Response, TransportError> {
        self(request)
    }
}

/// Default transport built on reqwest's blocking client.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient(pub ReqwestClient);

impl ReqwestHttpClient {
    /// Constructs a new `ReqwestHttpClient`.
    ///
    /// # Errors
    ///
    /// This method fails if the TLS backend cannot be initialized.
    pub fn new() -> reqwest::Result<Self> {
        Ok(ReqwestHttpClient(ReqwestClient::builder().build()?))
    }

    /// Wraps an existing `reqwest::blocking::Client`.
    pub fn with_client(client: ReqwestClient) -> Self {
        ReqwestHttpClient(client)
    }
}

impl From<ReqwestClient> for ReqwestHttpClient {
    fn from(client: ReqwestClient) -> Self {
        ReqwestHttpClient::with_client(client)
    }
}

impl HttpClient for ReqwestHttpClient {
    fn send(&self, request: http::Request<()>) -> Result<Response, TransportError> {
        let (parts, ()) = request.into_parts();
        let resp = self
            .0
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .send()?;

        let mut builder = http::Response::builder()
            .status(resp.status())
            .version(resp.version());
        if let Some(headers) = builder.headers_mut() {
            *headers = resp.headers().clone();
        }
        let body = resp.bytes()?.to_vec();
        Ok(builder.body(body)?)
    }
}
