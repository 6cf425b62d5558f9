use crate::error::Result;
use core::future::Future;
use http_body_util::{BodyExt, Empty};
use hyper::{
    body::Bytes,
    header::{HeaderValue, ACCEPT},
    Request, StatusCode, Uri,
};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

pub const APPLICATION_JSON: &str = "application/json";

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Reply {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Issues GET requests against the question bank.
pub trait Transport {
    fn get(&self, uri: Uri) -> impl Future<Output = Result<Reply>> + Send;
}

/// Production transport over HTTPS.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
}

impl HyperTransport {
    /// Fails only if the platform certificate store cannot be loaded.
    pub fn new() -> std::io::Result<Self> {
        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()?
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Ok(Self { client })
    }
}

impl Transport for HyperTransport {
    fn get(&self, uri: Uri) -> impl Future<Output = Result<Reply>> + Send {
        async move {
            let mut request = Request::new(Empty::new());
            request.headers_mut().append(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
            *request.uri_mut() = uri;

            let response = self.client.request(request).await?;
            let status = response.status();
            let body = response.into_body().collect().await?.to_bytes();
            Ok(Reply { status, body })
        }
    }
}
