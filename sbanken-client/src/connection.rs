use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::{ApiConfig, Credentials};
use crate::envelope::{ItemResponse, ListResponse};
use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// An authenticated session against the bank API.
///
/// The bearer token is fetched lazily on the first request and reused for
/// the lifetime of the connection. Resource accessors live next to their
/// record types (`accounts`, `transactions`, `cards`, ...).
pub struct ApiConnection<T = HttpTransport> {
    credentials: Credentials,
    transport: T,
    token: OnceCell<String>,
}

impl ApiConnection<HttpTransport> {
    pub fn new(credentials: Credentials, config: ApiConfig) -> Result<Self> {
        Ok(Self::with_transport(credentials, HttpTransport::new(config)?))
    }
}

impl<T: Transport> ApiConnection<T> {
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
            token: OnceCell::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// True once this session has authenticated.
    pub fn has_token(&self) -> bool {
        self.token.initialized()
    }

    async fn token(&self) -> Result<&str> {
        let token = self
            .token
            .get_or_try_init(|| async {
                debug!("getting token");
                self.transport.fetch_token(&self.credentials).await
            })
            .await?;
        Ok(token.as_str())
    }

    #[tracing::instrument(skip_all, fields(resource = %request.target))]
    pub(crate) async fn request<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let token = self.token().await?;
        let body = self.transport.send(token, &request).await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            target: request.target,
            source,
        })
    }

    pub(crate) async fn fetch_list<I: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<I>> {
        let env: ListResponse<I> = self.request(request).await?;
        env.error.check()?;
        Ok(env.items)
    }

    pub(crate) async fn fetch_item<I: DeserializeOwned>(&self, request: ApiRequest) -> Result<I> {
        let target = request.target.clone();
        let env: ItemResponse<I> = self.request(request).await?;
        env.error.check()?;
        env.item
            .ok_or_else(|| ClientError::InvalidRequest(format!("no item returned for {target}")))
    }
}
