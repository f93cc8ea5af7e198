//! Remote dispatch of command profiles.
//!
//! A dispatch turns `(endpoint, method, parameters)` into one HTTP request
//! against the configured base address and always resolves to an
//! [`Outcome`]. There is no retry, no cancellation and no timeout beyond the
//! transport default; concurrent dispatches complete in any order.

pub mod address;
pub mod outcome;

use std::collections::BTreeMap;

use reqwest::{Client, RequestBuilder};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::db::models::{CommandProfile, Method, RequestShape};

pub use address::{normalize_base_address, DEFAULT_BASE_ADDRESS};
pub use outcome::Outcome;

/// Endpoint used to check that the server is reachable.
pub const TEST_ENDPOINT: &str = "/api/test";

impl RequestShape {
    /// Attaches `parameters` to `builder` the way this shape requires.
    pub fn apply(self, builder: RequestBuilder, parameters: &BTreeMap<String, String>) -> RequestBuilder {
        match self {
            RequestShape::Query => builder.query(parameters),
            RequestShape::JsonBody => builder.json(parameters),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchClient {
    http: Client,
    base_address: String,
}

impl Default for DispatchClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_ADDRESS)
    }
}

impl DispatchClient {
    pub fn new(base_address: &str) -> Self {
        Self::with_client(Client::new(), base_address)
    }

    pub fn with_client(http: Client, base_address: &str) -> Self {
        Self {
            http,
            base_address: normalize_base_address(base_address),
        }
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    /// Accepts a full address or a bare `host:port`.
    pub fn set_base_address(&mut self, address: &str) {
        self.base_address = normalize_base_address(address);
        info!(base_address = %self.base_address, "server address updated");
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        address::join_endpoint(&self.base_address, endpoint)
    }

    /// Builds the request without sending it.
    ///
    /// URL errors are carried inside the builder and surface on send.
    pub fn build_request(
        &self,
        endpoint: &str,
        method: Method,
        parameters: &BTreeMap<String, String>,
    ) -> RequestBuilder {
        let url = self.url_for(endpoint);
        let builder = match method {
            Method::Post => self.http.post(url),
            Method::Get => self.http.get(url),
        };
        method.request_shape().apply(builder, parameters)
    }

    /// Sends one request and normalizes whatever comes back.
    pub async fn send(
        &self,
        endpoint: &str,
        method: Method,
        parameters: &BTreeMap<String, String>,
    ) -> Outcome {
        debug!(%method, endpoint, base_address = %self.base_address, "dispatching");

        let response = match self.build_request(endpoint, method, parameters).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, endpoint, "transport failure");
                return Outcome::network_error(&e);
            }
        };

        let status = response.status().as_u16();
        let outcome = match response.text().await {
            Ok(body) => Outcome::from_response(status, &body),
            Err(e) => Outcome::parse_error(e),
        };
        debug!(status, ok = outcome.ok, message = %outcome.message, "dispatch finished");
        outcome
    }

    pub async fn execute(&self, profile: &CommandProfile) -> Outcome {
        self.send(&profile.endpoint, profile.method, &profile.parameters)
            .await
    }

    /// Starts a dispatch on the runtime and returns immediately.
    ///
    /// The handle resolves exactly once. Dropping it does not cancel the
    /// request.
    pub fn spawn_send(
        &self,
        endpoint: impl Into<String>,
        method: Method,
        parameters: BTreeMap<String, String>,
    ) -> JoinHandle<Outcome> {
        let client = self.clone();
        let endpoint = endpoint.into();
        tokio::spawn(async move { client.send(&endpoint, method, &parameters).await })
    }

    /// Like [`spawn_send`](Self::spawn_send), handing the outcome to
    /// `callback` once the request completes.
    pub fn send_with_callback<F>(
        &self,
        endpoint: impl Into<String>,
        method: Method,
        parameters: BTreeMap<String, String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let client = self.clone();
        let endpoint = endpoint.into();
        tokio::spawn(async move {
            let outcome = client.send(&endpoint, method, &parameters).await;
            callback(outcome);
        })
    }

    pub async fn test_connection(&self) -> Outcome {
        self.send(TEST_ENDPOINT, Method::Get, &BTreeMap::new()).await
    }
}
