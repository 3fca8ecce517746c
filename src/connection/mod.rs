mod charges;
mod customers;
mod payments;
mod raw;
mod refunds;
mod transactions;

pub use charges::{Charge, CreateChargeRequest};
pub use customers::{CreateCustomerRequest, Customer, TaxId};
pub use payments::{ConfirmPaymentRequest, CreatePaymentRequest, Payment, PixKeyType};
pub use refunds::{CreateRefundRequest, Refund};
pub use transactions::Transaction;

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::cache::{EntityCache, EntityKind};
use crate::config::{Environment, PixConfig};
use crate::endpoints::{self, Operation};
use crate::error::PixResult;
use crate::transport::{HttpCaller, RestCaller};

/// Entry point for the OpenPix API. Holds the environment, the fixed
/// request headers and the per-connection entity cache, and exposes one
/// method per API operation.
pub struct PixConnection {
    environment: Environment,
    headers: Vec<(String, String)>,
    cache: Mutex<EntityCache>,
    caller: Arc<dyn RestCaller>,
}

impl PixConnection {
    /// Creates a connection for the given application id, sent verbatim as
    /// the `Authorization` header on every call.
    pub fn new(authorization: impl Into<String>, environment: Environment) -> Self {
        Self::with_caller(authorization, environment, Arc::new(HttpCaller::new()))
    }

    pub fn from_config(config: &PixConfig) -> Self {
        Self::new(config.app_id.clone(), config.environment)
    }

    /// Same as [`new`](Self::new) with a custom transport, mainly for tests.
    pub fn with_caller(
        authorization: impl Into<String>,
        environment: Environment,
        caller: Arc<dyn RestCaller>,
    ) -> Self {
        let headers = vec![
            ("Authorization".to_owned(), authorization.into()),
            ("Cache-Control".to_owned(), "no-cache".to_owned()),
        ];

        Self {
            environment,
            headers,
            cache: Mutex::new(EntityCache::new()),
            caller,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Cached single-resource fetch: at most one remote call per (kind, id)
    /// pair for the lifetime of the connection. The lock is never held
    /// across the remote call, so concurrent fetches of one id may race and
    /// both hit the network, with the later store winning.
    pub(crate) async fn fetch(
        &self,
        kind: EntityKind,
        operation: Operation,
        id: &str,
    ) -> PixResult<Value> {
        if let Some(payload) = self.cache.lock().lookup(kind, id).cloned() {
            tracing::debug!("Cache hit for {:?} {}", kind, id);
            return Ok(payload);
        }

        let url = self.resource_url(operation, id)?;
        let payload = self.caller.get_json(&url, &self.headers).await?;

        self.cache.lock().store(kind, id, payload.clone());

        Ok(payload)
    }

    /// Body-carrying call used by the create operations. The mock
    /// environment serves static fixture files, so it is read with GET.
    pub(crate) async fn submit(&self, operation: Operation, body: &Value) -> PixResult<Value> {
        let url = endpoints::resolve(self.environment, operation)?;

        if self.environment == Environment::Mock {
            self.caller.get_json(&url, &self.headers).await
        } else {
            self.caller.post_json(&url, &self.headers, body).await
        }
    }

    fn resource_url(&self, operation: Operation, id: &str) -> PixResult<String> {
        let mut url = endpoints::resolve(self.environment, operation)?;

        // Mock fragments are already complete fixture file names.
        if self.environment != Environment::Mock {
            if !url.ends_with('/') {
                url.push('/');
            }
            url.push_str(id);
        }

        Ok(url)
    }
}
