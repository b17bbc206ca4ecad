//! Payment confirmation adapters behind the `PaymentGateway` port.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use greenloop_shared::ports::{PaymentGateway, PaymentStatus};

/// Confirmation lookup against the payment provider's HTTP API.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct PaymentResponse {
    status: PaymentStatus,
}

impl HttpPaymentGateway {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn confirm(&self, reference: &str) -> anyhow::Result<PaymentStatus> {
        let url = format!("{}/payments/{reference}", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<PaymentResponse>()
            .await?;

        Ok(response.status)
    }
}

/// Fixed responses keyed by reference. Used by tests and local development.
/// Unknown references read as failed.
#[derive(Debug, Default, Clone)]
pub struct StaticPaymentGateway {
    payments: HashMap<String, PaymentStatus>,
}

impl StaticPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payment(mut self, reference: impl Into<String>, status: PaymentStatus) -> Self {
        self.payments.insert(reference.into(), status);
        self
    }
}

#[async_trait]
impl PaymentGateway for StaticPaymentGateway {
    async fn confirm(&self, reference: &str) -> anyhow::Result<PaymentStatus> {
        Ok(self
            .payments
            .get(reference)
            .copied()
            .unwrap_or(PaymentStatus::Failed))
    }
}
