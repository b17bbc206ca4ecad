//! Contracts for the external collaborators the core drives.
//!
//! Payment capture, file storage and message delivery all live outside this
//! repository; the core only ever sees these traits.

use async_trait::async_trait;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Succeeded,
    Pending,
    Failed,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Look up the outcome of a previously captured payment.
    async fn confirm(&self, reference: &str) -> anyhow::Result<PaymentStatus>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message to a member. Best effort: callers log failures and
    /// never roll back the transition that triggered the send.
    async fn send(&self, user_id: &str, title: &str, message: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait EvidenceStore: Send + Sync {
    /// Persist a file and return an opaque reference. The core never
    /// interprets file bytes.
    async fn store(&self, bytes: Vec<u8>, content_type: &str) -> anyhow::Result<String>;

    /// Resolve a reference to a publicly servable URL.
    async fn resolve(&self, file_ref: &str) -> anyhow::Result<String>;

    async fn delete(&self, file_ref: &str) -> anyhow::Result<()>;
}
