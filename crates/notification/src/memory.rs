use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use greenloop_shared::ports::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub user_id: String,
    pub title: String,
    pub message: String,
}

/// Collects messages in memory. Used by tests and local development.
#[derive(Default, Clone)]
pub struct MemoryNotifier {
    sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn send(&self, user_id: &str, title: &str, message: &str) -> anyhow::Result<()> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| anyhow::anyhow!("notifier mutex poisoned"))?;
        sent.push(SentMessage {
            user_id: user_id.to_owned(),
            title: title.to_owned(),
            message: message.to_owned(),
        });

        Ok(())
    }
}

/// Always fails; exercises the best-effort delivery contract.
#[derive(Debug, Default, Clone)]
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _user_id: &str, _title: &str, _message: &str) -> anyhow::Result<()> {
        anyhow::bail!("notifier offline")
    }
}
