use sqlx::SqlitePool;

use greenloop_shared::ports::Notifier;

mod award;
mod delete;
mod edit_details;
mod notify_owner;
mod submit;

pub use edit_details::UpdateDetailsInput;
pub use submit::SubmitInput;

// Version conflicts are retried with a fresh read before surfacing to the
// caller.
const WRITE_RETRIES: u32 = 3;

pub struct Command<N: Notifier> {
    pub pool: SqlitePool,
    pub notifier: N,
}

impl<N: Notifier> Command<N> {
    pub fn new(pool: SqlitePool, notifier: N) -> Self {
        Self { pool, notifier }
    }

    /// Delivery failures never fail the operation that triggered them.
    pub(crate) async fn notify_best_effort(&self, user_id: &str, title: &str, message: &str) {
        if let Err(err) = self.notifier.send(user_id, title, message).await {
            tracing::warn!(
                error = %err,
                user_id = %user_id,
                title = %title,
                "notification delivery failed"
            );
        }
    }
}
