use sqlx::SqlitePool;

use greenloop_shared::Error;
use greenloop_shared::ports::{Notifier, PaymentGateway, PaymentStatus};

mod create_business;
mod create_product;
mod review;

pub use create_business::CreateBusinessInput;
pub use create_product::CreateProductInput;

// Version conflicts are retried with a fresh read before surfacing to the
// caller.
const WRITE_RETRIES: u32 = 3;

pub struct Command<P: PaymentGateway, N: Notifier> {
    pub pool: SqlitePool,
    pub payment: P,
    pub notifier: N,
}

impl<P: PaymentGateway, N: Notifier> Command<P, N> {
    pub fn new(pool: SqlitePool, payment: P, notifier: N) -> Self {
        Self {
            pool,
            payment,
            notifier,
        }
    }

    /// Payment precedes moderation: a request may only exist once its
    /// payment reference resolves to a captured payment.
    pub(crate) async fn ensure_payment_captured(
        &self,
        reference: &str,
    ) -> greenloop_shared::Result<()> {
        let status = self.payment.confirm(reference).await?;

        if status != PaymentStatus::Succeeded {
            return Err(Error::PaymentNotConfirmed {
                reference: reference.to_owned(),
                status: status.to_string(),
            });
        }

        Ok(())
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
