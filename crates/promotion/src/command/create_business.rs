use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;
use ulid::Ulid;
use validator::Validate;

use greenloop_shared::ports::{Notifier, PaymentGateway};
use greenloop_shared::promotion::Kind;

use crate::repository::{self, NewPromotion};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBusinessInput {
    pub submitter_id: String,

    #[validate(length(
        min = 2,
        max = 120,
        message = "Name must be between 2 and 120 characters"
    ))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description is limited to 2000 characters"))]
    pub description: String,

    #[validate(length(max = 255, message = "Website is limited to 255 characters"))]
    pub website: Option<String>,

    #[validate(length(min = 1, message = "A logo is required"))]
    pub logo_ref: String,

    #[validate(length(min = 1, message = "A payment reference is required"))]
    pub payment_reference: String,
}

impl<P: PaymentGateway, N: Notifier> super::Command<P, N> {
    /// Create a business listing request.
    ///
    /// Fails with `PaymentNotConfirmed` unless the payment reference resolves
    /// to a captured payment. The request starts at `PendingApproval` and is
    /// invisible to the public directory until approved.
    pub async fn create_business(
        &self,
        input: CreateBusinessInput,
    ) -> greenloop_shared::Result<String> {
        input.validate()?;
        self.ensure_payment_captured(&input.payment_reference)
            .await?;

        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let mut conn = self.pool.acquire().await?;
        repository::insert(
            &mut conn,
            NewPromotion {
                id: &id,
                submitter_id: &input.submitter_id,
                kind: Kind::Business,
                name: input.name.trim(),
                description: input.description.trim(),
                website: input.website.as_deref(),
                logo_ref: &input.logo_ref,
                payment_reference: &input.payment_reference,
                submitted_at: now,
            },
        )
        .await?;

        info!(
            promotion_id = %id,
            submitter_id = %input.submitter_id,
            "business promotion submitted for approval"
        );

        Ok(id)
    }
}
