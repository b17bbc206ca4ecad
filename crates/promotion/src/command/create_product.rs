use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;
use ulid::Ulid;
use validator::{Validate, ValidationError};

use greenloop_shared::ports::{Notifier, PaymentGateway};
use greenloop_shared::promotion::{IMAGE_MAX_FILES, IMAGE_MIN_FILES, Kind};

use crate::repository::{self, NewPromotion};

fn validate_images(images: &Vec<String>) -> Result<(), ValidationError> {
    if (IMAGE_MIN_FILES..=IMAGE_MAX_FILES).contains(&images.len()) {
        return Ok(());
    }

    Err(ValidationError::new("image_count").with_message(
        format!("Between {IMAGE_MIN_FILES} and {IMAGE_MAX_FILES} product images are required")
            .into(),
    ))
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductInput {
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

    #[validate(custom(function = "validate_images"))]
    pub images: Vec<String>,

    #[validate(length(min = 1, message = "A payment reference is required"))]
    pub payment_reference: String,
}

impl<P: PaymentGateway, N: Notifier> super::Command<P, N> {
    /// Create a product listing request with its ordered image set.
    ///
    /// Same preconditions as a business listing; the only difference is the
    /// payload shape.
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> greenloop_shared::Result<String> {
        input.validate()?;
        self.ensure_payment_captured(&input.payment_reference)
            .await?;

        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let mut tx = self.pool.begin().await?;
        repository::insert(
            &mut tx,
            NewPromotion {
                id: &id,
                submitter_id: &input.submitter_id,
                kind: Kind::Product,
                name: input.name.trim(),
                description: input.description.trim(),
                website: input.website.as_deref(),
                logo_ref: &input.logo_ref,
                payment_reference: &input.payment_reference,
                submitted_at: now,
            },
        )
        .await?;
        repository::insert_images(&mut tx, &id, &input.images).await?;
        tx.commit().await?;

        info!(
            promotion_id = %id,
            submitter_id = %input.submitter_id,
            images = input.images.len(),
            "product promotion submitted for approval"
        );

        Ok(id)
    }
}
