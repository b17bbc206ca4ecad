use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use tracing::info;
use ulid::Ulid;
use validator::{Validate, ValidationError};

use greenloop_db::table::Activity;
use greenloop_shared::activity::{
    ActivityType, EVIDENCE_MAX_FILES, EVIDENCE_MIN_FILES, QUANTITY_MAX, Status,
};
use greenloop_shared::ports::Notifier;

use crate::repository;

fn validate_quantity(quantity: f64) -> Result<(), ValidationError> {
    if quantity > 0.0 && quantity <= QUANTITY_MAX {
        return Ok(());
    }

    Err(ValidationError::new("quantity_out_of_range").with_message(
        format!("Quantity must be greater than 0 and at most {QUANTITY_MAX}").into(),
    ))
}

fn validate_performed_on(performed_on: &Date) -> Result<(), ValidationError> {
    if *performed_on > OffsetDateTime::now_utc().date() {
        return Err(ValidationError::new("date_in_future")
            .with_message("Activity date cannot be in the future".into()));
    }

    Ok(())
}

fn validate_evidence(evidence: &Vec<String>) -> Result<(), ValidationError> {
    if (EVIDENCE_MIN_FILES..=EVIDENCE_MAX_FILES).contains(&evidence.len()) {
        return Ok(());
    }

    Err(ValidationError::new("evidence_count").with_message(
        format!("Between {EVIDENCE_MIN_FILES} and {EVIDENCE_MAX_FILES} evidence files are required")
            .into(),
    ))
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitInput {
    pub user_id: String,

    #[validate(length(
        min = 3,
        max = 120,
        message = "Title must be between 3 and 120 characters"
    ))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description is limited to 2000 characters"))]
    pub description: String,

    pub activity_type: ActivityType,

    #[validate(custom(function = "validate_quantity"))]
    pub quantity: f64,

    #[validate(length(min = 1, max = 15, message = "Unit is required"))]
    pub unit: String,

    #[validate(custom(function = "validate_performed_on"))]
    pub performed_on: Date,

    #[validate(custom(function = "validate_evidence"))]
    pub evidence: Vec<String>,
}

impl<N: Notifier> super::Command<N> {
    /// Record a new activity for review.
    ///
    /// The record starts as `PendingReview` with 0 points; the ledger is not
    /// touched until an admin awards points. Every violated field is
    /// reported, not just the first.
    pub async fn submit(&self, input: SubmitInput) -> greenloop_shared::Result<String> {
        input.validate()?;

        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let statement = sea_query::Query::insert()
            .into_table(Activity::Table)
            .columns([
                Activity::Id,
                Activity::UserId,
                Activity::Title,
                Activity::Description,
                Activity::ActivityType,
                Activity::Quantity,
                Activity::Unit,
                Activity::PerformedOn,
                Activity::Status,
                Activity::Points,
                Activity::CreatedAt,
                Activity::UpdatedAt,
            ])
            .values_panic([
                id.as_str().into(),
                input.user_id.as_str().into(),
                input.title.trim().into(),
                input.description.trim().into(),
                input.activity_type.to_string().into(),
                input.quantity.into(),
                input.unit.trim().into(),
                input.performed_on.to_string().into(),
                Status::PendingReview.to_string().into(),
                0i64.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let mut tx = self.pool.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        repository::insert_evidence(&mut tx, &id, &input.evidence).await?;

        tx.commit().await?;

        info!(
            activity_id = %id,
            user_id = %input.user_id,
            activity_type = %input.activity_type,
            "activity submitted for review"
        );

        Ok(id)
    }
}
