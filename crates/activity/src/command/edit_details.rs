use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use tracing::info;
use validator::Validate;

use greenloop_db::table::Activity;
use greenloop_shared::activity::{ActivityType, QUANTITY_MAX};
use greenloop_shared::field_error;
use greenloop_shared::ports::Notifier;

/// Partial update of descriptive fields. `None` preserves the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDetailsInput {
    #[validate(length(
        min = 3,
        max = 120,
        message = "Title must be between 3 and 120 characters"
    ))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description is limited to 2000 characters"))]
    pub description: Option<String>,

    pub activity_type: Option<ActivityType>,

    pub quantity: Option<f64>,

    #[validate(length(min = 1, max = 15, message = "Unit is required"))]
    pub unit: Option<String>,

    pub performed_on: Option<Date>,
}

impl<N: Notifier> super::Command<N> {
    /// Edit descriptive fields only. Review status and points are never
    /// touched here; a racing award keeps its own version-checked write path.
    pub async fn edit_details(
        &self,
        activity_id: impl Into<String>,
        admin_id: impl Into<String>,
        input: UpdateDetailsInput,
    ) -> greenloop_shared::Result<()> {
        let activity_id = activity_id.into();
        let admin_id = admin_id.into();

        input.validate()?;

        // Custom validators don't run on Option fields, so check manually.
        if let Some(quantity) = input.quantity {
            if !(quantity > 0.0 && quantity <= QUANTITY_MAX) {
                return Err(field_error(
                    "quantity",
                    "quantity_out_of_range",
                    format!("Quantity must be greater than 0 and at most {QUANTITY_MAX}"),
                ));
            }
        }
        if let Some(performed_on) = input.performed_on {
            if performed_on > OffsetDateTime::now_utc().date() {
                return Err(field_error(
                    "performed_on",
                    "date_in_future",
                    "Activity date cannot be in the future".to_string(),
                ));
            }
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();

        let mut statement = sea_query::Query::update()
            .table(Activity::Table)
            .value(Activity::UpdatedAt, now)
            .and_where(Expr::col(Activity::Id).eq(&activity_id))
            .to_owned();

        if let Some(title) = input.title {
            statement.value(Activity::Title, title.trim());
        }

        if let Some(description) = input.description {
            statement.value(Activity::Description, description.trim());
        }

        if let Some(activity_type) = input.activity_type {
            statement.value(Activity::ActivityType, activity_type.to_string());
        }

        if let Some(quantity) = input.quantity {
            statement.value(Activity::Quantity, quantity);
        }

        if let Some(unit) = input.unit {
            statement.value(Activity::Unit, unit.trim());
        }

        if let Some(performed_on) = input.performed_on {
            statement.value(Activity::PerformedOn, performed_on.to_string());
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            greenloop_shared::not_found!("activity");
        }

        info!(
            activity_id = %activity_id,
            admin_id = %admin_id,
            "activity details updated"
        );

        Ok(())
    }
}
