use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use tracing::info;

use greenloop_db::table::Activity;
use greenloop_shared::activity::{AWARD_VALUES, Status};
use greenloop_shared::ports::Notifier;
use greenloop_shared::{Error, field_error};

use crate::repository;

struct Awarded {
    owner_id: String,
    title: String,
    old_points: i64,
}

impl<N: Notifier> super::Command<N> {
    /// Award (or re-award) points to an activity.
    ///
    /// The status write and the ledger delta share one transaction, and the
    /// version check serializes racing reviewers: the loser re-reads and
    /// recomputes its delta instead of applying one based on stale points.
    /// Re-awarding the same value is a ledger no-op but still refreshes
    /// `reviewed_at` and notifies the owner.
    pub async fn award(
        &self,
        activity_id: impl Into<String>,
        admin_id: impl Into<String>,
        points: i64,
    ) -> greenloop_shared::Result<()> {
        let activity_id = activity_id.into();
        let admin_id = admin_id.into();

        if !AWARD_VALUES.contains(&points) {
            return Err(field_error(
                "points",
                "award_value",
                format!("Points must be one of {AWARD_VALUES:?}"),
            ));
        }

        let mut attempt = 0;
        let awarded = loop {
            match self.try_award(&activity_id, &admin_id, points).await {
                Err(Error::ConcurrencyConflict) if attempt < super::WRITE_RETRIES => {
                    attempt += 1;
                }
                result => break result?,
            }
        };

        info!(
            activity_id = %activity_id,
            admin_id = %admin_id,
            points,
            delta = points - awarded.old_points,
            "activity points awarded"
        );

        let message = if awarded.old_points == 0 {
            format!(
                "Your activity \"{}\" was reviewed and awarded {points} points.",
                awarded.title
            )
        } else {
            format!(
                "Your activity \"{}\" was re-qualified from {} to {points} points.",
                awarded.title, awarded.old_points
            )
        };
        self.notify_best_effort(&awarded.owner_id, "Activity reviewed", &message)
            .await;

        Ok(())
    }

    async fn try_award(
        &self,
        activity_id: &str,
        admin_id: &str,
        points: i64,
    ) -> greenloop_shared::Result<Awarded> {
        let mut tx = self.pool.begin().await?;

        let Some(row) = repository::find(&mut tx, activity_id).await? else {
            greenloop_shared::not_found!("activity");
        };

        let delta = points - row.points;
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let statement = sea_query::Query::update()
            .table(Activity::Table)
            .value(Activity::Status, Status::Reviewed.to_string())
            .value(Activity::Points, points)
            .value(Activity::ReviewedAt, now)
            .value(Activity::ReviewedBy, admin_id)
            .value(Activity::Version, row.version + 1)
            .value(Activity::UpdatedAt, now)
            .and_where(Expr::col(Activity::Id).eq(activity_id))
            .and_where(Expr::col(Activity::Version).eq(row.version))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            return Err(Error::ConcurrencyConflict);
        }

        if delta != 0 {
            greenloop_ledger::apply_delta(&mut tx, &row.user_id, delta, now).await?;
        }

        tx.commit().await?;

        Ok(Awarded {
            owner_id: row.user_id,
            title: row.title,
            old_points: row.points,
        })
    }
}
