use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use tracing::info;

use greenloop_db::table::Activity;
use greenloop_shared::Error;
use greenloop_shared::ports::Notifier;

use crate::repository;

struct Deleted {
    owner_id: String,
    title: String,
    points: i64,
}

impl<N: Notifier> super::Command<N> {
    /// Remove an activity, reversing any points it had earned.
    ///
    /// The version check makes delete and award mutually exclusive: the
    /// ledger is never adjusted from a `points` value that a concurrent
    /// award is replacing.
    pub async fn delete(
        &self,
        activity_id: impl Into<String>,
        admin_id: impl Into<String>,
    ) -> greenloop_shared::Result<()> {
        let activity_id = activity_id.into();
        let admin_id = admin_id.into();

        let mut attempt = 0;
        let deleted = loop {
            match self.try_delete(&activity_id).await {
                Err(Error::ConcurrencyConflict) if attempt < super::WRITE_RETRIES => {
                    attempt += 1;
                }
                result => break result?,
            }
        };

        info!(
            activity_id = %activity_id,
            admin_id = %admin_id,
            points_reversed = deleted.points,
            "activity deleted"
        );

        let message = if deleted.points > 0 {
            format!(
                "Your activity \"{}\" was removed and {} points were deducted from your balance.",
                deleted.title, deleted.points
            )
        } else {
            format!("Your activity \"{}\" was removed.", deleted.title)
        };
        self.notify_best_effort(&deleted.owner_id, "Activity removed", &message)
            .await;

        Ok(())
    }

    async fn try_delete(&self, activity_id: &str) -> greenloop_shared::Result<Deleted> {
        let mut tx = self.pool.begin().await?;

        let Some(row) = repository::find(&mut tx, activity_id).await? else {
            greenloop_shared::not_found!("activity");
        };

        repository::delete_evidence(&mut tx, activity_id).await?;

        let statement = sea_query::Query::delete()
            .from_table(Activity::Table)
            .and_where(Expr::col(Activity::Id).eq(activity_id))
            .and_where(Expr::col(Activity::Version).eq(row.version))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            return Err(Error::ConcurrencyConflict);
        }

        if row.points > 0 {
            let now = OffsetDateTime::now_utc().unix_timestamp();
            greenloop_ledger::apply_delta(&mut tx, &row.user_id, -row.points, now).await?;
        }

        tx.commit().await?;

        Ok(Deleted {
            owner_id: row.user_id,
            title: row.title,
            points: row.points,
        })
    }
}
