use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use tracing::info;

use greenloop_db::table::Promotion;
use greenloop_shared::Error;
use greenloop_shared::moderation::{self, Status};
use greenloop_shared::ports::{Notifier, PaymentGateway};

use crate::repository;

struct Reviewed {
    submitter_id: String,
    name: String,
}

impl<P: PaymentGateway, N: Notifier> super::Command<P, N> {
    /// Apply a moderation decision to a promotion request.
    ///
    /// The notes rule is keyed on the target status: `Rejected` and
    /// `PendingApproval` require non-empty notes, `Approved` never does.
    /// Every transition stamps `reviewed_at` and notifies the submitter.
    pub async fn review(
        &self,
        promotion_id: impl Into<String>,
        admin_id: impl Into<String>,
        target: Status,
        notes: Option<String>,
    ) -> greenloop_shared::Result<()> {
        let promotion_id = promotion_id.into();
        let admin_id = admin_id.into();
        let notes = moderation::review_notes(target, notes.as_deref())?;

        let mut attempt = 0;
        let reviewed = loop {
            match self
                .try_review(&promotion_id, &admin_id, target, notes.as_deref())
                .await
            {
                Err(Error::ConcurrencyConflict) if attempt < super::WRITE_RETRIES => {
                    attempt += 1;
                }
                result => break result?,
            }
        };

        info!(
            promotion_id = %promotion_id,
            admin_id = %admin_id,
            status = %target,
            "promotion reviewed"
        );

        let outcome = match target {
            Status::Approved => "approved and is now publicly listed",
            Status::Rejected => "rejected",
            Status::PendingApproval => "put back under review and hidden from the public directory",
        };
        let message = match &notes {
            Some(notes) => format!(
                "Your promotion \"{}\" was {outcome}. Reviewer notes: {notes}",
                reviewed.name
            ),
            None => format!("Your promotion \"{}\" was {outcome}.", reviewed.name),
        };
        self.notify_best_effort(&reviewed.submitter_id, "Promotion reviewed", &message)
            .await;

        Ok(())
    }

    /// Revert an already-decided request to `PendingApproval`. Notes are
    /// mandatory; the listing disappears from the public directory until it
    /// is approved again.
    pub async fn reconsider(
        &self,
        promotion_id: impl Into<String>,
        admin_id: impl Into<String>,
        notes: impl Into<String>,
    ) -> greenloop_shared::Result<()> {
        self.review(
            promotion_id,
            admin_id,
            Status::PendingApproval,
            Some(notes.into()),
        )
        .await
    }

    async fn try_review(
        &self,
        promotion_id: &str,
        admin_id: &str,
        target: Status,
        notes: Option<&str>,
    ) -> greenloop_shared::Result<Reviewed> {
        let mut tx = self.pool.begin().await?;

        let Some(row) = repository::find(&mut tx, promotion_id).await? else {
            greenloop_shared::not_found!("promotion");
        };

        let now = OffsetDateTime::now_utc().unix_timestamp();

        let statement = sea_query::Query::update()
            .table(Promotion::Table)
            .value(Promotion::Status, target.to_string())
            .value(Promotion::ReviewerNotes, notes.map(str::to_owned))
            .value(Promotion::ReviewedAt, now)
            .value(Promotion::ReviewedBy, admin_id)
            .value(Promotion::Version, row.version + 1)
            .and_where(Expr::col(Promotion::Id).eq(promotion_id))
            .and_where(Expr::col(Promotion::Version).eq(row.version))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            return Err(Error::ConcurrencyConflict);
        }

        tx.commit().await?;

        Ok(Reviewed {
            submitter_id: row.submitter_id,
            name: row.name,
        })
    }
}
