use sea_query::{Expr, ExprTrait, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, prelude::FromRow};

use greenloop_db::table::{Activity, ActivityEvidence};
use greenloop_shared::activity::{ActivityType, Status};

#[derive(Debug, FromRow)]
pub struct ActivityRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub activity_type: sqlx::types::Text<ActivityType>,
    pub quantity: f64,
    pub unit: String,
    pub performed_on: String,
    pub status: sqlx::types::Text<Status>,
    pub points: i64,
    pub reviewed_at: Option<i64>,
    pub reviewed_by: Option<String>,
    pub version: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ActivityRow {
    pub fn is_pending_review(&self) -> bool {
        self.status.0 == Status::PendingReview
    }

    pub fn is_reviewed(&self) -> bool {
        self.status.0 == Status::Reviewed
    }
}

pub(crate) fn select_activity() -> SelectStatement {
    sea_query::Query::select()
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
            Activity::ReviewedAt,
            Activity::ReviewedBy,
            Activity::Version,
            Activity::CreatedAt,
            Activity::UpdatedAt,
        ])
        .from(Activity::Table)
        .to_owned()
}

pub(crate) async fn find(
    conn: &mut SqliteConnection,
    id: &str,
) -> greenloop_shared::Result<Option<ActivityRow>> {
    let statement = select_activity()
        .and_where(Expr::col(Activity::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ActivityRow, _>(&sql, values)
        .fetch_optional(&mut *conn)
        .await?)
}

pub(crate) async fn insert_evidence(
    conn: &mut SqliteConnection,
    activity_id: &str,
    refs: &[String],
) -> greenloop_shared::Result<()> {
    let mut statement = sea_query::Query::insert()
        .into_table(ActivityEvidence::Table)
        .columns([
            ActivityEvidence::ActivityId,
            ActivityEvidence::Position,
            ActivityEvidence::FileRef,
        ])
        .to_owned();

    for (position, file_ref) in refs.iter().enumerate() {
        statement.values_panic([
            activity_id.into(),
            (position as i32).into(),
            file_ref.as_str().into(),
        ]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

pub(crate) async fn delete_evidence(
    conn: &mut SqliteConnection,
    activity_id: &str,
) -> greenloop_shared::Result<()> {
    let statement = sea_query::Query::delete()
        .from_table(ActivityEvidence::Table)
        .and_where(Expr::col(ActivityEvidence::ActivityId).eq(activity_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}
