//! Per-member point balance and derived level.
//!
//! The balance is the only stored state; the level is recomputed from it on
//! every read so the two can never drift apart. All balance mutations go
//! through [`apply_delta`] on the caller's open transaction, so a delta
//! commits or rolls back together with the status write that caused it.

use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool};

use greenloop_db::table::Ledger;

pub const POINTS_PER_LEVEL: i64 = 500;

/// Level derived from a total. Pure; callers must never persist the result.
pub fn level_of(total_points: i64) -> i64 {
    total_points / POINTS_PER_LEVEL + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub user_id: String,
    pub total_points: i64,
}

impl Balance {
    pub fn level(&self) -> i64 {
        level_of(self.total_points)
    }
}

/// Add `delta` to a member's total, clamped at a 0 floor.
///
/// Deltas are bounded by previously awarded amounts, so the clamp should
/// never fire for correct callers; it protects the invariant against drift.
/// Runs on the caller's connection so it joins the caller's transaction.
pub async fn apply_delta(
    conn: &mut SqliteConnection,
    user_id: &str,
    delta: i64,
    now: i64,
) -> greenloop_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Ledger::Table)
        .columns([Ledger::UserId, Ledger::TotalPoints, Ledger::UpdatedAt])
        .values_panic([user_id.into(), 0i64.into(), now.into()])
        .on_conflict(OnConflict::column(Ledger::UserId).do_nothing().to_owned())
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    let statement = Query::update()
        .table(Ledger::Table)
        .value(
            Ledger::TotalPoints,
            Expr::cust_with_values("MAX(0, \"total_points\" + ?)", [delta]),
        )
        .value(Ledger::UpdatedAt, now)
        .and_where(Expr::col(Ledger::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

/// Current balance for a member. A member without a ledger row reads as 0.
pub async fn balance_of(
    pool: &SqlitePool,
    user_id: impl Into<String>,
) -> greenloop_shared::Result<Balance> {
    let user_id = user_id.into();

    let statement = Query::select()
        .column(Ledger::TotalPoints)
        .from(Ledger::Table)
        .and_where(Expr::col(Ledger::UserId).eq(&user_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(Balance {
        total_points: row.map(|(points,)| points).unwrap_or(0),
        user_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_starts_at_one() {
        assert_eq!(level_of(0), 1);
        assert_eq!(level_of(499), 1);
    }

    #[test]
    fn level_steps_every_five_hundred_points() {
        for n in 0..10 {
            assert_eq!(level_of(n * POINTS_PER_LEVEL), n + 1);
            assert_eq!(level_of(n * POINTS_PER_LEVEL + 499), n + 1);
        }
    }

    #[test]
    fn level_is_monotonic() {
        let mut last = level_of(0);
        for points in 1..3000 {
            let level = level_of(points);
            assert!(level >= last);
            last = level;
        }
    }
}
