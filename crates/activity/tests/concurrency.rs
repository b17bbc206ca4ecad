use std::sync::Arc;

use temp_dir::TempDir;

use greenloop_shared::Error;
use greenloop_shared::activity::Status;

mod helpers;

// Awards retry on conflict until they commit; the properties below hold
// whichever interleaving the scheduler picks.
async fn award_until_committed(
    cmd: &helpers::TestCommand,
    activity_id: &str,
    admin_id: &str,
    points: i64,
) -> greenloop_shared::Result<()> {
    loop {
        match cmd.award(activity_id, admin_id, points).await {
            Err(Error::ConcurrencyConflict) => continue,
            result => break result,
        }
    }
}

#[tokio::test]
async fn fifty_concurrent_awards_commit_exactly_one_net_delta() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = Arc::new(helpers::command(&state));

    let id = cmd.submit(helpers::submit_input("user1")).await?;

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let cmd = cmd.clone();
            let id = id.clone();
            tokio::spawn(async move { award_until_committed(&cmd, &id, &format!("admin{i}"), 10).await })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        result??;
    }

    let detail = helpers::query(&state).find(&id).await?.unwrap();
    assert_eq!(detail.activity.status.0, Status::Reviewed);
    assert_eq!(detail.activity.points, 10);

    // One net +10 from the baseline, not 50 x 10.
    let balance = greenloop_ledger::balance_of(&state.pool, "user1").await?;
    assert_eq!(balance.total_points, 10);

    Ok(())
}

#[tokio::test]
async fn racing_award_and_delete_never_corrupt_the_ledger() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = Arc::new(helpers::command(&state));

    let id = cmd.submit(helpers::submit_input("user1")).await?;
    cmd.award(&id, "admin1", 50).await?;

    let award_task = {
        let cmd = cmd.clone();
        let id = id.clone();
        tokio::spawn(async move {
            match award_until_committed(&cmd, &id, "admin2", 75).await {
                // The delete may win the race; a vanished activity is fine.
                Err(Error::NotFound(_)) => Ok(()),
                result => result,
            }
        })
    };
    let delete_task = {
        let cmd = cmd.clone();
        let id = id.clone();
        tokio::spawn(async move {
            loop {
                match cmd.delete(&id, "admin3").await {
                    Err(Error::ConcurrencyConflict) => continue,
                    result => break result,
                }
            }
        })
    };

    award_task.await??;
    delete_task.await??;

    // Whatever the interleaving, the balance matches the surviving rows.
    let balance = greenloop_ledger::balance_of(&state.pool, "user1").await?;
    let reviewed = helpers::query(&state)
        .reviewed_points_for_user("user1")
        .await?;
    assert_eq!(balance.total_points, reviewed);

    // The delete ran to completion, so the record is gone and its points
    // were reversed.
    assert!(helpers::query(&state).find(&id).await?.is_none());
    assert_eq!(balance.total_points, 0);

    Ok(())
}

#[tokio::test]
async fn concurrent_awards_across_activities_accumulate_correctly() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = Arc::new(helpers::command(&state));

    let mut ids = vec![];
    for _ in 0..10 {
        ids.push(cmd.submit(helpers::submit_input("user1")).await?);
    }

    let tasks: Vec<_> = ids
        .iter()
        .map(|id| {
            let cmd = cmd.clone();
            let id = id.clone();
            tokio::spawn(async move { award_until_committed(&cmd, &id, "admin1", 10).await })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        result??;
    }

    let balance = greenloop_ledger::balance_of(&state.pool, "user1").await?;
    assert_eq!(balance.total_points, 100);

    let reviewed = helpers::query(&state)
        .reviewed_points_for_user("user1")
        .await?;
    assert_eq!(reviewed, 100);

    Ok(())
}
