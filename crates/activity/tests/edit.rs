use temp_dir::TempDir;

use greenloop_activity::UpdateDetailsInput;
use greenloop_shared::Error;
use greenloop_shared::activity::{ActivityType, Status};

mod helpers;

#[tokio::test]
async fn edit_changes_only_the_given_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state);

    let id = cmd.submit(helpers::submit_input("user1")).await?;
    cmd.edit_details(
        &id,
        "admin1",
        UpdateDetailsInput {
            title: Some("Riverside glass collection".to_owned()),
            quantity: Some(7.5),
            ..Default::default()
        },
    )
    .await?;

    let detail = helpers::query(&state).find(&id).await?.unwrap();
    assert_eq!(detail.activity.title, "Riverside glass collection");
    assert_eq!(detail.activity.quantity, 7.5);
    // Untouched fields keep their stored values.
    assert_eq!(detail.activity.unit, "kg");
    assert_eq!(detail.activity.activity_type.0, ActivityType::Recycling);

    Ok(())
}

#[tokio::test]
async fn edit_never_touches_review_state_or_points() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state);

    let id = cmd.submit(helpers::submit_input("user1")).await?;
    cmd.award(&id, "admin1", 50).await?;

    cmd.edit_details(
        &id,
        "admin1",
        UpdateDetailsInput {
            description: Some("Corrected description".to_owned()),
            ..Default::default()
        },
    )
    .await?;

    let detail = helpers::query(&state).find(&id).await?.unwrap();
    assert_eq!(detail.activity.status.0, Status::Reviewed);
    assert_eq!(detail.activity.points, 50);

    let balance = greenloop_ledger::balance_of(&state.pool, "user1").await?;
    assert_eq!(balance.total_points, 50);

    Ok(())
}

#[tokio::test]
async fn edit_validates_quantity_and_date() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state);

    let id = cmd.submit(helpers::submit_input("user1")).await?;

    let err = cmd
        .edit_details(
            &id,
            "admin1",
            UpdateDetailsInput {
                quantity: Some(0.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let Error::Validation(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    assert!(errors.field_errors().contains_key("quantity"));

    Ok(())
}

#[tokio::test]
async fn editing_an_unknown_activity_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state);

    let err = cmd
        .edit_details(
            "01JBT0J3V2D8B8ZD8Q4W8YV9XX",
            "admin1",
            UpdateDetailsInput {
                title: Some("Renamed".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn notify_owner_delivers_without_changing_state() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state);

    let id = cmd.submit(helpers::submit_input("user1")).await?;
    cmd.notify_owner(&id, "admin1", "Missing context", "Which park was this in?")
        .await?;

    let sent = state.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id, "user1");
    assert_eq!(sent[0].title, "Missing context");

    let detail = helpers::query(&state).find(&id).await?.unwrap();
    assert_eq!(detail.activity.status.0, Status::PendingReview);
    assert_eq!(detail.activity.points, 0);

    Ok(())
}
