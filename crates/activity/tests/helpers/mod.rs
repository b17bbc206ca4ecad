use std::path::PathBuf;

use sqlx::SqlitePool;
use time::OffsetDateTime;

use greenloop_activity::{Command, SubmitInput};
use greenloop_notification::MemoryNotifier;
use greenloop_shared::activity::ActivityType;

pub type TestCommand = Command<MemoryNotifier>;

pub struct TestState {
    pub pool: SqlitePool,
    pub notifier: MemoryNotifier,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = greenloop_db::create_pool(&url, 5).await?;
    greenloop_db::migrate(&pool).await?;

    Ok(TestState {
        notifier: MemoryNotifier::new(),
        pool,
    })
}

#[allow(dead_code)]
pub fn command(state: &TestState) -> Command<MemoryNotifier> {
    Command::new(state.pool.clone(), state.notifier.clone())
}

#[allow(dead_code)]
pub fn query(state: &TestState) -> greenloop_activity::Query {
    greenloop_activity::Query(state.pool.clone())
}

#[allow(dead_code)]
pub fn submit_input(user_id: &str) -> SubmitInput {
    SubmitInput {
        user_id: user_id.to_owned(),
        title: "Neighborhood glass collection".to_owned(),
        description: "Collected glass bottles from the riverside park".to_owned(),
        activity_type: ActivityType::Recycling,
        quantity: 5.0,
        unit: "kg".to_owned(),
        performed_on: OffsetDateTime::now_utc().date(),
        evidence: vec!["evidence-1.jpg".to_owned(), "evidence-2.jpg".to_owned()],
    }
}
