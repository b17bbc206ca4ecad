use std::path::PathBuf;

use sqlx::SqlitePool;

use greenloop_notification::MemoryNotifier;
use greenloop_promotion::{Command, CreateBusinessInput, CreateProductInput, StaticPaymentGateway};
use greenloop_shared::ports::PaymentStatus;

pub type TestCommand = Command<StaticPaymentGateway, MemoryNotifier>;

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
pub fn command(state: &TestState, payment: StaticPaymentGateway) -> TestCommand {
    Command::new(state.pool.clone(), payment, state.notifier.clone())
}

/// Gateway that confirms the one reference the fixtures use.
#[allow(dead_code)]
pub fn captured_payment() -> StaticPaymentGateway {
    StaticPaymentGateway::new().with_payment("pay_ok", PaymentStatus::Succeeded)
}

#[allow(dead_code)]
pub fn query(state: &TestState) -> greenloop_promotion::Query {
    greenloop_promotion::Query(state.pool.clone())
}

#[allow(dead_code)]
pub fn business_input(submitter_id: &str, payment_reference: &str) -> CreateBusinessInput {
    CreateBusinessInput {
        submitter_id: submitter_id.to_owned(),
        name: "Verde Grocer".to_owned(),
        description: "Zero-waste grocery store in the old town".to_owned(),
        website: Some("https://verdegrocer.localhost".to_owned()),
        logo_ref: "logo-verde.png".to_owned(),
        payment_reference: payment_reference.to_owned(),
    }
}

#[allow(dead_code)]
pub fn product_input(submitter_id: &str, payment_reference: &str) -> CreateProductInput {
    CreateProductInput {
        submitter_id: submitter_id.to_owned(),
        name: "Bamboo lunchbox".to_owned(),
        description: "Reusable lunchbox made from certified bamboo".to_owned(),
        website: None,
        logo_ref: "logo-lunchbox.png".to_owned(),
        images: vec!["lunchbox-1.jpg".to_owned(), "lunchbox-2.jpg".to_owned()],
        payment_reference: payment_reference.to_owned(),
    }
}
