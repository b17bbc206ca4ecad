use temp_dir::TempDir;

use greenloop_promotion::StaticPaymentGateway;
use greenloop_shared::Error;
use greenloop_shared::moderation::Status;
use greenloop_shared::ports::PaymentStatus;
use greenloop_shared::promotion::Kind;

mod helpers;

#[tokio::test]
async fn captured_payment_creates_a_pending_request() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state, helpers::captured_payment());

    let id = cmd
        .create_business(helpers::business_input("member1", "pay_ok"))
        .await?;

    let detail = helpers::query(&state).find(&id).await?.unwrap();
    assert_eq!(detail.promotion.status.0, Status::PendingApproval);
    assert_eq!(detail.promotion.kind.0, Kind::Business);
    assert_eq!(detail.promotion.payment_reference, "pay_ok");
    assert!(detail.promotion.reviewed_at.is_none());

    // Pending requests sit in the review inbox, not the public directory.
    assert!(
        helpers::query(&state)
            .list_public(Kind::Business)
            .await?
            .is_empty()
    );
    assert_eq!(helpers::query(&state).list_for_review().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn uncaptured_payment_blocks_creation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let gateway = StaticPaymentGateway::new()
        .with_payment("pay_failed", PaymentStatus::Failed)
        .with_payment("pay_pending", PaymentStatus::Pending);
    let cmd = helpers::command(&state, gateway);

    for reference in ["pay_failed", "pay_pending", "pay_unknown"] {
        let err = cmd
            .create_business(helpers::business_input("member1", reference))
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::PaymentNotConfirmed { .. }),
            "expected payment error for {reference}"
        );
    }

    assert!(helpers::query(&state).list_for_review().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn product_request_stores_its_ordered_image_set() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state, helpers::captured_payment());

    let id = cmd
        .create_product(helpers::product_input("member1", "pay_ok"))
        .await?;

    let detail = helpers::query(&state).find(&id).await?.unwrap();
    assert_eq!(detail.promotion.kind.0, Kind::Product);
    assert_eq!(detail.images, vec!["lunchbox-1.jpg", "lunchbox-2.jpg"]);

    Ok(())
}

#[tokio::test]
async fn product_image_count_is_bounded() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state, helpers::captured_payment());

    let mut input = helpers::product_input("member1", "pay_ok");
    input.images = vec![];
    let err = cmd.create_product(input).await.unwrap_err();
    let Error::Validation(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    assert!(errors.field_errors().contains_key("images"));

    let mut input = helpers::product_input("member1", "pay_ok");
    input.images = (0..6).map(|i| format!("image-{i}.jpg")).collect();
    let err = cmd.create_product(input).await.unwrap_err();
    let Error::Validation(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    assert!(errors.field_errors().contains_key("images"));

    Ok(())
}

#[tokio::test]
async fn payload_validation_reports_every_field() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state, helpers::captured_payment());

    let mut input = helpers::business_input("member1", "pay_ok");
    input.name = "x".to_owned();
    input.logo_ref = String::new();

    let err = cmd.create_business(input).await.unwrap_err();
    let Error::Validation(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    let fields = errors.field_errors();
    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("logo_ref"));

    Ok(())
}
