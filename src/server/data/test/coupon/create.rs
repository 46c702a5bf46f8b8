use super::*;

/// Tests attaching a coupon to an event.
///
/// Expected: Ok with the coupon fields persisted and linked to the event
#[tokio::test]
async fn creates_coupon_for_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let valid = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

    let repo = CouponRepository::new(db);
    let coupon = repo
        .create(
            event.id,
            &CreateCouponParams {
                code: "SAVE10".to_string(),
                discount: 10,
                valid,
            },
        )
        .await?;

    assert_eq!(coupon.event_id, event.id);
    assert_eq!(coupon.code, "SAVE10");
    assert_eq!(coupon.discount, 10);
    assert_eq!(coupon.valid, valid);

    Ok(())
}

/// Tests that expiry dates in the past are accepted.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_past_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;

    let repo = CouponRepository::new(db);
    let result = repo
        .create(
            event.id,
            &CreateCouponParams {
                code: "OLD".to_string(),
                discount: 150,
                valid: Utc::now() - Duration::days(30),
            },
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}
