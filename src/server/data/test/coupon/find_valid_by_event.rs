use super::*;

/// Tests that a coupon is valid strictly before its expiry.
///
/// Coupon valid until now+1d is present at now and absent at now+2d.
///
/// Expected: Ok([coupon]) then Ok([])
#[tokio::test]
async fn includes_coupon_only_before_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let event = factory::create_event(db).await?;
    let coupon = factory::coupon::CouponFactory::new(db, event.id)
        .code("SAVE10")
        .discount(10)
        .valid(now + Duration::days(1))
        .build()
        .await?;

    let repo = CouponRepository::new(db);
    let at_now = repo.find_valid_by_event(event.id, now).await?;
    let later = repo
        .find_valid_by_event(event.id, now + Duration::days(2))
        .await?;

    assert_eq!(at_now.len(), 1);
    assert_eq!(at_now[0].id, coupon.id);
    assert_eq!(at_now[0].code, "SAVE10");
    assert!(later.is_empty());

    Ok(())
}

/// Tests that a coupon expiring exactly at the reference time is not valid.
///
/// Expected: Ok([])
#[tokio::test]
async fn excludes_coupon_expiring_at_reference_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let event = factory::create_event(db).await?;
    factory::create_coupon(db, event.id, t).await?;

    let repo = CouponRepository::new(db);
    let result = repo.find_valid_by_event(event.id, t).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests ordering and isolation between events.
///
/// Expected: Ok with only this event's coupons, soonest expiry first
#[tokio::test]
async fn returns_event_coupons_by_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let event = factory::create_event(db).await?;
    let other = factory::create_event(db).await?;
    let late = factory::create_coupon(db, event.id, t + Duration::days(10)).await?;
    let soon = factory::create_coupon(db, event.id, t + Duration::days(1)).await?;
    factory::create_coupon(db, other.id, t + Duration::days(5)).await?;

    let repo = CouponRepository::new(db);
    let result = repo.find_valid_by_event(event.id, t).await?;

    let ids: Vec<_> = result.iter().map(|coupon| coupon.id).collect();
    assert_eq!(ids, vec![soon.id, late.id]);

    Ok(())
}
