use std::io::Write;

use kerala_transit::app::usecases::{ClaimCouponError, OnboardingProgress};
use kerala_transit::domain::ids::CouponId;
use kerala_transit::domain::money::Amount;
use kerala_transit::domain::pricing::UserCategory;
use kerala_transit::domain::rewards::ClaimError;
use kerala_transit::{load_config, wire_use_cases};

fn write_config(data_dir: &std::path::Path) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [account]
        points = 180
        calories = 300
        claimed = [3]

        [storage]
        data_dir = {data_dir:?}
        "#,
        data_dir = data_dir.display().to_string()
    )
    .unwrap();
    file
}

#[tokio::test]
async fn bootstrap_end_to_end_with_file_storage() {
    let data_dir = tempfile::TempDir::new().unwrap();
    let config_file = write_config(data_dir.path());
    let config = load_config(config_file.path()).expect("load config");

    let use_cases = wire_use_cases(&config).expect("wire");

    // Pricing
    let quotes = use_cases
        .quote_catalog
        .execute(UserCategory::Child)
        .expect("quote");
    assert_eq!(quotes[0].discounted, Amount::new(1250));
    assert!(quotes[0].show_original());

    // A 300-calorie reading unlocks coupons 1 and 2 but not 4.
    let receipt = use_cases
        .claim_coupon
        .execute(CouponId::new(1), 300)
        .await
        .expect("claim metro pass");
    assert_eq!(receipt.confirmation(), "You earned 50 points.");

    let err = use_cases
        .claim_coupon
        .execute(CouponId::new(4), 300)
        .await
        .expect_err("walking tour is locked");
    assert!(matches!(
        err,
        ClaimCouponError::Rejected(ClaimError::InsufficientCalories { shortfall: 100, .. })
    ));

    // Onboarding
    use_cases.onboarding.next().await.unwrap();
    use_cases.onboarding.next().await.unwrap();
    use_cases.onboarding.set_consent(true).await.unwrap();
    assert_eq!(
        use_cases.onboarding.next().await.unwrap(),
        OnboardingProgress::Completed
    );

    // Relaunch against the same data directory.
    let relaunched = wire_use_cases(&config).expect("rewire");
    let overview = relaunched.rewards_overview.execute(300).await.unwrap();
    assert_eq!(overview.account.points(), 230);
    assert!(overview.account.has_claimed(CouponId::new(1)));
    assert!(overview.account.has_claimed(CouponId::new(3)));

    let err = relaunched
        .claim_coupon
        .execute(CouponId::new(1), 300)
        .await
        .expect_err("already claimed before relaunch");
    assert!(matches!(
        err,
        ClaimCouponError::Rejected(ClaimError::AlreadyClaimed { .. })
    ));
}

#[tokio::test]
async fn bootstrap_relaunch_honours_newer_calorie_reading() {
    let data_dir = tempfile::TempDir::new().unwrap();
    let config_file = write_config(data_dir.path());
    let config = load_config(config_file.path()).expect("load config");

    let first = wire_use_cases(&config).expect("wire");
    first
        .claim_coupon
        .execute(CouponId::new(1), 300)
        .await
        .expect("claim metro pass");

    // The tracker has since recorded more activity than the stored 300.
    let relaunched = wire_use_cases(&config).expect("rewire");
    let overview = relaunched.rewards_overview.execute(1250).await.unwrap();
    assert_eq!(overview.account.calories(), 1250);

    let receipt = relaunched
        .claim_coupon
        .execute(CouponId::new(4), 1250)
        .await
        .expect("walking tour unlocked by the newer reading");
    assert_eq!(receipt.points_awarded, 100);
    assert_eq!(receipt.account.points(), 330);
}
