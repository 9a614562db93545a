use chrono::NaiveDate;
use uuid::Uuid;

use recipe_server::database::{queries::*, Database};

async fn test_db() -> Database {
    let url = format!(
        "sqlite:file:dbtest_{}?mode=memory&cache=shared",
        Uuid::new_v4().simple()
    );
    let db = Database::new(&url).await.expect("Failed to open test database");
    db.migrate().await.expect("Failed to migrate");
    db
}

#[tokio::test]
async fn test_create_and_find_user() {
    let db = test_db().await;

    let user = UserQueries::create_user(db.pool(), "sam", "sam@example.com", "hash")
        .await
        .unwrap();
    assert_eq!(user.username, "sam");
    assert_eq!(user.requests_today, 0);
    assert_eq!(user.last_request_date, None);
    assert!(!user.premium);

    let by_email = UserQueries::find_by_email(db.pool(), "sam@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    let by_id = UserQueries::find_by_id(db.pool(), user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "sam@example.com");

    // Username collision is found even with a different email.
    let collision = UserQueries::find_by_email_or_username(db.pool(), "other@example.com", "sam")
        .await
        .unwrap();
    assert!(collision.is_some());

    let missing = UserQueries::find_by_email_or_username(db.pool(), "other@example.com", "pat")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_unique_constraints_reject_duplicates() {
    let db = test_db().await;

    UserQueries::create_user(db.pool(), "sam", "sam@example.com", "hash")
        .await
        .unwrap();

    let dup_email = UserQueries::create_user(db.pool(), "sam2", "sam@example.com", "hash").await;
    assert!(dup_email.is_err());

    let dup_username = UserQueries::create_user(db.pool(), "sam", "sam2@example.com", "hash").await;
    assert!(dup_username.is_err());
}

#[tokio::test]
async fn test_quota_fields_roundtrip() {
    let db = test_db().await;

    let user = UserQueries::create_user(db.pool(), "sam", "sam@example.com", "hash")
        .await
        .unwrap();

    let day: NaiveDate = "2024-03-01".parse().unwrap();
    UserQueries::update_quota(db.pool(), user.id, 2, day).await.unwrap();

    let reloaded = UserQueries::find_by_id(db.pool(), user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.requests_today, 2);
    assert_eq!(reloaded.last_request_date, Some(day));
}

#[tokio::test]
async fn test_set_premium() {
    let db = test_db().await;

    let user = UserQueries::create_user(db.pool(), "sam", "sam@example.com", "hash")
        .await
        .unwrap();
    assert!(!user.premium);

    UserQueries::set_premium(db.pool(), user.id).await.unwrap();

    let reloaded = UserQueries::find_by_id(db.pool(), user.id).await.unwrap().unwrap();
    assert!(reloaded.premium);
}

#[tokio::test]
async fn test_history_is_append_only_and_ordered() {
    let db = test_db().await;

    let user = UserQueries::create_user(db.pool(), "sam", "sam@example.com", "hash")
        .await
        .unwrap();

    for (ingredients, recipe) in [("a", "recipe a"), ("b", "recipe b"), ("c", "recipe c")] {
        HistoryQueries::append(db.pool(), user.id, ingredients, recipe)
            .await
            .unwrap();
    }

    assert_eq!(HistoryQueries::count_for_user(db.pool(), user.id).await.unwrap(), 3);

    let rows = HistoryQueries::list_for_user(db.pool(), user.id).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].ingredients, "c");
    assert_eq!(rows[2].ingredients, "a");
    assert!(rows[0].created_at >= rows[1].created_at);

    // Rows belong only to their owner.
    let other = UserQueries::create_user(db.pool(), "pat", "pat@example.com", "hash")
        .await
        .unwrap();
    assert_eq!(HistoryQueries::count_for_user(db.pool(), other.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_payment_roundtrip() {
    let db = test_db().await;

    let user = UserQueries::create_user(db.pool(), "sam", "sam@example.com", "hash")
        .await
        .unwrap();

    let payment = PaymentQueries::create_payment(db.pool(), user.id, 5.00, "paid")
        .await
        .unwrap();
    assert_eq!(payment.status, "paid");
    assert_eq!(payment.amount, 5.00);

    let payments = PaymentQueries::list_for_user(db.pool(), user.id).await.unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, payment.id);
}
