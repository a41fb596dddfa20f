//! Runs against a real database. Skipped unless `DATABASE_URL` is set.

use bills_backend::{
    data::{BillStore, PgBills},
    date::format_bill_date,
    services::bills,
};
use chrono::NaiveDate;

#[tokio::test]
async fn stored_bill_reads_back_unchanged() {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping postgres round trip");
        return;
    };

    let store = PgBills::connect(&url).await.expect("connect");
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

    let created = bills::create(&store, "Coffee", 3.5, &format_bill_date(date))
        .await
        .expect("create");
    let cheap = bills::create(&store, "Gum", 0.01, "1 January 2024")
        .await
        .expect("create");

    let listed = bills::list(&store).await.expect("list");
    let read_back = listed.iter().find(|b| b.id == created.id).expect("listed");

    assert_eq!(*read_back, created);
    assert_eq!(read_back.description, "Coffee");
    assert_eq!(read_back.price, 3.5);
    assert_eq!(read_back.date, date);

    let cheap_pos = listed.iter().position(|b| b.id == cheap.id).unwrap();
    let created_pos = listed.iter().position(|b| b.id == created.id).unwrap();
    assert!(created_pos < cheap_pos);
    assert_eq!(listed[cheap_pos].price, 0.01);

    store.close().await;
}
