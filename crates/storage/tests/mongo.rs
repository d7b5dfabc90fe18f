use bson::doc;
use chrono::NaiveDate;
use model::{
    class_type::ClassType,
    decimal::Decimal,
    errors::TrackerError,
    record::{SessionRecord, Studio},
};
use storage::{
    class_types::ClassTypeCatalog as _, records::SessionRecords as _, session::Db, Storage,
};

async fn fresh_db() -> Db {
    let url = std::env::var("MONGO_URL").expect("MONGO_URL must be set");
    let name = format!("tracker_test_{}", bson::oid::ObjectId::new());
    Db::new(&url, &name).await.unwrap()
}

fn record(minutes: u32, pay: f64, students: u32, class_type: &str) -> SessionRecord {
    SessionRecord::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        minutes,
        Decimal::from(pay),
        Studio::MindfulMotion,
        class_type.to_string(),
        students,
    )
}

#[tokio::test]
async fn test_malformed_uri_is_configuration_error() {
    let err = Db::new("definitely not a uri", "pam").await.err().unwrap();
    assert!(matches!(err, TrackerError::Configuration(_)));
}

#[tokio::test]
async fn test_server_down_at_startup_is_not_fatal() {
    let db = Db::new("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300", "pam")
        .await
        .ok()
        .expect("handle is built without contacting the server");
    let storage = Storage::new(db);

    let err = storage.records.summary().await.unwrap_err();
    assert!(err.downcast_ref::<mongodb::error::Error>().is_some());
}

#[tokio::test]
#[ignore] // requires MONGO_URL
async fn test_aggregation_over_inserted_records() {
    let db = fresh_db().await;
    let storage = Storage::new(db.clone());

    assert!(storage.records.summary().await.unwrap().is_none());

    let records = [
        record(75, 30.0, 2, "Restorative"),
        record(60, 15.5, 8, "Vinyasa"),
        record(60, 15.5, 8, "Vinyasa"),
    ];
    for r in &records {
        let id = storage.records.insert(r).await.unwrap();
        assert_eq!(id, r.id);
    }

    let agg = storage.records.summary().await.unwrap().unwrap();
    assert_eq!(agg.sessions, 3);
    assert_eq!(agg.total_minutes, 195);
    assert_eq!(agg.total_pay, Decimal::from(61.0));
    assert_eq!(agg.total_students, 18);

    let stored = storage.records.all().await.unwrap();
    assert_eq!(stored.len(), 3);
    assert!(records
        .iter()
        .all(|r| stored.iter().any(|s| s.id == r.id && s.same_session(r))));

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore] // requires MONGO_URL
async fn test_class_types_sorted() {
    let db = fresh_db().await;
    let storage = Storage::new(db.clone());
    db.collection::<ClassType>("class_types")
        .insert_many([ClassType::new("Test"), ClassType::new("Restorative")])
        .await
        .unwrap();

    let labels = storage.class_types.labels().await.unwrap();
    assert_eq!(labels, vec!["Restorative", "Test"]);

    db.collection::<bson::Document>("class_types")
        .insert_one(doc! { "type": "Test" })
        .await
        .unwrap();
    let labels = storage.class_types.labels().await.unwrap();
    assert_eq!(labels, vec!["Restorative", "Test", "Test"]);

    db.drop().await.unwrap();
}
