//! Integration tests for schedule CRUD and filtered listing at the
//! repository layer.

use chrono::NaiveDate;
use sqlx::PgPool;
use stellight_core::types::LocalTimestamp;
use stellight_db::models::schedule::{CreateSchedule, ScheduleFilter, UpdateSchedule};
use stellight_db::models::stellar::CreateStellar;
use stellight_db::repositories::{ScheduleRepo, StellarRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn at(y: i32, m: u32, d: u32, h: u32) -> LocalTimestamp {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

async fn seed_stellar(pool: &PgPool, name: &str) -> i64 {
    StellarRepo::create(
        pool,
        &CreateStellar {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_schedule(stellar_id: i64, title: &str, start: LocalTimestamp) -> CreateSchedule {
    CreateSchedule {
        stellar_id,
        is_fixed_time: true,
        start_date_time: start,
        title: title.to_string(),
        remark: None,
    }
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_round_trips_fields(pool: PgPool) {
    let stellar_id = seed_stellar(&pool, "Airi").await;
    let start = at(2024, 1, 1, 10);

    let created = ScheduleRepo::create(
        &pool,
        &CreateSchedule {
            stellar_id,
            is_fixed_time: false,
            start_date_time: start,
            title: "Karaoke stream".to_string(),
            remark: Some("maybe late".to_string()),
        },
    )
    .await
    .unwrap();

    assert!(!created.is_deleted, "new schedules start undeleted");

    let found = ScheduleRepo::find_active_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created schedule should be findable");

    assert_eq!(found.stellar_id, stellar_id);
    assert!(!found.is_fixed_time);
    assert_eq!(found.start_date_time, start);
    assert_eq!(found.title, "Karaoke stream");
    assert_eq!(found.remark.as_deref(), Some("maybe late"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_unknown_id_returns_none(pool: PgPool) {
    let found = ScheduleRepo::find_active_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_mutable_fields_only(pool: PgPool) {
    let stellar_id = seed_stellar(&pool, "Airi").await;
    let created = ScheduleRepo::create(&pool, &new_schedule(stellar_id, "Launch", at(2024, 1, 1, 10)))
        .await
        .unwrap();

    let updated = ScheduleRepo::update(
        &pool,
        created.id,
        &UpdateSchedule {
            is_fixed_time: false,
            start_date_time: at(2024, 1, 2, 10),
            title: "Launch v2".to_string(),
            remark: Some("note".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("active schedule should be updatable");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.stellar_id, stellar_id, "stellar_id is immutable");
    assert!(!updated.is_fixed_time);
    assert_eq!(updated.start_date_time, at(2024, 1, 2, 10));
    assert_eq!(updated.title, "Launch v2");
    assert_eq!(updated.remark.as_deref(), Some("note"));
    assert!(!updated.is_deleted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_id_returns_none(pool: PgPool) {
    let result = ScheduleRepo::update(
        &pool,
        424_242,
        &UpdateSchedule {
            is_fixed_time: true,
            start_date_time: at(2024, 3, 1, 20),
            title: "Nobody home".to_string(),
            remark: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Filtered listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_no_filter_returns_all_ascending(pool: PgPool) {
    let stellar_id = seed_stellar(&pool, "Airi").await;
    for (title, day) in [("c", 3), ("a", 1), ("b", 2)] {
        ScheduleRepo::create(&pool, &new_schedule(stellar_id, title, at(2024, 1, day, 10)))
            .await
            .unwrap();
    }

    let all = ScheduleRepo::list(&pool, &ScheduleFilter::default())
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
    assert!(
        all.windows(2).all(|w| w[0].id < w[1].id),
        "listing must be ordered by ascending id"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_stellar_id(pool: PgPool) {
    let airi = seed_stellar(&pool, "Airi").await;
    let yuni = seed_stellar(&pool, "Yuni").await;
    ScheduleRepo::create(&pool, &new_schedule(airi, "airi solo", at(2024, 1, 1, 10)))
        .await
        .unwrap();
    ScheduleRepo::create(&pool, &new_schedule(yuni, "yuni solo", at(2024, 1, 1, 12)))
        .await
        .unwrap();

    let filter = ScheduleFilter {
        stellar_id: Some(airi),
        ..Default::default()
    };
    let found = ScheduleRepo::list(&pool, &filter).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].stellar_id, airi);
    assert_eq!(found[0].title, "airi solo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_date_range_bounds_are_inclusive(pool: PgPool) {
    let stellar_id = seed_stellar(&pool, "Airi").await;
    for day in 1..=5 {
        ScheduleRepo::create(
            &pool,
            &new_schedule(stellar_id, &format!("day {day}"), at(2024, 1, day, 10)),
        )
        .await
        .unwrap();
    }

    // Closed range [day 2 10:00, day 4 10:00] keeps exactly days 2..=4.
    let filter = ScheduleFilter {
        stellar_id: None,
        start_date_time_after: Some(at(2024, 1, 2, 10)),
        start_date_time_before: Some(at(2024, 1, 4, 10)),
    };
    let found = ScheduleRepo::list(&pool, &filter).await.unwrap();
    let titles: Vec<_> = found.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["day 2", "day 3", "day 4"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_single_bound_is_open_ended(pool: PgPool) {
    let stellar_id = seed_stellar(&pool, "Airi").await;
    for day in 1..=3 {
        ScheduleRepo::create(
            &pool,
            &new_schedule(stellar_id, &format!("day {day}"), at(2024, 1, day, 10)),
        )
        .await
        .unwrap();
    }

    let after_only = ScheduleFilter {
        start_date_time_after: Some(at(2024, 1, 2, 10)),
        ..Default::default()
    };
    let found = ScheduleRepo::list(&pool, &after_only).await.unwrap();
    assert_eq!(found.len(), 2, "after-bound alone keeps days 2 and 3");

    let before_only = ScheduleFilter {
        start_date_time_before: Some(at(2024, 1, 2, 10)),
        ..Default::default()
    };
    let found = ScheduleRepo::list(&pool, &before_only).await.unwrap();
    assert_eq!(found.len(), 2, "before-bound alone keeps days 1 and 2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_combines_filters_with_and(pool: PgPool) {
    let airi = seed_stellar(&pool, "Airi").await;
    let yuni = seed_stellar(&pool, "Yuni").await;
    ScheduleRepo::create(&pool, &new_schedule(airi, "in range", at(2024, 1, 2, 10)))
        .await
        .unwrap();
    ScheduleRepo::create(&pool, &new_schedule(airi, "out of range", at(2024, 2, 1, 10)))
        .await
        .unwrap();
    ScheduleRepo::create(&pool, &new_schedule(yuni, "other stellar", at(2024, 1, 2, 12)))
        .await
        .unwrap();

    let filter = ScheduleFilter {
        stellar_id: Some(airi),
        start_date_time_after: Some(at(2024, 1, 1, 0)),
        start_date_time_before: Some(at(2024, 1, 31, 0)),
    };
    let found = ScheduleRepo::list(&pool, &filter).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "in range");
}

// ---------------------------------------------------------------------------
// Stellar lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stellar_exists(pool: PgPool) {
    let id = seed_stellar(&pool, "Airi").await;
    assert!(StellarRepo::exists(&pool, id).await.unwrap());
    assert!(!StellarRepo::exists(&pool, id + 1000).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stellar_list_ascending(pool: PgPool) {
    seed_stellar(&pool, "Airi").await;
    seed_stellar(&pool, "Yuni").await;

    let all = StellarRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].id < all[1].id);
}
