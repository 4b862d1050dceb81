use chrono::NaiveDate;

use super::eclipses::*;
use crate::dataset::SnapshotRepository;
use crate::models::{EclipseKind, EclipseRecord};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(date: NaiveDate, eclipse_type: &str, regions: &str) -> EclipseRecord {
    EclipseRecord::new(date, eclipse_type, regions, Some(4))
}

fn mixed_records() -> Vec<EclipseRecord> {
    vec![
        record(ymd(2025, 3, 14), "lunar", "Americas"),
        record(ymd(2025, 3, 29), "solar", "Europe"),
        record(ymd(2025, 9, 7), "total", "Asia"),
        record(ymd(2025, 9, 21), "solar partial", "Oceania"),
        record(ymd(2026, 2, 17), "annular", "Antarctica"),
    ]
}

#[test]
fn test_list_all_preserves_order() {
    let records = mixed_records();
    let all = list_all(&records);
    assert_eq!(all, records);
}

#[test]
fn test_list_all_empty() {
    assert!(list_all(&[]).is_empty());
}

#[test]
fn test_list_all_is_idempotent() {
    let records = mixed_records();
    assert_eq!(list_all(&records), list_all(&records));
}

#[test]
fn test_list_by_type_substring_match() {
    let records = mixed_records();
    let solar = list_by_type(&records, "solar");
    let regions: Vec<&str> = solar.iter().map(|r| r.regions.as_str()).collect();
    assert_eq!(regions, vec!["Europe", "Oceania"]);
}

#[test]
fn test_list_by_type_case_insensitive_filter() {
    let records = mixed_records();
    assert_eq!(list_by_type(&records, "LUNAR").len(), 1);
}

#[test]
fn test_list_by_type_no_match_is_empty() {
    let records = vec![record(ymd(2024, 1, 1), "total", "Asia")];
    assert!(list_by_type(&records, EclipseKind::Lunar.as_str()).is_empty());
}

#[test]
fn test_list_by_type_does_not_validate_filter() {
    let records = mixed_records();
    assert_eq!(list_by_type(&records, "nnul").len(), 1);
}

#[test]
fn test_type_partition_covers_all_records() {
    let records = mixed_records();
    let solar = list_by_type(&records, "solar");
    let lunar = list_by_type(&records, "lunar");
    let other: Vec<EclipseRecord> = records
        .iter()
        .filter(|r| !r.matches_type("solar") && !r.matches_type("lunar"))
        .cloned()
        .collect();

    let mut union: Vec<EclipseRecord> = solar.into_iter().chain(lunar).chain(other).collect();
    union.sort_by_key(|r| r.date);
    let mut all = list_all(&records);
    all.sort_by_key(|r| r.date);
    assert_eq!(union, all);
}

#[test]
fn test_next_upcoming_first_on_or_after_now() {
    let records = mixed_records();
    let next = next_upcoming(&records, ymd(2025, 3, 20)).unwrap();
    assert_eq!(next.date, ymd(2025, 3, 29));
}

#[test]
fn test_next_upcoming_includes_today() {
    let records = mixed_records();
    let next = next_upcoming(&records, ymd(2025, 9, 7)).unwrap();
    assert_eq!(next.regions, "Asia");
}

#[test]
fn test_next_upcoming_uses_source_order() {
    let records = vec![
        record(ymd(2030, 6, 1), "total", "Later"),
        record(ymd(2026, 1, 1), "partial", "Sooner"),
    ];
    let next = next_upcoming(&records, ymd(2025, 1, 1)).unwrap();
    assert_eq!(next.regions, "Later");
}

#[test]
fn test_next_upcoming_none_when_all_past() {
    let records = mixed_records();
    assert!(next_upcoming(&records, ymd(2027, 1, 1)).is_none());
}

#[test]
fn test_next_upcoming_empty() {
    assert!(next_upcoming(&[], ymd(2025, 1, 1)).is_none());
}

#[test]
fn test_end_to_end_example() {
    let records = vec![
        EclipseRecord::new(ymd(2024, 1, 1), "total", "Asia", Some(3)),
        EclipseRecord::new(ymd(2099, 12, 31), "partial", "Europe", None),
    ];

    let next = next_upcoming(&records, ymd(2025, 1, 1)).unwrap();
    assert_eq!(next.date, ymd(2099, 12, 31));
    assert_eq!(next.duration, None);
    assert!(list_by_type(&records, "lunar").is_empty());
}

#[tokio::test]
async fn test_fetch_wrappers_use_repository() {
    let repo = SnapshotRepository::from_records(mixed_records());

    assert_eq!(fetch_all(&repo).await.unwrap().len(), 5);
    assert_eq!(fetch_by_type(&repo, "solar").await.unwrap().len(), 2);
    let next = fetch_next_upcoming(&repo, ymd(2025, 9, 8)).await.unwrap();
    assert_eq!(next.map(|r| r.regions), Some("Oceania".to_string()));
    assert!(fetch_next_upcoming(&repo, ymd(2030, 1, 1))
        .await
        .unwrap()
        .is_none());
}
