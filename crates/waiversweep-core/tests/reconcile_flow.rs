//! End-to-end contract tests for the classify-then-delete flow.
//!
//! These tests drive the classifier output straight into the reconciler
//! against the in-memory scripted API, the same wiring the binary uses
//! with the real HTTP client.

use chrono::{TimeZone, Utc};
use waiversweep_core::fakes::ScriptedPolicyApi;
use waiversweep_core::{
    classify_expired, run_deletions, DeleteOutcome, DeletionOutcome, WaiverRecord,
};

fn record(id: &str, scope_kind: &str, scope_id: Option<&str>, expiration: Option<&str>) -> WaiverRecord {
    WaiverRecord {
        waiver_id: id.to_string(),
        scope_kind: scope_kind.to_string(),
        scope_id: scope_id.map(str::to_string),
        expiration: expiration.map(str::to_string),
        component: None,
    }
}

#[tokio::test]
async fn expired_waiver_deleted_end_to_end() {
    let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let records = vec![record(
        "W1",
        "application",
        Some("app-42"),
        Some("2020-01-01T00:00:00Z"),
    )];

    let classified = classify_expired(records, reference);
    assert_eq!(classified.expired.len(), 1);

    let api = ScriptedPolicyApi::new();
    let summary = run_deletions(classified.expired, || true, &api).await;

    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(
        api.calls(),
        vec![(
            "application".to_string(),
            "app-42".to_string(),
            "W1".to_string(),
        )]
    );
}

#[tokio::test]
async fn unknown_scope_never_reaches_the_api() {
    let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let records = vec![record(
        "W1",
        "unknown_kind",
        Some("app-42"),
        Some("2020-01-01T00:00:00Z"),
    )];

    let classified = classify_expired(records, reference);
    let api = ScriptedPolicyApi::new();
    let summary = run_deletions(classified.expired, || true, &api).await;

    assert_eq!(summary.deleted, 0);
    assert_eq!(summary.failed, 1);
    assert_eq!(api.call_count(), 0);
    assert!(matches!(
        summary.attempts[0].outcome,
        DeletionOutcome::UnknownScope { .. }
    ));
}

#[tokio::test]
async fn unparseable_expiry_is_skipped_not_fatal() {
    let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let records = vec![
        record("W1", "application", Some("app-1"), Some("banana")),
        record("W2", "application", Some("app-2"), Some("2020-01-01T00:00:00Z")),
    ];

    let classified = classify_expired(records, reference);
    assert_eq!(classified.expired.len(), 1);
    assert_eq!(classified.expired[0].record.waiver_id, "W2");
    assert_eq!(classified.skipped_unparseable.len(), 1);
    assert_eq!(classified.skipped_unparseable[0].waiver_id, "W1");
    assert_eq!(classified.skipped_unparseable[0].raw, "banana");

    let api = ScriptedPolicyApi::new();
    let summary = run_deletions(classified.expired, || true, &api).await;
    assert_eq!(summary.deleted, 1);
}

#[tokio::test]
async fn mixed_batch_attempts_every_entry_in_order() {
    let reference = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let records = vec![
        record("W1", "root_organization", Some("ROOT_ORGANIZATION_ID"), Some("2023-01-01T00:00:00Z")),
        record("W2", "application", Some("app-1"), Some("2030-01-01T00:00:00Z")),
        record("W3", "repository", None, Some("2022-05-05T05:05:05Z")),
        record("W4", "repository_container", Some("rc-1"), Some("2021-02-02T00:00:00.500Z")),
        record("W5", "application", Some("app-2"), Some("2024-05-31T22:00:00+02:00")),
    ];

    let classified = classify_expired(records, reference);
    // W2 is in the future; everything else expired, W5 via offset normalization.
    let expired_ids: Vec<&str> = classified
        .expired
        .iter()
        .map(|e| e.record.waiver_id.as_str())
        .collect();
    assert_eq!(expired_ids, vec!["W1", "W3", "W4", "W5"]);

    let api = ScriptedPolicyApi::new();
    api.script(
        "W4",
        DeleteOutcome::TransportFailed {
            details: "timed out after 30s".to_string(),
        },
    );

    let total = classified.expired.len();
    let summary = run_deletions(classified.expired, || true, &api).await;

    assert_eq!(summary.deleted + summary.failed, total);
    assert_eq!(summary.deleted, 2); // W1, W5
    assert_eq!(summary.failed, 2); // W3 missing scope id, W4 transport

    // W3 never reached the API; the rest did, in input order.
    let calls = api.calls();
    let called: Vec<&str> = calls.iter().map(|c| c.2.as_str()).collect();
    assert_eq!(called, vec!["W1", "W4", "W5"]);
    assert_eq!(calls[0].0, "organization");
}

#[tokio::test]
async fn declined_confirmation_leaves_server_untouched() {
    let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let records = vec![record(
        "W1",
        "application",
        Some("app-42"),
        Some("2020-01-01T00:00:00Z"),
    )];

    let classified = classify_expired(records, reference);
    let api = ScriptedPolicyApi::new();
    let summary = run_deletions(classified.expired, || false, &api).await;

    assert!(!summary.confirmed);
    assert_eq!(summary.deleted, 0);
    assert_eq!(summary.failed, 0);
    assert_eq!(api.call_count(), 0);
}
