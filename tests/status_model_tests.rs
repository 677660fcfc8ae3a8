use uptime_chart::status::{ComponentHealth, ServiceStatus, StatusSnapshot};

const PAYLOAD: &str = r#"{
    "system": { "status": "operational" },
    "components": [
        { "name": "API Core", "status": "operational", "responseTime": 123.0 },
        { "name": "Database", "status": "degraded_performance" },
        { "name": "File Storage", "status": "major_outage", "responseTime": 1500.0 }
    ],
    "history": [
        { "created_at": "2026-08-07T10:00:00Z", "response_time": 50.0 },
        {
            "is_gap": true,
            "created_at": "2026-08-07T10:05:00Z",
            "created_at_end": "2026-08-07T10:20:00Z"
        },
        { "created_at": "2026-08-07T10:25:00Z", "response_time": 60.0 }
    ]
}"#;

#[test]
fn payload_parses_system_components_and_history() {
    let snapshot = StatusSnapshot::from_json_str(PAYLOAD).expect("parse payload");

    assert_eq!(snapshot.system, ServiceStatus::Operational);
    assert_eq!(snapshot.history.sample_count(), 2);
    assert!(snapshot.history.has_gap_markers());
    assert_eq!(snapshot.history.gap_markers().len(), 1);

    let api_core = &snapshot.components["API Core"];
    assert_eq!(api_core.status, ServiceStatus::Operational);
    assert_eq!(api_core.response_time_ms, Some(123.0));

    let database = &snapshot.components["Database"];
    assert_eq!(database.status, ServiceStatus::DegradedPerformance);
    assert_eq!(database.response_time_ms, None);
}

#[test]
fn components_keep_payload_order() {
    let snapshot = StatusSnapshot::from_json_str(PAYLOAD).expect("parse payload");

    let names: Vec<&str> = snapshot.components.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["API Core", "Database", "File Storage"]);
}

#[test]
fn malformed_history_entries_are_skipped_not_fatal() {
    let payload = r#"{
        "system": { "status": "operational" },
        "components": [],
        "history": [
            { "created_at": "2026-08-07T10:00:00Z", "response_time": 50.0 },
            { "created_at": "2026-08-07T10:05:00Z" },
            { "is_gap": true, "created_at": "2026-08-07T10:10:00Z" },
            { "created_at": "2026-08-07T10:15:00Z", "response_time": 60.0 }
        ]
    }"#;

    let snapshot = StatusSnapshot::from_json_str(payload).expect("parse payload");
    assert_eq!(snapshot.history.sample_count(), 2);
    assert!(!snapshot.history.has_gap_markers());
}

#[test]
fn missing_history_defaults_to_an_empty_series() {
    let payload = r#"{ "system": { "status": "offline" }, "components": [] }"#;

    let snapshot = StatusSnapshot::from_json_str(payload).expect("parse payload");
    assert!(snapshot.history.is_empty());
}

#[test]
fn invalid_payload_is_an_error() {
    assert!(StatusSnapshot::from_json_str("not json").is_err());
    assert!(StatusSnapshot::from_json_str(r#"{ "components": [] }"#).is_err());
}

#[test]
fn offline_fallback_degrades_a_cached_snapshot() {
    let cached = StatusSnapshot::from_json_str(PAYLOAD).expect("parse payload");
    let fallback = StatusSnapshot::offline_fallback(Some(cached));

    assert_eq!(fallback.system, ServiceStatus::Offline);
    assert_eq!(fallback.components.len(), 3);
    for health in fallback.components.values() {
        assert_eq!(health.status, ServiceStatus::Offline);
        assert_eq!(health.response_time_ms, None);
    }
    // Cached history is kept so the chart can still show stale data.
    assert_eq!(fallback.history.sample_count(), 2);
}

#[test]
fn offline_fallback_without_cache_uses_default_components() {
    let fallback = StatusSnapshot::offline_fallback(None);

    assert_eq!(fallback.system, ServiceStatus::Offline);
    let names: Vec<&str> = fallback.components.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["API Core", "Database", "File Storage", "Background Tasks"]
    );
    assert!(fallback.history.is_empty());
}

#[test]
fn status_labels_and_colors_are_stable() {
    assert_eq!(ServiceStatus::Operational.label(), "Operational");
    assert_eq!(ServiceStatus::MajorOutage.label(), "Major outage");
    assert!(ServiceStatus::Operational.is_operational());
    assert!(!ServiceStatus::Offline.is_operational());

    let health = ComponentHealth {
        status: ServiceStatus::PartialOutage,
        response_time_ms: Some(10.0),
    };
    health.status.indicator_color().validate().expect("valid color");
}

#[test]
fn status_serde_uses_snake_case() {
    let parsed: ServiceStatus = serde_json::from_str(r#""partial_outage""#).expect("parse");
    assert_eq!(parsed, ServiceStatus::PartialOutage);
    assert_eq!(
        serde_json::to_string(&ServiceStatus::DegradedPerformance).expect("serialize"),
        r#""degraded_performance""#
    );
}
