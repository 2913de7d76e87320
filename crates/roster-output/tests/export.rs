//! Tests for export writing.

use std::fs;

use roster_model::{
    BusinessRule, Client, EntityKind, ExportBundle, PrioritizationWeights, RuleType, Severity,
    Task, ValidationIssue, ValidationSummary, Worker,
};
use roster_output::{OutputError, write_entity_csv, write_export};
use tempfile::TempDir;

fn sample_bundle() -> ExportBundle {
    let clients = vec![Client {
        client_id: "C1".to_string(),
        client_name: "Acme, Inc".to_string(),
        priority_level: 3,
        requested_task_ids: "T1,T2".to_string(),
        group_tag: "GroupA".to_string(),
        attributes_json: r#"{"tier":"gold"}"#.to_string(),
    }];
    let workers = vec![Worker {
        worker_id: "W1".to_string(),
        worker_name: "Ada".to_string(),
        skills: "welding".to_string(),
        available_slots: "[1,2]".to_string(),
        max_load_per_phase: 2,
        worker_group: "Alpha".to_string(),
        qualification_level: 3,
    }];
    let tasks = vec![Task {
        task_id: "T1".to_string(),
        task_name: "Weld".to_string(),
        category: "Build".to_string(),
        duration: 2,
        required_skills: "welding".to_string(),
        preferred_phases: "1-2".to_string(),
        max_concurrent: 1,
    }];
    let summary = ValidationSummary::from_buckets(
        vec![],
        vec![ValidationIssue::new(
            Severity::Warning,
            EntityKind::Client,
            "C1",
            "ClientName is empty",
        )],
        vec![],
    );
    ExportBundle::new(clients, workers, tasks, summary)
        .with_rules(vec![BusinessRule::new("r1", RuleType::CoRun, 1)])
        .with_weights(PrioritizationWeights::fair_distribution())
}

#[test]
fn export_writes_every_file() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("nested").join("export");
    let paths = write_export(&sample_bundle(), &out).expect("write export");

    for path in paths.all() {
        assert!(path.is_file(), "missing {}", path.display());
    }
    assert_eq!(paths.bundle, out.join("bundle.json"));
}

#[test]
fn client_csv_uses_sheet_headers_and_quotes() {
    let temp = TempDir::new().expect("temp dir");
    let paths = write_export(&sample_bundle(), temp.path()).expect("write export");

    let text = fs::read_to_string(&paths.clients).expect("read clients");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("ClientID,ClientName,PriorityLevel,RequestedTaskIDs,GroupTag,AttributesJSON")
    );
    assert_eq!(
        lines.next(),
        Some(r#"C1,"Acme, Inc",3,"T1,T2",GroupA,"{""tier"":""gold""}""#)
    );
}

#[test]
fn bundle_json_has_camel_case_sections() {
    let temp = TempDir::new().expect("temp dir");
    let paths = write_export(&sample_bundle(), temp.path()).expect("write export");

    let text = fs::read_to_string(&paths.bundle).expect("read bundle");
    let json: serde_json::Value = serde_json::from_str(&text).expect("parse bundle");
    assert!(json["generatedAt"].is_string());
    assert_eq!(json["workers"][0]["WorkerID"], "W1");
    assert_eq!(json["rules"][0]["type"], "coRun");
    assert_eq!(json["validationSummary"]["totalWarnings"], 1);
    assert_eq!(json["weights"]["fairness"], 0.4);

    let restored: ExportBundle = serde_json::from_str(&text).expect("deserialize bundle");
    assert_eq!(restored.tasks, sample_bundle().tasks);
}

#[test]
fn validation_file_holds_the_summary() {
    let temp = TempDir::new().expect("temp dir");
    let paths = write_export(&sample_bundle(), temp.path()).expect("write export");

    let text = fs::read_to_string(&paths.validation).expect("read report");
    let summary: ValidationSummary = serde_json::from_str(&text).expect("parse report");
    assert_eq!(summary.total_warnings(), 1);
    assert_eq!(summary.warnings()[0].entity_id, "C1");
}

#[test]
fn empty_records_write_an_empty_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("tasks.csv");
    write_entity_csv::<Task>(&[], &path).expect("write csv");
    assert_eq!(fs::read_to_string(&path).expect("read csv"), "");
}

#[test]
fn unwritable_directory_is_reported() {
    let temp = TempDir::new().expect("temp dir");
    let blocker = temp.path().join("file");
    fs::write(&blocker, "x").expect("write blocker");

    let err = write_export(&sample_bundle(), &blocker.join("out")).expect_err("not a dir");
    assert!(matches!(err, OutputError::CreateDir { .. }));
}
