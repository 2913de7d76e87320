//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use roster_cli::logging::default_directive;
use roster_cli::pipeline::{export, prepare};
use roster_model::{ExportReadiness, Severity};
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;

const CLIENTS: &str = "ClientID,ClientName,PriorityLevel,RequestedTaskIDs,GroupTag,AttributesJSON\n\
                       C1,Acme,3,\"T1,T2\",GroupA,{}\n\
                       C2,Beta,2,T1,GroupB,{}\n";
const WORKERS: &str = "WorkerID,WorkerName,Skills,AvailableSlots,MaxLoadPerPhase,WorkerGroup,QualificationLevel\n\
                       W1,Ada,\"welding,wiring\",\"[1,2,3]\",2,Alpha,3\n\
                       W2,Bo,painting,\"[2,3]\",1,Beta,2\n";
const TASKS: &str = "TaskID,TaskName,Category,Duration,RequiredSkills,PreferredPhases,MaxConcurrent\n\
                     T1,Weld,Build,2,welding,1-2,1\n\
                     T2,Paint,Finish,1,painting,[3],1\n";

fn data_folder(clients: &str, workers: &str, tasks: &str) -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "clients.csv", clients);
    write(temp.path(), "workers.csv", workers);
    write(temp.path(), "tasks.csv", tasks);
    temp
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

#[test]
fn clean_folder_is_ready() {
    let temp = data_folder(CLIENTS, WORKERS, TASKS);
    let prepared = prepare(temp.path(), None).expect("prepare");
    assert_eq!(prepared.snapshot.total_records(), 6);
    assert_eq!(prepared.summary.total_errors(), 0, "{:#?}", prepared.summary.errors());
    assert_eq!(prepared.readiness(), ExportReadiness::Ready);
}

#[test]
fn errors_block_export_unless_allowed() {
    let clients = format!("{CLIENTS}C3,Gamma,9,T9,GroupC,{{}}\n");
    let temp = data_folder(&clients, WORKERS, TASKS);
    let out = temp.path().join("out");

    let prepared = prepare(temp.path(), None).expect("prepare");
    assert_eq!(prepared.readiness(), ExportReadiness::Blocked);
    let messages: Vec<_> = prepared
        .summary
        .errors()
        .iter()
        .map(|issue| issue.message.as_str())
        .collect();
    assert!(messages.contains(&"PriorityLevel must be 1-5 (got 9)"));
    assert!(messages.contains(&"Requested TaskID T9 not found"));

    let err = export(prepared, &out, false).expect_err("blocked");
    assert!(err.to_string().contains("--allow-errors"));
    assert!(!out.exists());

    let prepared = prepare(temp.path(), None).expect("prepare");
    let paths = export(prepared, &out, true).expect("export with errors");
    assert!(paths.bundle.is_file());
}

#[test]
fn unreadable_numbers_surface_as_errors() {
    let tasks = format!("{TASKS}T3,Audit,Check,long,wiring,,1\n");
    let temp = data_folder(CLIENTS, WORKERS, &tasks);
    let prepared = prepare(temp.path(), None).expect("prepare");

    assert_eq!(prepared.snapshot.coercions.len(), 1);
    let t3: Vec<_> = prepared
        .summary
        .for_entity_id(roster_model::EntityKind::Task, "T3")
        .collect();
    assert!(t3.iter().any(|issue| {
        issue.severity == Severity::Error && issue.message == "Duration must be >= 1 (got 0)"
    }));
}

#[test]
fn folder_config_is_carried_into_the_bundle() {
    let temp = data_folder(CLIENTS, WORKERS, TASKS);
    write(
        temp.path(),
        "roster.toml",
        "[weights]\nfairness = 3.0\n\n[[rules]]\nid = \"r1\"\ntype = \"coRun\"\nname = \"pair\"\npriority = 1\n",
    );
    let out = temp.path().join("out");
    let prepared = prepare(temp.path(), None).expect("prepare");
    assert_eq!(prepared.config.rules.len(), 1);

    let paths = export(prepared, &out, false).expect("export");
    let rules: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.rules).expect("read rules"))
            .expect("parse rules");
    assert_eq!(rules[0]["id"], "r1");
}

#[test]
fn missing_sheet_is_reported_with_context() {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "clients.csv", CLIENTS);
    write(temp.path(), "tasks.csv", TASKS);
    let err = prepare(temp.path(), None).expect_err("no workers");
    let text = format!("{err:#}");
    assert!(text.contains("discover sheets"));
    assert!(text.contains("no worker sheet found"));
}

#[test]
fn empty_sheets_have_nothing_to_export() {
    let temp = data_folder("ClientID\n", "WorkerID\n", "TaskID\n");
    let prepared = prepare(temp.path(), None).expect("prepare");
    assert_eq!(prepared.readiness(), ExportReadiness::NoData);
    let err = export(prepared, &temp.path().join("out"), true).expect_err("no data");
    assert!(err.to_string().contains("no records"));
}

#[test]
fn default_log_filter_is_scoped() {
    assert!(default_directive(LevelFilter::INFO).contains("roster_ingest=info"));
}
