//! Tests for the validation engine.

use roster_model::{Client, EntityKind, Severity, Task, ValidationIssue, Worker};
use roster_validate::{ValidationEngine, qualified_worker_count, validate_all};

fn client(id: &str, priority: i64, requested: &str) -> Client {
    Client {
        client_id: id.to_string(),
        client_name: format!("Client {id}"),
        priority_level: priority,
        requested_task_ids: requested.to_string(),
        group_tag: "GroupA".to_string(),
        attributes_json: "{}".to_string(),
    }
}

fn worker(id: &str, skills: &str, slots: &str, max_load: i64) -> Worker {
    Worker {
        worker_id: id.to_string(),
        worker_name: format!("Worker {id}"),
        skills: skills.to_string(),
        available_slots: slots.to_string(),
        max_load_per_phase: max_load,
        worker_group: "GroupA".to_string(),
        qualification_level: 3,
    }
}

fn task(id: &str, required: &str, duration: i64, max_concurrent: i64) -> Task {
    Task {
        task_id: id.to_string(),
        task_name: format!("Task {id}"),
        category: "Build".to_string(),
        duration,
        required_skills: required.to_string(),
        preferred_phases: "[1,2]".to_string(),
        max_concurrent,
    }
}

fn clean_clients() -> Vec<Client> {
    vec![client("C1", 3, "T1,T2"), client("C2", 2, "T2")]
}

fn clean_workers() -> Vec<Worker> {
    vec![
        worker("W1", "welding,painting", "[1,2,3]", 2),
        worker("W2", "painting,wiring", "[1,2]", 2),
    ]
}

fn clean_tasks() -> Vec<Task> {
    vec![task("T1", "welding", 2, 1), task("T2", "painting", 1, 2)]
}

fn by_field<'a>(issues: &'a [ValidationIssue], field: &str) -> Vec<&'a ValidationIssue> {
    issues
        .iter()
        .filter(|issue| issue.field.as_deref() == Some(field))
        .collect()
}

#[test]
fn clean_snapshot_has_no_findings() {
    let summary = validate_all(&clean_clients(), &clean_workers(), &clean_tasks());
    assert!(summary.is_clean(), "unexpected findings: {summary:#?}");
}

#[test]
fn empty_snapshot_has_no_findings() {
    let summary = validate_all(&[], &[], &[]);
    assert!(summary.is_clean());
}

#[test]
fn validate_all_is_idempotent() {
    let mut clients = clean_clients();
    clients.push(client("C1", 9, "T7"));
    let workers = clean_workers();
    let tasks = clean_tasks();
    let engine = ValidationEngine::new(&clients, &workers, &tasks);
    let first = engine.validate_all();
    let second = engine.validate_all();
    assert_eq!(first, second);
    assert!(first.has_errors());
}

#[test]
fn duplicate_client_id_emits_one_error_per_repeat() {
    let clients = vec![client("C1", 3, ""), client("C1", 3, "")];
    let summary = validate_all(&clients, &clean_workers(), &clean_tasks());
    let dups = by_field(summary.errors(), "ClientID");
    assert_eq!(dups.len(), 1);
    assert_eq!(dups[0].entity_id, "C1");
    assert_eq!(dups[0].entity, EntityKind::Client);
    assert_eq!(dups[0].row, Some(2));
    assert_eq!(summary.total_errors(), 1);
}

#[test]
fn triple_duplicate_worker_id_emits_two_errors() {
    let workers = vec![
        worker("W1", "welding,painting", "[1,2]", 1),
        worker("W1", "welding,painting", "[1,2]", 1),
        worker("W1", "welding,painting", "[1,2]", 1),
    ];
    let summary = validate_all(&clean_clients(), &workers, &clean_tasks());
    let dups = by_field(summary.errors(), "WorkerID");
    assert_eq!(dups.len(), 2);
    assert_eq!(dups[0].message, "Duplicate WorkerID: W1");
}

#[test]
fn duplicate_task_id_detected() {
    let mut tasks = clean_tasks();
    tasks.push(task("T2", "painting", 1, 1));
    let summary = validate_all(&clean_clients(), &clean_workers(), &tasks);
    assert_eq!(by_field(summary.errors(), "TaskID").len(), 1);
}

#[test]
fn priority_level_bounds() {
    for (priority, expected) in [(0, 1), (6, 1), (1, 0), (5, 0), (-3, 1)] {
        let clients = vec![client("C1", priority, "")];
        let summary = validate_all(&clients, &[], &[]);
        assert_eq!(
            by_field(summary.errors(), "PriorityLevel").len(),
            expected,
            "priority {priority}"
        );
    }
}

#[test]
fn priority_error_mentions_value() {
    let summary = validate_all(&[client("C9", 6, "")], &[], &[]);
    let issue = &by_field(summary.errors(), "PriorityLevel")[0];
    assert!(issue.message.contains('6'));
    assert_eq!(issue.row, Some(1));
    assert_eq!(issue.entity_id, "C9");
    assert!(issue.suggestion.is_some());
}

#[test]
fn attributes_json_must_parse() {
    let mut bad = client("C1", 3, "");
    bad.attributes_json = "{bad json".to_string();
    let summary = validate_all(&[bad], &[], &[]);
    assert_eq!(summary.total_errors(), 1);
    assert_eq!(summary.errors()[0].field.as_deref(), Some("AttributesJSON"));

    let summary = validate_all(&[client("C1", 3, "")], &[], &[]);
    assert_eq!(summary.total_errors(), 0);
}

#[test]
fn available_slots_with_non_numeric_element_is_an_error() {
    let workers = vec![worker("W1", "welding", "[1,2,abc]", 1)];
    let summary = validate_all(&[], &workers, &[]);
    let slots = by_field(summary.errors(), "AvailableSlots");
    assert_eq!(slots.len(), 1);
    // the slot warning is skipped when the field failed to parse
    assert_eq!(summary.total_warnings(), 0);
}

#[test]
fn available_slots_with_string_element_is_an_error() {
    let workers = vec![worker("W1", "welding", r#"[1,2,"3"]"#, 1)];
    let summary = validate_all(&[], &workers, &[]);
    assert_eq!(by_field(summary.errors(), "AvailableSlots").len(), 1);
}

#[test]
fn max_load_and_task_bounds() {
    let workers = vec![worker("W1", "welding", "[1]", 0)];
    let tasks = vec![task("T1", "welding", 0, 0)];
    let summary = validate_all(&[], &workers, &tasks);
    assert_eq!(by_field(summary.errors(), "MaxLoadPerPhase").len(), 1);
    assert_eq!(by_field(summary.errors(), "Duration").len(), 1);
    assert_eq!(by_field(summary.errors(), "MaxConcurrent").len(), 1);
}

#[test]
fn unknown_requested_task_is_reported_once() {
    let clients = vec![client("C1", 3, "T1,T99")];
    let summary = validate_all(&clients, &clean_workers(), &clean_tasks());
    let refs = by_field(summary.errors(), "RequestedTaskIDs");
    assert_eq!(refs.len(), 1);
    assert!(refs[0].message.contains("T99"));
    assert_eq!(refs[0].entity, EntityKind::Client);
    assert_eq!(refs[0].entity_id, "C1");
}

#[test]
fn requested_tasks_are_trimmed_and_blanks_ignored() {
    let clients = vec![client("C1", 3, " T1 , ,T2,")];
    let summary = validate_all(&clients, &clean_workers(), &clean_tasks());
    assert_eq!(summary.total_errors(), 0);
}

#[test]
fn missing_skill_is_reported_per_skill() {
    let workers = vec![worker("W1", "painting", "[1,2]", 1)];
    let tasks = vec![task("T1", "welding", 1, 1)];
    let summary = validate_all(&[], &workers, &tasks);
    let skills = by_field(summary.errors(), "RequiredSkills");
    assert_eq!(skills.len(), 1);
    assert!(skills[0].message.contains("welding"));

    let workers = vec![worker("W1", "painting, welding", "[1,2]", 1)];
    let summary = validate_all(&[], &workers, &tasks);
    assert!(by_field(summary.errors(), "RequiredSkills").is_empty());
}

#[test]
fn slot_count_below_max_load_warns() {
    let summary = validate_all(&[], &[worker("W1", "welding", "[1,2]", 5)], &[]);
    let warnings = by_field(summary.warnings(), "MaxLoadPerPhase");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains('2'));
    assert!(warnings[0].message.contains('5'));

    let summary = validate_all(&[], &[worker("W1", "welding", "[1,2]", 2)], &[]);
    assert!(summary.warnings().is_empty());
}

#[test]
fn blank_client_name_warns() {
    let mut unnamed = client("C1", 3, "");
    unnamed.client_name = "   ".to_string();
    let summary = validate_all(&[unnamed], &[], &[]);
    assert_eq!(by_field(summary.warnings(), "ClientName").len(), 1);
}

#[test]
fn preferred_phases_warning_trigger() {
    let cases = [
        ("[1,2]", 0),
        ("1-3", 0),
        ("", 0),
        ("\"later\"", 0),
        ("1,2,3", 1),
        ("phase one", 1),
        (" 1-3", 1),
    ];
    for (raw, expected) in cases {
        let mut t = task("T1", "welding", 1, 1);
        t.preferred_phases = raw.to_string();
        let summary = validate_all(&[], &[worker("W1", "welding", "[1]", 1)], &[t]);
        assert_eq!(
            by_field(summary.warnings(), "PreferredPhases").len(),
            expected,
            "raw {raw:?}"
        );
    }
}

#[test]
fn max_concurrent_above_qualified_workers_warns() {
    let workers = clean_workers();
    let tasks = vec![task("T1", "welding", 1, 3)];
    let summary = validate_all(&[], &workers, &tasks);
    let warnings = by_field(summary.warnings(), "MaxConcurrent");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("(1)"));
}

#[test]
fn qualified_workers_match_by_substring() {
    let workers = vec![
        worker("W1", "welding", "[1]", 1),
        worker("W2", "arc-welding", "[1]", 1),
        worker("W3", "painting", "[1]", 1),
    ];
    assert_eq!(qualified_worker_count(&task("T1", "welding", 1, 1), &workers), 2);
    assert_eq!(
        qualified_worker_count(&task("T1", "weld, paint", 1, 1), &workers),
        3
    );
    assert_eq!(qualified_worker_count(&task("T1", "", 1, 1), &workers), 3);
    // a trailing comma adds no blank skill that would match everyone
    assert_eq!(qualified_worker_count(&task("T1", "welding,", 1, 1), &workers), 2);
}

#[test]
fn busy_high_priority_client_is_noted() {
    let clients = vec![client("C1", 5, "T1,T2,T1,T2,T1,T2")];
    let summary = validate_all(&clients, &clean_workers(), &clean_tasks());
    assert_eq!(summary.total_info(), 1);
    assert!(summary.info()[0].message.contains('6'));

    let clients = vec![client("C1", 5, "T1,T2,T1,T2,T1")];
    let summary = validate_all(&clients, &clean_workers(), &clean_tasks());
    assert_eq!(summary.total_info(), 0);

    let clients = vec![client("C1", 3, "T1,T2,T1,T2,T1,T2")];
    let summary = validate_all(&clients, &clean_workers(), &clean_tasks());
    assert_eq!(summary.total_info(), 0);
}

#[test]
fn generalist_worker_and_long_task_are_noted() {
    let workers = vec![worker("W1", "a,b,c,d,e,f", "[1]", 1)];
    let tasks = vec![task("T1", "a", 6, 1), task("T2", "a", 5, 1)];
    let summary = validate_all(&[], &workers, &tasks);
    let info = summary.info();
    assert_eq!(info.len(), 2);
    assert_eq!(info[0].entity, EntityKind::Worker);
    assert_eq!(info[1].entity, EntityKind::Task);
    assert_eq!(info[1].entity_id, "T1");
}

#[test]
fn errors_follow_pass_order() {
    let clients = vec![client("C1", 0, "T99")];
    let workers = vec![worker("W1", "welding", "oops", 1)];
    let tasks = vec![task("T1", "plumbing", 0, 1)];
    let summary = validate_all(&clients, &workers, &tasks);
    let fields: Vec<Option<&str>> = summary
        .errors()
        .iter()
        .map(|issue| issue.field.as_deref())
        .collect();
    assert_eq!(
        fields,
        vec![
            Some("PriorityLevel"),
            Some("AvailableSlots"),
            Some("Duration"),
            Some("RequestedTaskIDs"),
            Some("RequiredSkills"),
        ]
    );
    assert!(summary.errors().iter().all(|e| e.severity == Severity::Error));
}

#[test]
fn totals_match_bucket_lengths() {
    let clients = vec![client("C1", 0, "T99"), client("C1", 5, "a,b,c,d,e,f")];
    let workers = vec![worker("W1", "welding", "[1]", 4)];
    let tasks = vec![task("T1", "plumbing", 9, 3)];
    let summary = validate_all(&clients, &workers, &tasks);
    assert_eq!(summary.total_errors(), summary.errors().len());
    assert_eq!(summary.total_warnings(), summary.warnings().len());
    assert_eq!(summary.total_info(), summary.info().len());
}
