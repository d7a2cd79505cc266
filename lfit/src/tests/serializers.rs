use super::repressilator;
use crate::{
    parse_program, parse_transitions, program_from_json, to_json, transitions_to_csv, Engine,
    LfitError, LogicProgram, ResourceLimits, Transition,
};

#[test]
fn test_csv_header_and_rows() {
    let transitions = vec![
        Transition::new([0, 1], [1, 1]),
        Transition::new([2, 0], [0, 0]),
    ];
    assert_eq!(
        transitions_to_csv(&transitions),
        "x0,x1,y0,y1\n0,1,1,1\n2,0,0,0\n"
    );
}

#[test]
fn test_csv_of_no_transitions_is_empty() {
    assert_eq!(transitions_to_csv(&[]), "");
}

#[test]
fn test_csv_reads_back() {
    let transitions = repressilator().generate_all_transitions().unwrap();
    let csv = transitions_to_csv(&transitions);
    let parsed = parse_transitions(&csv, None, &ResourceLimits::default()).unwrap();
    assert_eq!(parsed, transitions);
}

#[test]
fn test_program_json_reads_back() {
    let program = repressilator();
    let json = to_json(&program).unwrap();
    assert!(json.contains("\"variables\""));
    assert_eq!(program_from_json(&json).unwrap(), program);
}

#[test]
fn test_report_json() {
    let benchmark = repressilator();
    let transitions = benchmark.generate_all_transitions().unwrap();
    let report = Engine::new().learn(benchmark.domain(), &transitions).unwrap();
    let json = to_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["algorithm"], "heuristic_minimal");
    assert_eq!(value["completeness"]["status"], "complete");
    assert_eq!(value["targets"].as_array().unwrap().len(), 6);
}

#[test]
fn test_program_json_rejects_out_of_domain_rules() {
    let program = repressilator();
    let mut value: serde_json::Value = serde_json::from_str(&to_json(&program).unwrap()).unwrap();
    value["rules"][0]["head_value"] = serde_json::json!(5);
    let err = program_from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, LfitError::DomainViolation { .. }));
}

#[test]
fn test_program_json_rejects_malformed_input() {
    let err = program_from_json("{\"domain\": 3}").unwrap_err();
    assert!(matches!(err, LfitError::Serialization(_)));
}

#[test]
fn test_program_json_rejects_empty_domain() {
    let json = r#"{"domain":{"variables":[],"values":[]},"rules":[],"delay":1}"#;
    let err = program_from_json(json).unwrap_err();
    assert!(matches!(err, LfitError::DomainViolation { .. }));
    let _: LogicProgram = serde_json::from_str(json).unwrap();
}

#[test]
fn test_program_json_rejects_short_delay() {
    let program = parse_program(
        "VAR a 0 1\na(0,T) :- a(1,T-2).",
        None,
        &ResourceLimits::default(),
    )
    .unwrap();
    assert_eq!(program.delay(), 2);
    let mut value: serde_json::Value = serde_json::from_str(&to_json(&program).unwrap()).unwrap();
    assert_eq!(program_from_json(&value.to_string()).unwrap(), program);

    for delay in [1, 0] {
        value["delay"] = serde_json::json!(delay);
        let err = program_from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, LfitError::DomainViolation { .. }));
    }

    value["delay"] = serde_json::json!(3);
    assert_eq!(program_from_json(&value.to_string()).unwrap().delay(), 3);
}
