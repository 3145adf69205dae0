use super::*;
use serde_json::json;

fn app(value: Value) -> Application {
    Application::from_value(value).unwrap()
}

// ── Wrapper unwrapping ────────────────────────────────────────────────────

#[test]
fn test_wrapper_key_discarded() {
    let a = app(json!({
        "name": "Acme",
        "business_teams": [
            { "anything": { "name": "Payments" } },
            { "team_2": { "name": "Search" } }
        ]
    }));
    let names: Vec<&str> = a.business_teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Payments", "Search"]);
}

#[test]
fn test_full_nesting() {
    let a = app(json!({
        "name": "Acme",
        "business_teams": [{ "t": {
            "name": "Payments",
            "agents": [{ "a": {
                "name": "Refunder",
                "tools": [{ "x": {
                    "name": "Ledger",
                    "apis": [{ "p": {
                        "name": "Ping",
                        "method": "GET",
                        "endpoint": "/ping",
                        "payload": "{}",
                        "input_params": "none",
                        "output_params": "pong"
                    }}]
                }}]
            }}]
        }}]
    }));
    let api = &a.business_teams[0].agents[0].tools[0].apis[0];
    assert_eq!(api.name, "Ping");
    assert_eq!(api.method, "GET");
    assert_eq!(api.endpoint, "/ping");
    assert_eq!(api.payload, "{}");
    assert_eq!(api.input_params, "none");
    assert_eq!(api.output_params, "pong");
}

// ── Malformed entries ─────────────────────────────────────────────────────

#[test]
fn test_entry_without_name_dropped() {
    let a = app(json!({
        "name": "Acme",
        "business_teams": [
            { "t1": { "description": "no name" } },
            { "t2": { "name": "" } },
            { "t3": { "name": null } },
            { "t4": { "name": 0 } },
            { "t5": { "name": false } },
            { "t6": { "name": "Kept" } }
        ]
    }));
    assert_eq!(a.business_teams.len(), 1);
    assert_eq!(a.business_teams[0].name, "Kept");
}

#[test]
fn test_truthy_non_string_name_kept_as_text() {
    let a = app(json!({
        "name": 42,
        "business_teams": [
            { "t": { "name": 7 } },
            { "u": { "name": true } },
            { "v": { "name": "Ok" } }
        ]
    }));
    assert_eq!(a.name, "42");
    let names: Vec<&str> = a.business_teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["7", "true", "Ok"]);
}

#[test]
fn test_wrapper_without_inner_object_dropped() {
    let a = app(json!({
        "name": "Acme",
        "business_teams": [
            {},
            { "t": null },
            { "t": "Payments" },
            "Payments",
            42,
            { "t": { "name": "Kept" } }
        ]
    }));
    assert_eq!(a.business_teams.len(), 1);
}

#[test]
fn test_malformed_nested_entry_keeps_parent() {
    let a = app(json!({
        "name": "Acme",
        "business_teams": [{ "t": {
            "name": "Payments",
            "agents": [{ "a": { "tools": [] } }, { "b": { "name": "Real" } }]
        }}]
    }));
    let team = &a.business_teams[0];
    assert_eq!(team.agents.len(), 1);
    assert_eq!(team.agents[0].name, "Real");
}

#[test]
fn test_list_not_array_is_empty() {
    let a = app(json!({
        "name": "Acme",
        "business_teams": [{ "t": { "name": "Payments", "agents": "none" } }]
    }));
    assert!(a.business_teams[0].agents.is_empty());
    let b = app(json!({ "name": "Acme", "business_teams": null }));
    assert!(b.business_teams.is_empty());
}

// ── Optional fields ───────────────────────────────────────────────────────

#[test]
fn test_missing_optional_fields_default_empty() {
    let a = app(json!({
        "business_teams": [{ "t": { "name": "Payments", "agents": [{ "a": {
            "name": "Refunder", "tools": [{ "x": { "name": "Ledger", "apis": [{ "p": { "name": "Ping" } }] } }]
        }}]}}]
    }));
    assert_eq!(a.name, DEFAULT_APPLICATION_NAME);
    assert_eq!(a.description, "");
    let team = &a.business_teams[0];
    assert_eq!(team.description, "");
    assert!(team.id.is_none());
    let api = &team.agents[0].tools[0].apis[0];
    assert_eq!(api.method, "");
    assert_eq!(api.endpoint, "");
    assert_eq!(api.payload, "");
}

#[test]
fn test_empty_application_name_defaults() {
    let a = app(json!({ "name": "", "business_teams": [] }));
    assert_eq!(a.name, "Application");
    assert_eq!(app(json!({ "name": null })).name, "Application");
    assert_eq!(app(json!({ "name": 0 })).name, "Application");
}

#[test]
fn test_non_string_text_rendered_as_json() {
    let a = app(json!({
        "name": "Acme",
        "business_teams": [{ "t": { "name": "P", "agents": [{ "a": { "name": "A", "tools": [{ "x": {
            "name": "T",
            "apis": [{ "p": {
                "name": "Ping",
                "payload": { "id": 1 },
                "input_params": ["a", "b"],
                "method": null,
                "endpoint": 8080
            }}]
        }}]}}]}}]
    }));
    let api = &a.business_teams[0].agents[0].tools[0].apis[0];
    assert_eq!(api.payload, r#"{"id":1}"#);
    assert_eq!(api.input_params, r#"["a","b"]"#);
    assert_eq!(api.method, "");
    assert_eq!(api.endpoint, "8080");
}

#[test]
fn test_external_id_kept() {
    let a = app(json!({
        "name": "Acme",
        "id": "APP-1",
        "business_teams": [{ "t": { "name": "P", "id": 12 } }]
    }));
    assert_eq!(a.id.as_deref(), Some("APP-1"));
    assert_eq!(a.business_teams[0].id.as_deref(), Some("12"));
}

#[test]
fn test_unknown_fields_ignored() {
    let a = app(json!({
        "name": "Acme",
        "version": 3,
        "business_teams": [{ "t": { "name": "P", "owner": "ops", "colors": ["red"] } }]
    }));
    assert_eq!(a.business_teams[0].name, "P");
}

// ── Loader errors ─────────────────────────────────────────────────────────

#[test]
fn test_from_json_ok() {
    let a = Application::from_json(r#"{"name": "Acme", "business_teams": []}"#).unwrap();
    assert_eq!(a, Application::new("Acme"));
}

#[test]
fn test_not_json_rejected() {
    let err = Application::from_json("{ name: ").unwrap_err();
    assert!(matches!(err, LoadError::NotJson(_)));
}

#[test]
fn test_non_object_rejected() {
    let err = Application::from_json("[1, 2]").unwrap_err();
    match err {
        LoadError::NotAnObject { found } => assert_eq!(found, "an array"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(Application::from_json("null").is_err());
    assert!(Application::from_json("\"Acme\"").is_err());
}
