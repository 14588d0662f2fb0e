use fpv_api::{
    AddPartResponse, BuildPathRequest, BuildPathResponse, CleanResponse, RemovePartResponse,
    Service,
};
use serde_json::json;

#[test]
fn service_names_are_lowercase_on_the_wire() {
    for service in Service::KNOWN {
        let encoded = serde_json::to_value(&service).expect("serialize service");
        assert_eq!(encoded, json!(service.as_str()));
    }
}

#[test]
fn service_parses_case_insensitively() {
    assert_eq!(Service::from("Windows"), Service::Windows);
    assert_eq!(Service::from(" sharepoint "), Service::Sharepoint);
    assert_eq!("linux".parse::<Service>(), Ok(Service::Linux));
}

#[test]
fn unlisted_service_round_trips_verbatim() {
    let service = Service::from("amiga");
    assert_eq!(service, Service::Other("amiga".to_string()));
    assert_eq!(serde_json::to_value(&service).expect("serialize"), json!("amiga"));

    let decoded: Service = serde_json::from_value(json!("MacOS")).expect("deserialize");
    assert_eq!(decoded, Service::Macos);
}

#[test]
fn null_lists_read_as_empty() {
    let response: AddPartResponse = serde_json::from_value(json!({
        "success": true,
        "updated_path": "C:\\a",
        "new_errors": null,
        "all_errors": null,
        "path_parts": null,
        "error": null
    }))
    .expect("decode add response with null lists");
    assert!(response.new_errors.is_empty());
    assert!(response.all_errors.is_empty());
    assert!(response.path_parts.is_empty());

    let response: RemovePartResponse = serde_json::from_value(json!({
        "success": true,
        "remaining_errors": null,
        "path_parts": ["a"]
    }))
    .expect("decode remove response with null errors");
    assert!(response.remaining_errors.is_empty());

    let response: BuildPathResponse = serde_json::from_value(json!({
        "success": true,
        "step_errors": [{"step": 1, "part": "a", "issues": null}],
        "all_errors": null
    }))
    .expect("decode build response with null issues");
    assert!(response.step_errors[0].issues.is_empty());
}

#[test]
fn add_response_keeps_opaque_error_records() {
    let response: AddPartResponse = serde_json::from_value(json!({
        "success": true,
        "updated_path": "C:\\Us|ers",
        "new_errors": [{"issue": "bad char", "part_index": 0}, "free-form", 7],
        "all_errors": [{"issue": "bad char", "part_index": 0}, "free-form", 7],
        "path_parts": ["Us|ers"],
        "error": null
    }))
    .expect("decode add response");

    assert_eq!(response.new_errors.len(), 3);
    assert_eq!(response.new_errors[1], json!("free-form"));
    assert_eq!(response.error, None);
}

#[test]
fn failure_response_without_parts_still_decodes() {
    let response: RemovePartResponse = serde_json::from_value(json!({
        "success": false,
        "updated_path": "",
        "remaining_errors": [],
        "error": "list index out of range"
    }))
    .expect("decode remove failure");

    assert!(!response.success);
    assert!(response.path_parts.is_empty());
    assert_eq!(response.removed_part, None);
    assert_eq!(response.error.as_deref(), Some("list index out of range"));
}

fn decode_clean(body: serde_json::Value) -> CleanResponse {
    serde_json::from_value(body).expect("decode clean response")
}

#[test]
fn empty_error_string_is_distinct_from_absent() {
    let present = decode_clean(json!({"success": false, "error": ""}));
    let absent = decode_clean(json!({"success": false}));

    assert_eq!(present.error.as_deref(), Some(""));
    assert_eq!(absent.error, None);
}

#[test]
fn build_request_omits_absent_separator() {
    let request = BuildPathRequest {
        service: Service::Macos,
        root_path: "/Users".to_string(),
        path_parts: vec!["me".to_string(), "notes.txt".to_string()],
        relative: false,
        file_added: true,
        sep: None,
    };

    let encoded = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        encoded,
        json!({
            "service": "macos",
            "root_path": "/Users",
            "path_parts": ["me", "notes.txt"],
            "relative": false,
            "file_added": true
        })
    );
}

#[test]
fn build_response_decodes_step_errors() {
    let response: BuildPathResponse = serde_json::from_value(json!({
        "success": true,
        "final_path": "/Users/me/notes.txt",
        "all_errors": [],
        "step_errors": [
            {"step": 1, "part": "me", "issues": []},
            {"step": 2, "part": "notes.txt", "issues": []}
        ],
        "path_parts": ["Users", "me", "notes.txt"],
        "error": null
    }))
    .expect("decode build response");

    assert_eq!(response.step_errors.len(), 2);
    assert_eq!(response.step_errors[1].step, 2);
    assert_eq!(response.step_errors[1].part, "notes.txt");
}
