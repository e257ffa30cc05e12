use assert_json_diff::assert_json_eq;
use etna_client::model::requests::{LogDeclaration, TicketRequest};
use serde_json::json;

#[test]
fn test_log_declaration_serializes_with_nested_content() {
    let declaration = LogDeclaration::new(
        18,
        22,
        "2026-05-06 09:00",
        "2026-05-06 12:00",
        "worked on the parser",
    );

    assert_json_eq!(
        serde_json::to_value(&declaration).unwrap(),
        json!({
            "module": 18,
            "activity": 22,
            "declaration": {
                "start": "2026-05-06 09:00",
                "end": "2026-05-06 12:00",
                "content": "worked on the parser",
            },
        })
    );
}

#[test]
fn test_ticket_request_builder() {
    let ticket = TicketRequest::new("broken intranet", "nothing loads")
        .with_tags(vec!["intranet".to_string()])
        .with_users(vec!["test_u".to_string()]);

    assert_eq!(ticket.title, "broken intranet");
    assert_eq!(ticket.tags, vec!["intranet".to_string()]);

    assert_json_eq!(
        serde_json::to_value(&ticket).unwrap(),
        json!({
            "title": "broken intranet",
            "message": "nothing loads",
            "tags": ["intranet"],
            "users": ["test_u"],
        })
    );
}

#[test]
fn test_ticket_request_defaults_to_empty_lists() {
    let ticket = TicketRequest::new("title", "message");
    assert!(ticket.tags.is_empty());
    assert!(ticket.users.is_empty());
}
