use super::*;

// =============================================================
// BoardId
// =============================================================

#[test]
fn board_id_accepts_numeric_ids() {
    let id: BoardId = serde_json::from_value(serde_json::json!(42)).unwrap();
    assert_eq!(id.as_str(), "42");
}

#[test]
fn board_id_accepts_string_ids() {
    let id: BoardId = serde_json::from_value(serde_json::json!("6f1c-aa")).unwrap();
    assert_eq!(id, BoardId::from("6f1c-aa"));
}

#[test]
fn board_id_rejects_empty_and_non_scalar_values() {
    assert!(serde_json::from_value::<BoardId>(serde_json::json!("")).is_err());
    assert!(serde_json::from_value::<BoardId>(serde_json::json!(null)).is_err());
    assert!(serde_json::from_value::<BoardId>(serde_json::json!({"id": 1})).is_err());
}

#[test]
fn board_id_displays_raw_text() {
    assert_eq!(BoardId::from(7).to_string(), "7");
}

// =============================================================
// Board / NewBoard
// =============================================================

#[test]
fn board_deserializes_pascal_case_fields() {
    let board: Board = serde_json::from_value(serde_json::json!({
        "Id": 3,
        "Name": "Roadmap",
        "IsActive": false
    }))
    .unwrap();
    assert_eq!(board.id, BoardId::from(3));
    assert_eq!(board.name, "Roadmap");
    assert!(!board.is_active);
}

#[test]
fn board_is_active_defaults_to_true_when_missing() {
    let board: Board = serde_json::from_value(serde_json::json!({ "Id": 1, "Name": "Ops" })).unwrap();
    assert!(board.is_active);
}

#[test]
fn new_board_serializes_expected_payload() {
    let payload = serde_json::to_value(NewBoard::active("Sprint 1")).unwrap();
    assert_eq!(payload, serde_json::json!({ "Name": "Sprint 1", "IsActive": true }));
}

// =============================================================
// Column
// =============================================================

#[test]
fn column_keeps_unknown_display_fields() {
    let column: Column = serde_json::from_value(serde_json::json!({
        "Id": 10,
        "BoardId": 3,
        "Name": "Doing",
        "Position": 2
    }))
    .unwrap();
    assert_eq!(column.id.as_deref(), Some("10"));
    assert_eq!(column.board_id, BoardId::from(3));
    assert_eq!(column.name.as_deref(), Some("Doing"));
    assert_eq!(column.extra.get("Position"), Some(&serde_json::json!(2)));
}

#[test]
fn column_tolerates_missing_id_and_name() {
    let column: Column = serde_json::from_value(serde_json::json!({ "BoardId": "b-1", "Id": null })).unwrap();
    assert!(column.id.is_none());
    assert!(column.name.is_none());
    assert!(column.extra.is_empty());
}

#[test]
fn column_requires_board_id() {
    assert!(serde_json::from_value::<Column>(serde_json::json!({ "Name": "Todo" })).is_err());
}

// =============================================================
// UserRecord
// =============================================================

#[test]
fn user_record_reads_name_and_keeps_other_fields() {
    let record: UserRecord = serde_json::from_str(r#"{"name":"Ana Souza","email":"ana@example.com"}"#).unwrap();
    assert_eq!(record.name.as_deref(), Some("Ana Souza"));
    assert_eq!(record.extra.get("email"), Some(&serde_json::json!("ana@example.com")));
}

#[test]
fn user_record_without_name_is_valid() {
    let record: UserRecord = serde_json::from_str("{}").unwrap();
    assert!(record.name.is_none());
}
