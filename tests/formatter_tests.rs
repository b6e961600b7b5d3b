//! Response contract integration tests
//!
//! Exercises the formatter, the legacy projection, the display dump and
//! the serialized wire shape together.

use procgate::driver::{OperationMetadata, RawReply, Row, Value};
use procgate::response::{
    format_for_display, format_generic, format_modify, to_legacy_shape, StatusCode,
};

fn sample_three_part(error_id: i64) -> RawReply {
    RawReply::ThreePart {
        data: vec![Row::from_pairs(vec![
            ("id", Value::Int(1)),
            ("name", Value::Text("shoes".into())),
        ])],
        feedback: vec![Row::from_pairs(vec![
            ("return_id", Value::Int(5)),
            ("message", Value::Text("ok".into())),
            ("error_id", Value::Int(error_id)),
        ])],
        meta: OperationMetadata {
            field_count: 2,
            affected_rows: 1,
            ..Default::default()
        },
    }
}

#[test]
fn test_generic_success_contract() {
    let resp = format_generic(sample_three_part(0));
    assert!(resp.success);
    assert_eq!(resp.status_code, StatusCode::Success);
    assert_eq!(resp.record_count, 1);
    assert_eq!(resp.feedback.as_ref().unwrap().return_id, 5);
}

#[test]
fn test_generic_procedure_error_contract() {
    let resp = format_generic(sample_three_part(7));
    assert!(!resp.success);
    assert_eq!(resp.status_code, StatusCode::ProcedureError);
    assert_eq!(resp.message, "ok");
    assert_eq!(resp.record_count, 1);
}

#[test]
fn test_success_implies_success_code() {
    let responses = [
        format_generic(sample_three_part(0)),
        format_generic(sample_three_part(7)),
        format_generic(RawReply::RowSet(vec![])),
    ];
    for resp in &responses {
        if resp.success {
            assert_eq!(resp.status_code, StatusCode::Success);
        } else {
            assert_ne!(resp.status_code, StatusCode::Success);
        }
    }
}

#[test]
fn test_serialized_wire_shape() {
    let resp = format_generic(sample_three_part(0));
    let json = serde_json::to_value(&resp).unwrap();

    assert_eq!(json["success"], serde_json::json!(true));
    assert_eq!(json["statusCode"], serde_json::json!(200));
    assert_eq!(json["recordCount"], serde_json::json!(1));
    assert_eq!(json["data"][0]["id"], serde_json::json!(1));
    assert_eq!(json["data"][0]["name"], serde_json::json!("shoes"));
    assert_eq!(json["feedback"]["returnId"], serde_json::json!(5));
    assert_eq!(json["feedback"]["errorId"], serde_json::json!(0));
    assert_eq!(json["operationResult"]["affectedRows"], serde_json::json!(1));
}

#[test]
fn test_serialized_modify_shape() {
    let resp = format_modify(RawReply::Metadata(OperationMetadata {
        affected_rows: 2,
        insert_id: 41,
        ..Default::default()
    }));
    let json = serde_json::to_value(&resp).unwrap();

    assert_eq!(json["statusCode"], serde_json::json!(200));
    assert_eq!(json["recordCount"], serde_json::json!(2));
    assert_eq!(json["data"]["insertId"], serde_json::json!(41));
    assert_eq!(json["feedback"], serde_json::Value::Null);
}

#[test]
fn test_legacy_projection() {
    let legacy = to_legacy_shape(format_generic(sample_three_part(0)));
    assert_eq!(legacy.record_id, 5);
    assert_eq!(legacy.quantity, 1);
    assert_eq!(legacy.status_code, StatusCode::Success);

    let json = serde_json::to_value(&legacy).unwrap();
    assert_eq!(json["recordId"], serde_json::json!(5));
    assert_eq!(json["quantity"], serde_json::json!(1));
    assert_eq!(json["statusCode"], serde_json::json!(200));
}

#[test]
fn test_legacy_record_id_falls_back_to_first_row() {
    let reply = RawReply::ThreePart {
        data: vec![Row::from_pairs(vec![("id", Value::Int(33))])],
        feedback: vec![],
        meta: OperationMetadata::default(),
    };
    let legacy = to_legacy_shape(format_generic(reply));
    assert_eq!(legacy.record_id, 33);
}

#[test]
fn test_display_dump_sections() {
    let dump = format_for_display(&format_generic(sample_three_part(0)));
    assert!(dump.contains("=== SUCCESS (200) ==="));
    assert!(dump.contains("--- feedback ---"));
    assert!(dump.contains("--- data ---"));
    assert!(dump.contains("--- operation result ---"));

    let empty = format_for_display(&format_generic(RawReply::ThreePart {
        data: vec![],
        feedback: vec![],
        meta: OperationMetadata::default(),
    }));
    assert!(!empty.contains("--- feedback ---"));
    assert!(!empty.contains("--- data ---"));
}
