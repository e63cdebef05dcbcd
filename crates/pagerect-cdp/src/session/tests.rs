use serde_json::json;

use super::core::PageSession;
use crate::error::CdpError;
use crate::protocol::NodeTarget;

#[test]
fn test_unwrap_result_returns_value() {
    let result = json!({"result": {"type": "number", "value": 1.25}});
    let value = PageSession::unwrap_result(result).unwrap();
    assert_eq!(value, json!(1.25));
}

#[test]
fn test_unwrap_result_undefined_is_null() {
    let result = json!({"result": {"type": "undefined"}});
    let value = PageSession::unwrap_result(result).unwrap();
    assert!(value.is_null());
}

#[test]
fn test_unwrap_result_exception_uses_description() {
    let result = json!({
        "result": {"type": "object", "subtype": "error"},
        "exceptionDetails": {
            "exceptionId": 1,
            "text": "Uncaught",
            "lineNumber": 0,
            "columnNumber": 5,
            "exception": {"type": "object", "description": "TypeError: x is null"}
        }
    });
    let err = PageSession::unwrap_result(result).unwrap_err();
    match err {
        CdpError::JavaScript(msg) => assert_eq!(msg, "TypeError: x is null"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unwrap_result_exception_falls_back_to_text() {
    let result = json!({"exceptionDetails": {"text": "Uncaught SyntaxError"}});
    let err = PageSession::unwrap_result(result).unwrap_err();
    assert!(err.to_string().contains("Uncaught SyntaxError"));
}

fn node(backend_node_id: i64) -> NodeTarget {
    NodeTarget {
        backend_node_id: Some(backend_node_id),
        ..Default::default()
    }
}

#[test]
fn test_box_model_reply_is_parsed() {
    let reply = json!({"model": {
        "content": [14, 24, 106, 24, 106, 66, 14, 66],
        "padding": [11, 21, 109, 21, 109, 69, 11, 69],
        "border": [10, 20, 110, 20, 110, 70, 10, 70],
        "margin": [8, 18, 112, 18, 112, 72, 8, 72],
        "width": 100,
        "height": 50
    }});
    let model = PageSession::box_model_from(Ok(reply), &node(1))
        .unwrap()
        .unwrap();
    assert_eq!(model.border[2], 110.0);
}

#[test]
fn test_box_model_unrendered_or_detached_is_none() {
    for message in ["Could not compute box model.", "No node with given id found"] {
        let err = CdpError::Protocol {
            code: -32000,
            message: message.to_string(),
        };
        let model = PageSession::box_model_from(Err(err), &node(1)).unwrap();
        assert!(model.is_none(), "{}", message);
    }
}

#[test]
fn test_box_model_other_server_errors_propagate() {
    let err = CdpError::Protocol {
        code: -32000,
        message: "DOM agent hasn't been enabled".to_string(),
    };
    let result = PageSession::box_model_from(Err(err), &node(1));
    match result {
        Err(CdpError::Protocol { message, .. }) => assert!(message.contains("hasn't been enabled")),
        other => panic!("unexpected result: {:?}", other),
    }

    let result = PageSession::box_model_from(Err(CdpError::SessionClosed), &node(1));
    assert!(matches!(result, Err(CdpError::SessionClosed)));
}
