//! Integration tests for MCP protocol handling.
//!
//! These verify the JSON-RPC 2.0 parsing layer and the shape of the
//! advertised tool surface.

use electronics_mcp::mcp::protocol::{parse_message, IncomingMessage, RequestId};

// =============================================================================
// Protocol parsing
// =============================================================================

#[test]
fn parse_initialize_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {
                "name": "test-client",
                "version": "1.0.0"
            }
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "initialize");
        assert_eq!(req.id, RequestId::Number(1));
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn parse_tools_call_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 7,
        "method": "tools/call",
        "params": {
            "name": "decode_resistor_color_bands",
            "arguments": {"bands": ["brown", "black", "red", "gold"]}
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "tools/call");
        let params = req.params.unwrap();
        assert_eq!(params["name"], "decode_resistor_color_bands");
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn parse_initialized_notification() {
    let json = r#"{
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Notification(notif) = result.unwrap() {
        assert_eq!(notif.method, "notifications/initialized");
    } else {
        panic!("Expected Notification");
    }
}

#[test]
fn parse_invalid_json() {
    assert!(parse_message("not valid json").is_err());
}

#[test]
fn parse_missing_jsonrpc_version() {
    let json = r#"{
        "id": 1,
        "method": "test"
    }"#;

    assert!(parse_message(json).is_err());
}
