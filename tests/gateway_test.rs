use cpf_function::adapters::gateway::handle;
use cpf_function::{GatewayRequest, Validator};
use serde_json::{json, Value};

fn request(event: Value) -> GatewayRequest {
    serde_json::from_value(event).unwrap()
}

fn body(response: &cpf_function::GatewayResponse) -> Value {
    serde_json::from_str(&response.body).unwrap()
}

#[test]
fn test_path_parameter_event() {
    let event = request(json!({
        "resource": "/cpf/{cpf}",
        "path": "/cpf/111.444.777-35",
        "httpMethod": "GET",
        "headers": { "Accept": "application/json" },
        "pathParameters": { "cpf": "111.444.777-35" },
        "queryStringParameters": null,
        "body": null,
        "isBase64Encoded": false
    }));

    let response = handle(&Validator::default(), &event, "cpf");

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        body(&response),
        json!({
            "valid": true,
            "cpf": "11144477735",
            "formatted": "111.444.777-35",
            "region": ["ES", "RJ"]
        })
    );
}

#[test]
fn test_query_parameter_event_with_invalid_cpf() {
    let event = request(json!({
        "httpMethod": "GET",
        "path": "/validate",
        "queryStringParameters": { "cpf": "11144477736" }
    }));

    let response = handle(&Validator::default(), &event, "cpf");

    // 驗證失敗仍回傳 200
    assert_eq!(response.status_code, 200);
    assert_eq!(
        body(&response),
        json!({ "valid": false, "reason": "invalid-checksum" })
    );
}

#[test]
fn test_post_body_event() {
    let event = request(json!({
        "httpMethod": "POST",
        "body": "{\"document\": \"123.456.789-09\"}"
    }));

    let response = handle(&Validator::default(), &event, "document");

    assert_eq!(response.status_code, 200);
    assert_eq!(body(&response)["valid"], json!(true));
}

#[test]
fn test_direct_invocation_without_method() {
    let event = request(json!({ "queryStringParameters": { "cpf": "abc" } }));

    let response = handle(&Validator::default(), &event, "cpf");

    assert_eq!(response.status_code, 200);
    assert_eq!(
        body(&response),
        json!({ "valid": false, "reason": "invalid-format" })
    );
}

#[test]
fn test_missing_parameter() {
    let event = request(json!({ "httpMethod": "GET", "pathParameters": null }));

    let response = handle(&Validator::default(), &event, "cpf");

    assert_eq!(response.status_code, 400);
    assert_eq!(body(&response), json!({ "error": "missing 'cpf' parameter" }));
}

#[test]
fn test_malformed_body() {
    let event = request(json!({ "httpMethod": "POST", "body": "not json" }));

    let response = handle(&Validator::default(), &event, "cpf");

    assert_eq!(response.status_code, 400);
    assert!(body(&response)["error"].is_string());
}

#[test]
fn test_unsupported_method() {
    let event = request(json!({
        "httpMethod": "delete",
        "pathParameters": { "cpf": "11144477735" }
    }));

    let response = handle(&Validator::default(), &event, "cpf");

    assert_eq!(response.status_code, 405);
}

#[test]
fn test_response_uses_proxy_field_names() {
    let event = request(json!({ "pathParameters": { "cpf": "11144477735" } }));

    let response = handle(&Validator::default(), &event, "cpf");
    let wire = serde_json::to_value(&response).unwrap();

    assert_eq!(wire["statusCode"], json!(200));
    assert_eq!(wire["isBase64Encoded"], json!(false));
    assert!(wire["body"].is_string());
}

#[test]
fn test_base64_encoded_body_event() {
    use base64::Engine;

    let encoded = base64::engine::general_purpose::STANDARD.encode(r#"{"cpf":"11144477735"}"#);
    let event = request(json!({
        "httpMethod": "POST",
        "body": encoded,
        "isBase64Encoded": true
    }));

    let response = handle(&Validator::default(), &event, "cpf");

    assert_eq!(response.status_code, 200);
    assert_eq!(body(&response)["valid"], json!(true));
    assert_eq!(body(&response)["cpf"], json!("11144477735"));
}

#[test]
fn test_invalid_base64_body_event() {
    let event = request(json!({
        "httpMethod": "POST",
        "body": "%%%not-base64%%%",
        "isBase64Encoded": true
    }));

    let response = handle(&Validator::default(), &event, "cpf");

    assert_eq!(response.status_code, 400);
    assert!(body(&response)["error"].is_string());
}

#[test]
fn test_http_api_v2_events() {
    let delete = request(json!({
        "version": "2.0",
        "rawPath": "/cpf/11144477735",
        "requestContext": { "http": { "method": "DELETE", "path": "/cpf/11144477735" } },
        "pathParameters": { "cpf": "11144477735" },
        "isBase64Encoded": false
    }));
    assert_eq!(handle(&Validator::default(), &delete, "cpf").status_code, 405);

    let get = request(json!({
        "version": "2.0",
        "rawPath": "/cpf",
        "requestContext": { "http": { "method": "GET", "path": "/cpf" } },
        "queryStringParameters": { "cpf": "111.444.777-35" },
        "isBase64Encoded": false
    }));
    let response = handle(&Validator::default(), &get, "cpf");
    assert_eq!(response.status_code, 200);
    assert_eq!(body(&response)["valid"], json!(true));
}
