//! RAM HTTP client against a mock server

use crate::assert_err;
use crate::common::TrustDocumentFactory;
use alicloud_ram::{PolicyError, RamApi, RamApiError, RamClient, RamConfig, TrustValidator};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RamClient {
    let mut config = RamConfig::new("LTAI-test", "test-secret");
    config.endpoint = Some(server.uri());
    config.timeout_seconds = 5;
    RamClient::new(&config).unwrap()
}

fn get_role_body(role_name: &str, document: &str) -> serde_json::Value {
    json!({
        "RequestId": "04F0F334-1335-436C-A1D7-6C044FE73368",
        "Role": {
            "RoleId": "901234567890123",
            "RoleName": role_name,
            "Arn": format!("acs:ram::123456789012:role/{}", role_name),
            "Description": "ECS instance role",
            "AssumeRolePolicyDocument": document,
            "CreateDate": "2015-01-23T12:33:18Z",
            "UpdateDate": "2015-01-23T12:33:18Z"
        }
    })
}

#[tokio::test]
async fn test_get_role() {
    let server = MockServer::start().await;
    let document = TrustDocumentFactory::ecs();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("Action", "GetRole"))
        .and(query_param("RoleName", "EcsRole"))
        .and(query_param("Format", "JSON"))
        .and(query_param("Version", "2015-05-01"))
        .and(query_param("SignatureMethod", "HMAC-SHA1"))
        .and(query_param("AccessKeyId", "LTAI-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(get_role_body("EcsRole", &document)))
        .expect(1)
        .mount(&server)
        .await;

    let role = client_for(&server).get_role("EcsRole").await.unwrap();
    assert_eq!(role.role_name, "EcsRole");
    assert_eq!(role.arn, "acs:ram::123456789012:role/EcsRole");
    assert_eq!(role.assume_role_policy_document, document);
}

#[tokio::test]
async fn test_requests_are_signed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(get_role_body("EcsRole", &TrustDocumentFactory::ecs())),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_role("EcsRole").await.unwrap();
    client.get_role("EcsRole").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let nonces: Vec<String> = requests
        .iter()
        .map(|request| {
            let pairs: std::collections::HashMap<String, String> =
                request.url.query_pairs().into_owned().collect();
            assert!(pairs.contains_key("Signature"));
            assert!(pairs.contains_key("Timestamp"));
            assert_eq!(pairs.get("SignatureVersion").map(String::as_str), Some("1.0"));
            pairs["SignatureNonce"].clone()
        })
        .collect();
    // every request carries a fresh nonce
    assert_ne!(nonces[0], nonces[1]);
}

#[tokio::test]
async fn test_api_error_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "RequestId": "req-404",
            "HostId": "ram.aliyuncs.com",
            "Code": "EntityNotExist.Role",
            "Message": "The role not exists: MissingRole."
        })))
        .mount(&server)
        .await;

    let error = assert_err!(client_for(&server).get_role("MissingRole").await);
    assert!(matches!(error, RamApiError::Api { status: 404, .. }));
    assert_eq!(error.code(), Some("EntityNotExist.Role"));
    assert_eq!(error.request_id(), Some("req-404"));
}

#[tokio::test]
async fn test_unparsable_response_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let error = assert_err!(client_for(&server).get_role("EcsRole").await);
    assert!(matches!(error, RamApiError::ResponseParsing { .. }));
}

#[tokio::test]
async fn test_validator_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("RoleName", "EcsRole"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(get_role_body("EcsRole", &TrustDocumentFactory::ecs())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("RoleName", "FcRole"))
        .respond_with(ResponseTemplate::new(200).set_body_json(get_role_body(
            "FcRole",
            &TrustDocumentFactory::with_services(&["fc.aliyuncs.com"]),
        )))
        .mount(&server)
        .await;

    let validator = TrustValidator::new(client_for(&server));
    validator.judge_role_policy_principal("EcsRole").await.unwrap();

    let error = assert_err!(validator.judge_role_policy_principal("FcRole").await);
    assert!(matches!(error, PolicyError::Validation { .. }));
}

#[tokio::test]
async fn test_validator_wraps_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "RequestId": "req-403",
            "Code": "NoPermission",
            "Message": "You are not authorized to do this action."
        })))
        .mount(&server)
        .await;

    let validator = TrustValidator::new(client_for(&server));
    let error = assert_err!(validator.judge_role_policy_principal("EcsRole").await);

    let message = error.to_string();
    assert!(message.starts_with("GetRole EcsRole got an error:"));
    assert!(message.contains("NoPermission"));
}
