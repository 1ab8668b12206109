use std::time::Duration;

use enrich_async::types::email::{EmailStatus, FindEmailRequest, ValidateEmailRequest};
use enrich_async::types::people::FindEmployeesRequest;
use enrich_async::{Client, DispatchOptions, EnrichConfig, EnrichError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client<EnrichConfig> {
    let cfg = EnrichConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-key");
    Client::with_config(cfg)
}

#[tokio::test]
async fn find_email_sends_bearer_auth_and_parses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/find-email"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "firstName": "Emily",
            "lastName": "Zhang",
            "domain": "figma.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "emily@figma.com",
            "confidenceScore": 97.5,
            "domain": "figma.com"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let res = client
        .email_finder()
        .find_email(&FindEmailRequest {
            first_name: "Emily".into(),
            last_name: "Zhang".into(),
            domain: "figma.com".into(),
        })
        .await
        .unwrap();

    assert_eq!(res.email.as_deref(), Some("emily@figma.com"));
    assert_eq!(res.confidence_score, Some(97.5));
}

#[tokio::test]
async fn validate_email_parses_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/verify-email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "emily@figma.com",
            "status": "valid",
            "mxFound": true,
            "smtpCheck": true,
            "free": false
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let res = client
        .email_validation()
        .validate_email(&ValidateEmailRequest {
            email: "emily@figma.com".into(),
        })
        .await
        .unwrap();

    assert_eq!(res.status, EmailStatus::Valid);
    assert_eq!(res.mx_found, Some(true));
    assert_eq!(res.free, Some(false));
}

#[tokio::test]
async fn find_employees_pages_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/find-employees"))
        .and(body_json(json!({ "domain": "figma.com", "limit": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "fullName": "Emily Zhang", "title": "Engineer" },
                { "fullName": "Noah Patel" }
            ],
            "total": 240,
            "hasMore": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let res = client
        .people_search()
        .find_employees(&FindEmployeesRequest {
            domain: "figma.com".into(),
            limit: Some(2),
            page: None,
        })
        .await
        .unwrap();

    assert_eq!(res.results.len(), 2);
    assert_eq!(res.results[0].full_name.as_deref(), Some("Emily Zhang"));
    assert_eq!(res.total, Some(240));
    assert_eq!(res.has_more, Some(true));
}

#[tokio::test]
async fn wallet_balance_uses_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance": 1250,
            "creditsUsed": 750
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let res = client.wallets().balance().await.unwrap();

    assert_eq!(res.balance, 1250);
    assert_eq!(res.credits_used, Some(750));
}

#[tokio::test]
async fn payment_required_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reverse-lookup"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "message": "Insufficient credits",
            "error": "payment_required"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .reverse_lookup()
        .lookup(&enrich_async::types::people::ReverseLookupRequest {
            email: "emily@figma.com".into(),
        })
        .await
        .unwrap_err();

    match err {
        EnrichError::Api(obj) => {
            assert_eq!(obj.status_code, Some(402));
            assert_eq!(obj.message, "Insufficient credits");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_credentials_fail_before_any_request() {
    // Empty key is rejected by validate_auth; no server involved.
    let cfg = EnrichConfig::new()
        .with_api_base("http://127.0.0.1:9")
        .with_api_key("");
    let client = Client::with_config(cfg);

    let err = client.wallets().balance().await.unwrap_err();
    assert!(matches!(err, EnrichError::Config(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_endpoint_hits_per_call_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/find-phone"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({ "phoneNumber": "+14155550123" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .phone_finder()
        .find_phone_with(
            &enrich_async::types::phone::FindPhoneRequest {
                linkedin_url: "https://linkedin.com/in/emilyzhang".into(),
            },
            DispatchOptions::timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    match err {
        EnrichError::Timeout { after } => assert_eq!(after, Duration::from_millis(50)),
        other => panic!("expected Timeout, got {other:?}"),
    }
}
