//! Integration tests for the Security Center alerts operation group.
//!
//! All HTTP interactions are served by a wiremock server so the tests are
//! deterministic; `expect(n)` assertions double as call-count checks for
//! the pagination contract.

use serde_json::{json, Value};
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use azrm::models::security::AlertAction;
use azrm::{AzureClient, Credentials, Error, ResourceId};

const SUBSCRIPTION: &str = "20ff7fc3-e762-44dd-bd96-b71116dcdc23";
const API_VERSION: &str = "2015-06-01-preview";

fn client_for(server: &MockServer) -> AzureClient {
    AzureClient::new(Credentials::from_static("test-token"), SUBSCRIPTION)
        .expect("client")
        .with_endpoint(&server.uri())
        .expect("endpoint")
}

/// A subscription-level alert as the service returns it.
fn subscription_alert(name: &str, state: &str) -> Value {
    json!({
        "id": format!(
            "/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Security/locations/centralus/alerts/{name}"
        ),
        "name": name,
        "type": "Microsoft.Security/locations/alerts",
        "properties": {
            "state": state,
            "alertDisplayName": "Suspicious process executed",
            "reportedTimeUtc": "2018-05-01T12:00:00Z",
            "vendorName": "Microsoft"
        }
    })
}

/// A resource-group-level alert; the ID carries both scope segments.
fn resource_group_alert(name: &str, resource_group: &str, location: &str) -> Value {
    json!({
        "id": format!(
            "/subscriptions/{SUBSCRIPTION}/resourceGroups/{resource_group}/providers/Microsoft.Security/locations/{location}/alerts/{name}"
        ),
        "name": name,
        "type": "Microsoft.Security/locations/alerts",
        "properties": {
            "state": "Active",
            "alertDisplayName": "Potential SQL injection",
            "compromisedEntity": "db-server"
        }
    })
}

#[tokio::test]
async fn list_concatenates_pages_transparently() {
    let server = MockServer::start().await;
    let alerts_path = format!("/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Security/alerts");

    let next_link = format!(
        "{}{alerts_path}?api-version={API_VERSION}&$skipToken=page2",
        server.uri()
    );

    // First page; first-match-wins, so cap it at one serve
    Mock::given(method("GET"))
        .and(path(&alerts_path))
        .and(query_param("api-version", API_VERSION))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [subscription_alert("alert-1", "Active"), subscription_alert("alert-2", "Active")],
            "nextLink": next_link
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    // Second and final page
    Mock::given(method("GET"))
        .and(path(&alerts_path))
        .and(query_param("$skipToken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [subscription_alert("alert-3", "Dismissed")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let alerts = client_for(&server).alerts().list().all().await.unwrap();

    let names: Vec<_> = alerts.iter().filter_map(|a| a.name.as_deref()).collect();
    assert_eq!(names, ["alert-1", "alert-2", "alert-3"]);
}

#[tokio::test]
async fn pager_issues_no_request_until_polled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .expect(0)
        .mount(&server)
        .await;

    // Building the pager must not touch the network
    let _pager = client_for(&server).alerts().list();
}

#[tokio::test]
async fn exhausting_the_pager_costs_one_request_per_page() {
    let server = MockServer::start().await;
    let alerts_path = format!("/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Security/alerts");

    let page2_link = format!("{}{alerts_path}?page=2", server.uri());
    let page3_link = format!("{}{alerts_path}?page=3", server.uri());

    Mock::given(method("GET"))
        .and(path(&alerts_path))
        .and(query_param("api-version", API_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [subscription_alert("a1", "Active"), subscription_alert("a2", "Active")],
            "nextLink": page2_link
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(&alerts_path))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [subscription_alert("a3", "Active"), subscription_alert("a4", "Active")],
            "nextLink": page3_link
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(&alerts_path))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [subscription_alert("a5", "Active")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // 5 items over page sizes 2/2/1: exactly ceil(5/2) = 3 requests
    let mut pager = client_for(&server).alerts().list();
    let mut count = 0;
    while let Some(_alert) = pager.try_next().await.unwrap() {
        count += 1;
    }
    assert_eq!(count, 5);
}

#[tokio::test]
async fn get_resource_group_level_alert_end_to_end() {
    let server = MockServer::start().await;
    let alerts_path = format!("/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Security/alerts");

    let listed = json!({
        "value": [
            subscription_alert("sub-alert", "Active"),
            resource_group_alert("rg-alert", "prod-rg", "westeurope")
        ]
    });

    Mock::given(method("GET"))
        .and(path(&alerts_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(&listed))
        .expect(1)
        .mount(&server)
        .await;

    let get_path = format!(
        "/subscriptions/{SUBSCRIPTION}/resourceGroups/prod-rg/providers/Microsoft.Security/locations/westeurope/alerts/rg-alert"
    );
    Mock::given(method("GET"))
        .and(path(&get_path))
        .and(query_param("api-version", API_VERSION))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(resource_group_alert("rg-alert", "prod-rg", "westeurope")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    // Select the first listed alert whose identifier is resource-group scoped
    let alerts = client.alerts().list().all().await.unwrap();
    let scoped = alerts
        .iter()
        .filter_map(|a| a.id.as_deref())
        .find(|id| id.contains("resourceGroups"))
        .expect("a resource-group scoped alert is listed");

    let id = ResourceId::parse(scoped).unwrap();
    let location = id.location().unwrap();
    let resource_group = id.resource_group().unwrap();

    let alert = client
        .alerts()
        .get_resource_group_level(location, resource_group, id.name())
        .await
        .unwrap();

    assert_eq!(alert.id.as_deref(), Some(scoped));
    assert_eq!(alert.name.as_deref(), Some("rg-alert"));

    // Every request carried a correlation id
    let requests = server.received_requests().await.unwrap();
    assert!(!requests.is_empty());
    for request in &requests {
        assert!(request.headers.contains_key("x-ms-client-request-id"));
    }
}

#[tokio::test]
async fn dismiss_then_get_reflects_dismissed_state() {
    let server = MockServer::start().await;

    let alert_path = format!(
        "/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Security/locations/centralus/alerts/alert-1"
    );

    Mock::given(method("POST"))
        .and(path(format!("{alert_path}/Dismiss")))
        .and(query_param("api-version", API_VERSION))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(&alert_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscription_alert("alert-1", "Dismissed")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let alerts = client.alerts();

    alerts
        .update_subscription_level_state("centralus", "alert-1", AlertAction::Dismiss)
        .await
        .unwrap();

    let alert = alerts
        .get_subscription_level("centralus", "alert-1")
        .await
        .unwrap();
    let state = alert.properties.unwrap().state.unwrap();
    assert_eq!(state, "Dismissed");
}

#[tokio::test]
async fn dismissing_twice_succeeds_idempotently() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Security/locations/centralus/alerts/alert-1/Dismiss"
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    let alerts = client_for(&server).alerts();
    for _ in 0..2 {
        alerts
            .update_subscription_level_state("centralus", "alert-1", AlertAction::Dismiss)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn dismissing_unknown_alert_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "AlertNotFound", "message": "Alert no-such-alert was not found"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .alerts()
        .update_subscription_level_state("centralus", "no-such-alert", AlertAction::Dismiss)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("AlertNotFound"));
}

#[tokio::test]
async fn page_fetch_failure_halts_iteration() {
    let server = MockServer::start().await;
    let alerts_path = format!("/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Security/alerts");

    let broken_link = format!("{}{alerts_path}?page=2", server.uri());

    Mock::given(method("GET"))
        .and(path(&alerts_path))
        .and(query_param("api-version", API_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [subscription_alert("a1", "Active")],
            "nextLink": broken_link
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(&alerts_path))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": "InternalServerError", "message": "please retry"}
        })))
        .mount(&server)
        .await;

    let mut pager = client_for(&server).alerts().list();

    // The buffered first page is unaffected by the later failure
    let first = pager.try_next().await.unwrap().unwrap();
    assert_eq!(first.name.as_deref(), Some("a1"));

    let err = pager.try_next().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    // The pager stays finished instead of retrying the failed page
    assert!(pager.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn status_classes_map_to_error_variants() {
    let cases = [
        (400, "BadRequest"),
        (401, "Unauthorized"),
        (403, "Forbidden"),
        (409, "Conflict"),
    ];

    for (status, code) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {"code": code, "message": "details"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .alerts()
            .get_subscription_level("centralus", "alert-1")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(status), "status {status}");
        let matches_variant = match status {
            400 => matches!(err, Error::BadRequest { .. }),
            401 => matches!(err, Error::Unauthorized { .. }),
            403 => matches!(err, Error::Forbidden { .. }),
            409 => matches!(err, Error::Conflict { .. }),
            _ => unreachable!(),
        };
        assert!(matches_variant, "unexpected variant for {status}: {err:?}");
    }
}

#[tokio::test]
async fn region_scoped_listing_hits_location_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/subscriptions/{SUBSCRIPTION}/resourceGroups/prod-rg/providers/Microsoft.Security/locations/westeurope/alerts"
        )))
        .and(query_param("api-version", API_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [resource_group_alert("rg-alert", "prod-rg", "westeurope")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let alerts = client_for(&server)
        .alerts()
        .list_resource_group_level_by_region("westeurope", "prod-rg")
        .all()
        .await
        .unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].name.as_deref(), Some("rg-alert"));
}
