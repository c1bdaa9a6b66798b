//! HTTP client tests against a mock API server.

use serde_json::json;
use uptimerobot::model::{LogType, MonitorStatus, MonitorType};
use uptimerobot::{GetMonitors, MonitorError, UptimeRobot};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn keyword_monitor() -> serde_json::Value {
    json!({
        "id": "776540404",
        "friendlyname": "Shop",
        "url": "https://shop.example.com",
        "type": "2",
        "subtype": "",
        "keywordtype": "1",
        "keywordvalue": "Add to cart",
        "httpusername": "",
        "httppassword": "",
        "port": "",
        "status": "9",
        "alltimeuptimeratio": "97.325",
        "customuptimeratio": "88.1-95.75",
        "alertcontact": [{ "id": "0993765", "type": "2", "value": "ops@example.com" }],
        "log": [{ "type": "1", "datetime": "03/14/2016 09:26:53" }]
    })
}

#[tokio::test]
async fn sends_options_as_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getMonitors"))
        .and(query_param("apiKey", "u956-key"))
        .and(query_param("format", "json"))
        .and(query_param("noJsonCallback", "1"))
        .and(query_param("monitors", "776540404-15830"))
        .and(query_param("customUptimeRatio", "24-168"))
        .and(query_param("logs", "1"))
        .and(query_param("alertContacts", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stat": "ok",
            "monitors": { "monitor": [keyword_monitor()] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = UptimeRobot::with_base_url("u956-key", server.uri()).unwrap();
    let monitors = client
        .get_monitors(&GetMonitors {
            monitors: vec!["776540404".to_string(), "15830".to_string()],
            custom_uptime_ratio_periods: vec![24, 168],
            logs: true,
            alert_contacts: true,
        })
        .await
        .unwrap();

    assert_eq!(monitors.len(), 1);
    let shop = &monitors[0];
    assert_eq!(shop.monitor_type, MonitorType::Keyword);
    assert_eq!(shop.status, MonitorStatus::Down);
    assert_eq!(shop.keyword.as_deref(), Some("Add to cart"));
    assert_eq!(
        shop.custom_uptime_ratios().collect::<Vec<_>>(),
        vec![(24, 88.1), (168, 95.75)]
    );
    assert_eq!(shop.alert_contacts[0].value, "ops@example.com");
    assert_eq!(shop.logs[0].log_type, LogType::Down);
}

#[tokio::test]
async fn api_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getMonitors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stat": "fail",
            "id": "101",
            "message": "apiKey is wrong"
        })))
        .mount(&server)
        .await;

    let client = UptimeRobot::with_base_url("bad", server.uri()).unwrap();
    let err = client.get_monitors(&GetMonitors::default()).await.unwrap_err();
    assert!(format!("{:#}", err).contains("apiKey is wrong"));
}

#[tokio::test]
async fn http_error_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getMonitors"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = UptimeRobot::with_base_url("k", format!("{}/", server.uri())).unwrap();
    let err = client.get_monitors(&GetMonitors::default()).await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn malformed_monitor_fails_the_whole_call() {
    let mut broken = keyword_monitor();
    broken.as_object_mut().unwrap().remove("friendlyname");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getMonitors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stat": "ok",
            "monitors": { "monitor": [keyword_monitor(), broken] }
        })))
        .mount(&server)
        .await;

    let client = UptimeRobot::with_base_url("k", server.uri()).unwrap();
    let err = client.get_monitors(&GetMonitors::default()).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<MonitorError>(),
        Some(&MonitorError::MissingField {
            field: "friendlyname"
        })
    );
}
