use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use flowgate_common::keys;
use flowgate_server::remote::{ConfigClient, InMemoryConfigClient};
use flowgate_server::rest::{router, AppState};

fn setup() -> (axum::Router, InMemoryConfigClient) {
    let client = InMemoryConfigClient::new();
    let state = AppState::new(Arc::new(client.clone()) as Arc<dyn ConfigClient>);
    (router(state), client)
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> Value {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn param_flow_body(count: f64) -> Value {
    json!({
        "app": "orderSvc",
        "ip": "10.0.0.1",
        "port": 8719,
        "rule": {
            "resource": "getOrder",
            "paramIdx": 0,
            "count": count,
            "durationInSec": 1,
            "grade": 1,
            "controlBehavior": 0
        }
    })
}

fn remote_set(client: &InMemoryConfigClient, data_id: &str) -> Vec<Value> {
    let content = client.content(data_id, keys::GROUP_ID).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (app, _) = setup();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn param_flow_create_update_delete_scenario() {
    let (app, client) = setup();

    // Create: assigned id, remote record holds the one-element set.
    let created = send(&app, "POST", "/paramFlow/rule", Some(param_flow_body(20.0))).await;
    assert_eq!(created["success"], true, "create failed: {created}");
    let id = created["data"]["id"].as_i64().unwrap();
    let gmt_create = created["data"]["gmtCreate"].as_i64().unwrap();

    let set = remote_set(&client, "orderSvc-param-rules");
    assert_eq!(set.len(), 1);
    assert_eq!(set[0]["rule"]["count"], 20.0);
    assert_eq!(set[0]["rule"]["resource"], "getOrder");

    // Update count: same id, gmtCreate preserved, remote reflects the change.
    let updated = send(
        &app,
        "PUT",
        &format!("/paramFlow/rule/{id}"),
        Some(param_flow_body(50.0)),
    )
    .await;
    assert_eq!(updated["success"], true);
    assert_eq!(updated["data"]["id"].as_i64().unwrap(), id);
    assert_eq!(updated["data"]["gmtCreate"].as_i64().unwrap(), gmt_create);
    assert!(updated["data"]["gmtModified"].as_i64().unwrap() >= gmt_create);

    let set = remote_set(&client, "orderSvc-param-rules");
    assert_eq!(set.len(), 1);
    assert_eq!(set[0]["rule"]["count"], 50.0);

    // Delete: remote record becomes an empty set; repeat delete still succeeds.
    let deleted = send(&app, "DELETE", &format!("/paramFlow/rule/{id}"), None).await;
    assert_eq!(deleted["success"], true);
    assert_eq!(deleted["data"].as_i64().unwrap(), id);
    assert!(remote_set(&client, "orderSvc-param-rules").is_empty());

    let deleted_again = send(&app, "DELETE", &format!("/paramFlow/rule/{id}"), None).await;
    assert_eq!(deleted_again["success"], true);
    assert!(deleted_again["data"].is_null());
}

#[tokio::test]
async fn param_flow_validation_failure_names_the_clause() {
    let (app, client) = setup();
    let mut body = param_flow_body(20.0);
    body["ip"] = Value::Null;

    let res = send(&app, "POST", "/paramFlow/rule", Some(body)).await;
    assert_eq!(res["success"], false);
    assert_eq!(res["code"], -1);
    assert!(res["msg"].as_str().unwrap().contains("ip"));
    // Validation failures have no side effects.
    assert!(client.content("orderSvc-param-rules", keys::GROUP_ID).is_none());
}

#[tokio::test]
async fn query_with_blank_app_fails_fast() {
    let (app, _) = setup();
    let res = send(&app, "GET", "/paramFlow/rules", None).await;
    assert_eq!(res["success"], false);
    assert!(res["msg"].as_str().unwrap().contains("app"));
}

#[tokio::test]
async fn query_reconciles_remote_set_into_local_store() {
    let (app, client) = setup();

    // Remote entities with no app name; the query must stamp it.
    let remote = json!([
        {"ip": "10.0.0.1", "port": 8719, "rule": {"resource": "getOrder", "grade": 1, "paramIdx": 0, "count": 20.0, "durationInSec": 1, "controlBehavior": 0, "burstCount": 0}},
        {"ip": "10.0.0.2", "port": 8719, "rule": {"resource": "listOrders", "grade": 1, "paramIdx": 1, "count": 5.0, "durationInSec": 1, "controlBehavior": 0, "burstCount": 0}}
    ]);
    client
        .publish_config(
            "reportSvc-param-rules",
            keys::GROUP_ID,
            &remote.to_string(),
        )
        .await
        .unwrap();

    let res = send(&app, "GET", "/paramFlow/rules?app=reportSvc", None).await;
    assert_eq!(res["success"], true, "query failed: {res}");
    let rules = res["data"].as_array().unwrap();
    assert_eq!(rules.len(), 2);
    for rule in rules {
        assert_eq!(rule["app"], "reportSvc");
        assert!(rule["id"].as_i64().is_some());
    }
}

#[tokio::test]
async fn system_rule_exclusivity_enforced_on_create_only() {
    let (app, client) = setup();

    let none_set = json!({"app": "orderSvc"});
    let res = send(&app, "POST", "/system/rule", Some(none_set)).await;
    assert_eq!(res["success"], false);
    assert!(res["msg"].as_str().unwrap().contains("0 values"));

    let two_set = json!({"app": "orderSvc", "qps": 100.0, "avgRt": 250});
    let res = send(&app, "POST", "/system/rule", Some(two_set)).await;
    assert_eq!(res["success"], false);
    assert!(res["msg"].as_str().unwrap().contains("2 values"));

    let one_set = json!({"app": "orderSvc", "qps": 100.0});
    let res = send(&app, "POST", "/system/rule", Some(one_set)).await;
    assert_eq!(res["success"], true, "create failed: {res}");
    let id = res["data"]["id"].as_i64().unwrap();

    // Unset thresholds appear as the -1 wire sentinel in the remote record.
    let set = remote_set(&client, "orderSvc-system-rules");
    assert_eq!(set[0]["qps"], 100.0);
    assert_eq!(set[0]["avgRt"], -1);
    assert_eq!(set[0]["maxThread"], -1);

    // Update may set several thresholds at once.
    let update = json!({"app": "orderSvc", "qps": 80.0, "avgRt": 250});
    let res = send(&app, "PUT", &format!("/system/rule/{id}"), Some(update)).await;
    assert_eq!(res["success"], true, "update failed: {res}");

    let set = remote_set(&client, "orderSvc-system-rules");
    assert_eq!(set[0]["qps"], 80.0);
    assert_eq!(set[0]["avgRt"], 250);
}

#[tokio::test]
async fn update_of_unknown_id_reports_not_found() {
    let (app, _) = setup();
    let res = send(
        &app,
        "PUT",
        "/paramFlow/rule/99",
        Some(param_flow_body(10.0)),
    )
    .await;
    assert_eq!(res["success"], false);
    assert!(res["msg"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn authority_and_degrade_rules_publish_under_their_own_keys() {
    let (app, client) = setup();

    let authority = json!({
        "app": "orderSvc",
        "ip": "10.0.0.1",
        "port": 8719,
        "rule": {"resource": "getOrder", "limitApp": "reportSvc", "strategy": 0}
    });
    let res = send(&app, "POST", "/authority/rule", Some(authority)).await;
    assert_eq!(res["success"], true, "authority create failed: {res}");
    assert_eq!(remote_set(&client, "orderSvc-authority-rules").len(), 1);

    let degrade = json!({
        "app": "orderSvc",
        "ip": "10.0.0.1",
        "port": 8719,
        "resource": "getOrder",
        "grade": 0,
        "count": 50.0,
        "timeWindow": 10
    });
    let res = send(&app, "POST", "/degrade/rule", Some(degrade)).await;
    assert_eq!(res["success"], true, "degrade create failed: {res}");
    assert_eq!(remote_set(&client, "orderSvc-degrade-rules").len(), 1);

    // Kinds do not leak into each other's records.
    assert!(client.content("orderSvc-param-rules", keys::GROUP_ID).is_none());
}
