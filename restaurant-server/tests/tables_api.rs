//! 预订 REST API 集成测试

mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_table_booking_crud() {
    let app = TestApp::new().await;
    let token = app.register_and_login("host", "lemon-secret").await;
    let token = Some(token.as_str());

    let res = app.get("/api/tables/", token).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!([]));

    let res = app
        .post_json(
            "/api/tables/",
            token,
            json!({ "first_name": "Ann Lee", "reservation_date": "2024-12-25", "reservation_slot": 18 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    let created = res.json();
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/tables/{id}/");

    let res = app.get(&uri, token).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), created);

    let res = app
        .put_json(
            &uri,
            token,
            json!({ "first_name": "Ann B. Lee", "reservation_date": "2024-12-26", "reservation_slot": 19 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);

    let res = app.get(&uri, token).await;
    assert_eq!(res.json()["first_name"], "Ann B. Lee");
    assert_eq!(res.json()["reservation_date"], "2024-12-26");
    assert_eq!(res.json()["reservation_slot"], 19);

    let res = app
        .patch_json(&uri, token, json!({ "reservation_slot": 20 }))
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app.get(&uri, token).await;
    assert_eq!(res.json()["first_name"], "Ann B. Lee");
    assert_eq!(res.json()["reservation_slot"], 20);

    let res = app.delete(&uri, token).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let res = app.get(&uri, token).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["code"], 7001);
}

#[tokio::test]
async fn test_put_without_slot_keeps_stored_slot() {
    let app = TestApp::new().await;
    let token = app.register_and_login("host", "lemon-secret").await;
    let token = Some(token.as_str());

    let res = app
        .post_json(
            "/api/tables/",
            token,
            json!({ "first_name": "A", "reservation_date": "2024-12-25", "reservation_slot": 18 }),
        )
        .await;
    let id = res.json()["id"].as_i64().unwrap();

    let res = app
        .put_json(
            &format!("/api/tables/{id}/"),
            token,
            json!({ "first_name": "B", "reservation_date": "2024-12-25" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["first_name"], "B");
    assert_eq!(res.json()["reservation_slot"], 18);

    // 名字和日期在 PUT 中必填
    let res = app
        .put_json(&format!("/api/tables/{id}/"), token, json!({ "first_name": "C" }))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_booking_ids() {
    let app = TestApp::new().await;
    let token = app.register_and_login("host", "lemon-secret").await;
    let token = Some(token.as_str());

    let res = app
        .put_json(
            "/api/tables/999/",
            token,
            json!({ "first_name": "B", "reservation_date": "2024-12-25" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app
        .patch_json("/api/tables/999/", token, json!({ "reservation_slot": 1 }))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app.delete("/api/tables/999/", token).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_routes_require_token() {
    let app = TestApp::new().await;

    for uri in [
        "/api/menu-items/",
        "/api/menu-items/1/",
        "/api/tables/",
        "/api/tables/1/",
        "/api/users/",
        "/api/users/1/",
        "/api/message/",
    ] {
        let res = app.get(uri, None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(res.json()["code"], 1001, "{uri}");
    }
}
