use axum::Router;
use axum::body::Body;
use bakery_server::{Config, ServerState, build_app};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    let mut config = Config::with_overrides("/tmp/bakery-test", 0);
    config.seed_defaults = true;
    let state = ServerState::in_memory(&config).unwrap();
    build_app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn order_body() -> Value {
    json!({
        "cakeId": 2,
        "size": "0.5kg",
        "flavour": "Chocolate",
        "color": "Blue",
        "addonIds": [1, 2],
        "customerName": "Asha",
        "customerPhone": "9876543210",
        "deliveryAddress": "12 Baker Street",
        "deliveryDate": "2099-12-31",
        "deliveryTime": "18:00",
        "paymentType": "COD"
    })
}

#[tokio::test]
async fn test_status() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["collections"], 4);
}

#[tokio::test]
async fn test_cake_listing_and_category_filter() {
    let app = test_app();

    let (status, all) = send(&app, Method::GET, "/api/Cakes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 8);

    let (_, wildcard) = send(&app, Method::GET, "/api/Cakes?category=all", None).await;
    assert_eq!(wildcard, all);

    let (_, birthday) = send(&app, Method::GET, "/api/Cakes?category=birthday", None).await;
    let birthday = birthday.as_array().unwrap();
    assert!(!birthday.is_empty());
    assert!(birthday.iter().all(|c| c["category"] == "birthday"));
}

#[tokio::test]
async fn test_cake_crud() {
    let app = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/Cakes",
        Some(json!({
            "name": "Lemon Drizzle",
            "category": "custom",
            "sizes": [{ "weight": "1kg", "price": 1100 }, { "weight": "", "price": 0 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["basePrice"], 1100.0);
    assert_eq!(created["sizes"].as_array().unwrap().len(), 1);
    assert_eq!(created["flavours"], json!(["Vanilla", "Chocolate", "Strawberry"]));
    assert_eq!(created["deliveryTime"], "24 hours");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/Cakes/{id}"),
        Some(json!({ "isAvailable": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Lemon Drizzle");
    assert_eq!(updated["isAvailable"], false);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/Cakes/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &format!("/api/Cakes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/Cakes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cake_validation_errors() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Cakes",
        Some(json!({ "name": "No sizes", "category": "custom", "sizes": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Cakes",
        Some(json!({
            "name": "Bad image",
            "category": "custom",
            "image": "ftp://example.com/cake.png",
            "sizes": [{ "weight": "1kg", "price": 100 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6502);
}

#[tokio::test]
async fn test_category_name_conflict() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Categories",
        Some(json!({ "name": "BIRTHDAY" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6103);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/Categories",
        Some(json!({ "name": "Anniversary" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Anniversary");

    let (_, list) = send(&app, Method::GET, "/api/Categories", None).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_addon_crud() {
    let app = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/Addons",
        Some(json!({ "name": "Sparklers", "price": 120, "type": "accessory" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["isAvailable"], true);
    let id = created["id"].as_i64().unwrap();

    let (_, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/Addons/{id}"),
        Some(json!({ "price": 150 })),
    )
    .await;
    assert_eq!(updated["price"], 150.0);
    assert_eq!(updated["type"], "accessory");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Addons",
        Some(json!({ "name": "Free money", "price": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6003);
}

#[tokio::test]
async fn test_order_lifecycle() {
    let app = test_app();

    let (status, order) = send(&app, Method::POST, "/api/Orders", Some(order_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "pending");
    // 800 + 200 + 100
    assert_eq!(order["totalPrice"], 1100.0);
    let id = order["id"].as_str().unwrap().to_string();

    let (_, accepted) = send(&app, Method::POST, &format!("/api/Orders/{id}/accept"), None).await;
    assert_eq!(accepted["status"], "accepted");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/Orders/{id}/cancel"),
        Some(json!({ "customerPhone": "9876543210" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4003);

    let (_, charged) = send(
        &app,
        Method::POST,
        &format!("/api/Orders/{id}/extra-charges"),
        Some(json!({ "amount": 150, "description": "Gold leaf" })),
    )
    .await;
    assert_eq!(charged["totalPrice"], 1250.0);
    assert_eq!(charged["chargeDescription"], "Gold leaf");

    for next in ["preparing", "ready", "delivered"] {
        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/Orders/{id}/status"),
            Some(json!({ "status": next })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], next);
    }

    let (_, completed) = send(&app, Method::GET, "/api/Orders?bucket=completed", None).await;
    assert_eq!(completed.as_array().unwrap().len(), 1);
    let (_, fresh) = send(&app, Method::GET, "/api/Orders?bucket=new", None).await;
    assert!(fresh.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_reject_and_customer_view() {
    let app = test_app();

    let (_, order) = send(&app, Method::POST, "/api/Orders", Some(order_body())).await;
    let id = order["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/Orders/{id}/reject"),
        Some(json!({ "reason": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);

    let (_, rejected) = send(
        &app,
        Method::POST,
        &format!("/api/Orders/{id}/reject"),
        Some(json!({ "reason": "out of stock" })),
    )
    .await;
    assert_eq!(rejected["status"], "rejected");
    assert_eq!(rejected["rejectionReason"], "out of stock");

    let (status, mine) = send(
        &app,
        Method::GET,
        "/api/customers/9876543210/orders?bucket=closed",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine.as_array().unwrap().len(), 1);

    let (_, other) = send(&app, Method::GET, "/api/customers/1111111111/orders", None).await;
    assert!(other.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_by_customer() {
    let app = test_app();
    let (_, order) = send(&app, Method::POST, "/api/Orders", Some(order_body())).await;
    let id = order["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/Orders/{id}/cancel"),
        Some(json!({ "customerPhone": "1111111111" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2001);

    let (status, cancelled) = send(
        &app,
        Method::POST,
        &format!("/api/Orders/{id}/cancel"),
        Some(json!({ "customerPhone": "9876543210" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "cancelled");
}

#[tokio::test]
async fn test_place_order_errors() {
    let app = test_app();

    let mut body = order_body();
    body["cakeId"] = json!(999);
    let (status, err) = send(&app, Method::POST, "/api/Orders", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 6001);

    let mut body = order_body();
    body["customerPhone"] = json!("98765");
    let (status, err) = send(&app, Method::POST, "/api/Orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 4007);

    let (status, err) = send(&app, Method::GET, "/api/Orders/ORD1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 4001);
}

#[tokio::test]
async fn test_malformed_input_gets_error_body() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/Categories")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 5);
    assert!(!body["message"].as_str().unwrap().is_empty());

    let (status, body) = send(&app, Method::GET, "/api/Cakes/not-a-number", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let (status, body) = send(&app, Method::GET, "/api/Orders?bucket=someday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    // wrong field type is still a JSON error, not plain text
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Orders/ORD1/extra-charges",
        Some(json!({ "amount": "lots", "description": "Gold leaf" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}
