use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn put(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.put(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn delete(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.delete(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }
}

/// Each test gets its own in-memory database and an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = AppConfig {
        database: DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() },
        ..Default::default()
    };
    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()), client: reqwest::Client::new() })
}

async fn seed_stay(app: &TestApp) -> anyhow::Result<(i64, i64, i64)> {
    let (status, guest) = app
        .post("/api/v1/guests", json!({
            "name": "Ada Lovelace", "email": "ada@example.com", "phone": "+44 20 0000",
            "nationality": "GB", "id_type": "passport", "id_number": "P123"
        }))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let (status, room) = app
        .post("/api/v1/rooms", json!({
            "room_number": "305", "room_type": "Deluxe", "floor": 3, "capacity": 2, "price_per_night": 150.0
        }))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let guest_id = guest["data"]["id"].as_i64().unwrap_or_default();
    let room_id = room["data"]["id"].as_i64().unwrap_or_default();
    let (status, res) = app
        .post("/api/v1/reservations", json!({
            "guest_id": guest_id, "room_id": room_id,
            "check_in_date": "2030-06-01T15:00:00Z", "check_out_date": "2030-06-04T11:00:00Z",
            "total_price": 450.0
        }))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    Ok((guest_id, room_id, res["data"]["id"].as_i64().unwrap_or_default()))
}

#[tokio::test]
async fn health_metrics_and_docs() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");

    let (status, doc) = app.get("/api-docs/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(doc["paths"]["/api/v1/guests"].is_object());

    let text = app.client.get(app.url("/metrics")).send().await?.text().await?;
    assert!(text.contains("http_requests_total"));
    Ok(())
}

#[tokio::test]
async fn guest_lifecycle_and_error_envelopes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (guest_id, _, _) = seed_stay(&app).await?;

    let (status, dup) = app
        .post("/api/v1/guests", json!({
            "name": "Other", "email": "ada@example.com", "phone": "1",
            "nationality": "GB", "id_type": "passport", "id_number": "P9"
        }))
        .await?;
    assert_eq!(status, HttpStatusCode::CONFLICT);
    assert_eq!(dup["success"], false);

    let (status, bad) = app.post("/api/v1/guests", json!({"name": "", "email": "nope"})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(bad["success"], false);
    assert!(bad["error"].is_string());

    let res = app
        .client
        .post(app.url("/api/v1/guests"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let (status, detail) = app.get(&format!("/api/v1/guests/{guest_id}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(detail["data"]["email"], "ada@example.com");
    assert_eq!(detail["data"]["statistics"]["total_stays"], 1);
    assert_eq!(detail["data"]["reservations"].as_array().map(Vec::len), Some(1));

    let (status, hist) = app.get(&format!("/api/v1/guests/{guest_id}/history")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(hist["data"]["stays"][0]["room"]["room_number"], "305");

    let (status, _) = app.get("/api/v1/guests/9999").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    let (status, body) = app.delete("/api/v1/guests/9999").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = app.get("/api/v1/guests/abc").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn pagination_meta() -> anyhow::Result<()> {
    let app = start_server().await?;
    for n in 0..25 {
        let (status, _) = app
            .post("/api/v1/rooms", json!({
                "room_number": format!("R{n:02}"), "room_type": "Standard", "floor": 1, "capacity": 2, "price_per_night": 90.0
            }))
            .await?;
        assert_eq!(status, HttpStatusCode::CREATED);
    }
    let (status, page) = app.get("/api/v1/rooms?page=2&page_size=10").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(page["data"].as_array().map(Vec::len), Some(10));
    assert_eq!(page["meta"]["total"], 25);
    assert_eq!(page["meta"]["total_pages"], 3);
    assert_eq!(page["meta"]["page"], 2);

    let (status, far) = app.get("/api/v1/rooms?page=18446744073709551615").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(far["success"], true);
    assert_eq!(far["data"].as_array().map(Vec::len), Some(0));
    assert_eq!(far["meta"]["total"], 25);
    Ok(())
}

#[tokio::test]
async fn check_in_out_flow_updates_statuses() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, room_id, res_id) = seed_stay(&app).await?;

    let (status, ci) = app.post("/api/v1/check-ins", json!({"reservation_id": res_id, "id_verified": true})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(ci["data"]["reservation_id"], res_id);

    let (_, room) = app.get(&format!("/api/v1/rooms/{room_id}")).await?;
    assert_eq!(room["data"]["status"], "occupied");
    let (status, _) = app.post("/api/v1/check-ins", json!({"reservation_id": res_id})).await?;
    assert_eq!(status, HttpStatusCode::CONFLICT);

    let (status, _) = app.post("/api/v1/check-outs", json!({"reservation_id": res_id, "charges": 12.5})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let (_, room) = app.get(&format!("/api/v1/rooms/{room_id}")).await?;
    assert_eq!(room["data"]["status"], "cleaning");
    let (_, detail) = app.get(&format!("/api/v1/reservations/{res_id}")).await?;
    assert_eq!(detail["data"]["status"], "checked-out");
    assert_eq!(detail["data"]["nights"], 3);

    let (status, _) = app.get(&format!("/api/v1/check-outs/reservation/{res_id}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn tablet_order_and_dashboard() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, _, res_id) = seed_stay(&app).await?;
    let (_, item) = app
        .post("/api/v1/menu-items", json!({"name": "Pancakes", "price": 9.5, "category": "breakfast"}))
        .await?;
    let item_id = item["data"]["id"].as_i64().unwrap_or_default();
    app.post("/api/v1/menu-items", json!({"name": "Oysters", "price": 30.0, "category": "mains", "available": false}))
        .await?;

    let (status, menu) = app.get("/api/v1/in-room-tablet/menu").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(menu["data"].as_array().map(Vec::len), Some(1));

    let (status, order) = app
        .post("/api/v1/in-room-tablet/room-service-order", json!({
            "reservation_id": res_id, "items": [{"menu_item_id": item_id, "quantity": 2}]
        }))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(order["data"]["subtotal"], 19.0);
    assert_eq!(order["data"]["total"], 24.0);

    let (status, _) = app
        .post("/api/v1/in-room-tablet/room-service-order", json!({
            "reservation_id": res_id, "items": [{"menu_item_id": item_id, "quantity": 0}]
        }))
        .await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);

    let order_id = order["data"]["id"].as_i64().unwrap_or_default();
    let (status, delivered) = app
        .put(&format!("/api/v1/room-service-orders/{order_id}/status"), json!({"status": "delivered"}))
        .await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(delivered["data"]["delivered_at"].is_string());

    let (status, view) = app.get(&format!("/api/v1/in-room-tablet/reservation/{res_id}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(view["data"]["room_number"], "305");
    assert_eq!(view["data"]["check_in_time"], "15:00");

    let (status, stats) = app.get("/api/v1/dashboard/stats").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(stats["data"]["total_rooms"], 1);
    assert_eq!(stats["data"]["today_revenue"], 24.0);

    let (status, revenue) = app.get("/api/v1/dashboard/revenue").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(revenue["data"]["top_service"], "room-service");
    assert_eq!(revenue["data"]["today_orders"], 1);
    Ok(())
}
