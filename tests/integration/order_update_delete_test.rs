// Integration tests for PUT and DELETE /api/orders/{id}

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::test;
use serde_json::{json, Value};

use helpers::*;

/// Seed a user and two products and create one order with two lines.
/// Returns the new order ID.
async fn create_sample_order(ctx: &TestContext) -> i64 {
    let user = seed_user(&ctx.state, "alice").await;
    seed_products(&ctx.state, 2).await;

    let app = test_app!(ctx.state);
    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(order_payload(user.id, &[(1, 1), (2, 5)]))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    created["id"].as_i64().unwrap()
}

#[actix_web::test]
async fn test_update_overwrites_present_fields_only() {
    let ctx = TestContext::new();
    let id = create_sample_order(&ctx).await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}", id))
        .set_json(json!({
            "id": 999,
            "shippingAddress": "7 New Street",
            "notes": "Leave with neighbour",
            "orderDetails": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let order: Value = test::read_body_json(resp).await;
    assert_eq!(order["id"].as_i64(), Some(id));
    assert_eq!(order["shippingAddress"], "7 New Street");
    assert_eq!(order["notes"], "Leave with neighbour");
    assert_eq!(order["phoneNumber"], "555-0142");
    assert_eq!(order["user"]["userName"], "alice");

    // Lines are not touched by an update
    assert_eq!(order["orderDetails"].as_array().unwrap().len(), 2);
    assert_eq!(ctx.store.detail_count_for(id), 2);
}

#[actix_web::test]
async fn test_update_can_move_order_to_another_user() {
    let ctx = TestContext::new();
    let id = create_sample_order(&ctx).await;
    let bob = seed_user(&ctx.state, "bob").await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}", id))
        .set_json(json!({ "userId": bob.id }))
        .to_request();
    let order: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(order["userId"].as_i64(), Some(bob.id));
    assert_eq!(order["user"]["userName"], "bob");
}

#[actix_web::test]
async fn test_update_with_unknown_user_returns_400_and_keeps_order() {
    let ctx = TestContext::new();
    let id = create_sample_order(&ctx).await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}", id))
        .set_json(json!({ "userId": 404, "notes": "should not stick" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get()
        .uri(&format!("/api/orders/{}", id))
        .to_request();
    let order: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(order["notes"], "Ring twice");
    assert_eq!(order["user"]["userName"], "alice");
}

#[actix_web::test]
async fn test_update_unknown_order_returns_404() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::put()
        .uri("/api/orders/12")
        .set_json(json!({ "notes": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_update_with_empty_body_returns_order_unchanged() {
    let ctx = TestContext::new();
    let id = create_sample_order(&ctx).await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}", id))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let order: Value = test::read_body_json(resp).await;
    assert_eq!(order["shippingAddress"], "12 Harbour Road");
}

#[actix_web::test]
async fn test_delete_then_get_returns_404() {
    let ctx = TestContext::new();
    let id = create_sample_order(&ctx).await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/orders/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/orders/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // Lines go with their order
    assert_eq!(ctx.store.order_count(), 0);
    assert_eq!(ctx.store.detail_count(), 0);
}

#[actix_web::test]
async fn test_delete_unknown_order_returns_404() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::delete().uri("/api/orders/31").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_delete_twice_returns_404_the_second_time() {
    let ctx = TestContext::new();
    let id = create_sample_order(&ctx).await;
    let app = test_app!(ctx.state);

    let uri = format!("/api/orders/{}", id);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_deleted_order_disappears_from_list() {
    let ctx = TestContext::new();
    let id = create_sample_order(&ctx).await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(order_payload(1, &[(2, 1)]))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/orders/{}", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::get().uri("/api/orders").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["orderId"], second["id"]);
}

#[actix_web::test]
async fn test_order_detail_service_saves_single_line() {
    let ctx = TestContext::new();
    let id = create_sample_order(&ctx).await;

    let saved = ctx
        .state
        .order_details
        .save(order_api::orders::NewOrderDetail {
            order_id: id,
            product_id: 1,
            quantity: 9,
        })
        .await
        .unwrap();
    assert_eq!(saved.product.product_name, "product-1");

    let lines = ctx
        .state
        .order_details
        .get_order_details_by_order_id(id)
        .await
        .unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].quantity, 9);
}
