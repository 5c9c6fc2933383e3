// Property-based tests for order creation
//
// For any set of requested lines against an existing user, POST /api/orders
// creates exactly one order and one detail line per request line whose
// product exists, in request order. Lines for unknown products never fail
// the request.

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

// Renamed so the built-in #[test] stays visible inside proptest!
use actix_web::test as actix_test;
use proptest::prelude::*;
use serde_json::Value;

use helpers::*;

const KNOWN_PRODUCTS: i64 = 5;

#[derive(Debug, PartialEq)]
struct Outcome {
    status: u16,
    orders: usize,
    details: usize,
    lines: Vec<(String, i64)>,
}

fn create_order(lines: Vec<(i64, i32)>) -> Outcome {
    actix_web::rt::System::new().block_on(async move {
        let ctx = TestContext::new();
        let user = seed_user(&ctx.state, "prop-user").await;
        seed_products(&ctx.state, KNOWN_PRODUCTS as usize).await;

        let app = test_app!(ctx.state);

        let req = actix_test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_payload(user.id, &lines))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = actix_test::read_body_json(resp).await;

        let lines = body["orderDetails"]
            .as_array()
            .map(|lines| {
                lines
                    .iter()
                    .map(|line| {
                        (
                            line["productName"].as_str().unwrap_or_default().to_string(),
                            line["quantity"].as_i64().unwrap_or_default(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        Outcome {
            status,
            orders: ctx.store.order_count(),
            details: ctx.store.detail_count(),
            lines,
        }
    })
}

fn line_strategy() -> impl Strategy<Value = (i64, i32)> {
    // Product IDs above KNOWN_PRODUCTS do not exist
    (1i64..=12, 1i32..=50)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_one_detail_per_known_product_line(
        lines in prop::collection::vec(line_strategy(), 0..8)
    ) {
        let expected: Vec<(String, i64)> = lines
            .iter()
            .filter(|(product_id, _)| *product_id <= KNOWN_PRODUCTS)
            .map(|(product_id, quantity)| (format!("product-{}", product_id), *quantity as i64))
            .collect();

        let outcome = create_order(lines);

        prop_assert_eq!(outcome.status, 201);
        prop_assert_eq!(outcome.orders, 1);
        prop_assert_eq!(outcome.details, expected.len());
        prop_assert_eq!(outcome.lines, expected);
    }

    #[test]
    fn test_unknown_products_only_still_creates_order(
        lines in prop::collection::vec((100i64..1000, 1i32..=9), 1..5)
    ) {
        let outcome = create_order(lines);

        prop_assert_eq!(outcome.status, 201);
        prop_assert_eq!(outcome.orders, 1);
        prop_assert_eq!(outcome.details, 0);
        prop_assert!(outcome.lines.is_empty());
    }

    #[test]
    fn test_any_non_positive_quantity_rejects_whole_order(
        lines in prop::collection::vec(line_strategy(), 0..6),
        bad_quantity in -20i32..=0,
        position in 0usize..6
    ) {
        let mut lines = lines;
        let position = position.min(lines.len());
        lines.insert(position, (1, bad_quantity));

        let outcome = create_order(lines);

        prop_assert_eq!(outcome.status, 400);
        prop_assert_eq!(outcome.orders, 0);
        prop_assert_eq!(outcome.details, 0);
    }
}

#[test]
fn test_order_service_save_persists_header_only() {
    actix_web::rt::System::new().block_on(async {
        let ctx = TestContext::new();
        let user = seed_user(&ctx.state, "header-only").await;

        let saved = ctx
            .state
            .orders
            .save(order_api::orders::NewOrder {
                user_id: user.id,
                shipping_address: Some("3 Quay Lane".to_string()),
                phone_number: None,
                notes: None,
            })
            .await
            .unwrap();

        assert_eq!(saved.user.user_name, "header-only");
        assert!(saved.order_details.is_empty());
        assert_eq!(ctx.store.order_count(), 1);
        assert_eq!(ctx.store.detail_count(), 0);
    });
}
