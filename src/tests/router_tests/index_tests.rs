// src/tests/router_tests/index_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn index_renders_every_card() {
    let state = test_state();
    let resp = handle(get("/"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.contains(r#"href="/shoe/sale-racer""#));
    assert!(body.contains(r#"href="/shoe/fresh-kicks""#));
    assert!(body.contains(r#"href="/shoe/old-faithful""#));
    assert!(body.contains("shoe-card--on-sale"));
    assert!(body.contains("shoe-card--new-release"));
    assert!(body.contains("shoe-card--default"));
}

#[test]
fn index_defaults_to_newest_first() {
    let state = test_state();
    let body = body_string(handle(get("/"), &state).unwrap());

    let fresh = body.find("Fresh Kicks").unwrap();
    let old = body.find("Old Faithful").unwrap();
    let sale = body.find("Sale Racer").unwrap();
    assert!(fresh < old && old < sale);
}

#[test]
fn index_sorts_by_effective_price() {
    let state = test_state();
    let body = body_string(handle(get("/?sort=price"), &state).unwrap());

    // 50.00, 75.00, then 80.00 on sale
    let fresh = body.find("Fresh Kicks").unwrap();
    let old = body.find("Old Faithful").unwrap();
    let sale = body.find("Sale Racer").unwrap();
    assert!(fresh < old && old < sale);
    assert!(body.contains(r#"<a href="/?sort=price" class="active">"#));
}

#[test]
fn index_rejects_unknown_sort() {
    let state = test_state();
    let err = handle(get("/?sort=random"), &state).unwrap_err();
    assert_eq!(err.status(), 400);
}
