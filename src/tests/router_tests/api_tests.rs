use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

fn json_for(path: &str) -> serde_json::Value {
    let state = test_state();
    let resp = handle(get(path), &state).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn api_on_sale() {
    let v = json_for("/api/shoe/sale-racer");
    assert_eq!(v["variant"], "on-sale");
    assert_eq!(v["primaryPrice"], "$100.00");
    assert_eq!(v["strikethrough"], true);
    assert_eq!(v["secondaryPrice"], "$80.00");
    assert_eq!(v["badge"], "Sale");
    assert_eq!(v["href"], "/shoe/sale-racer");
}

#[test]
fn api_new_release() {
    let v = json_for("/api/shoe/fresh-kicks");
    assert_eq!(v["variant"], "new-release");
    assert_eq!(v["primaryPrice"], "$50.00");
    assert_eq!(v["badge"], "Just Released!");
    assert!(v["secondaryPrice"].is_null());
}

#[test]
fn api_default() {
    let v = json_for("/api/shoe/old-faithful");
    assert_eq!(v["variant"], "default");
    assert_eq!(v["primaryPrice"], "$75.00");
    assert!(v["badge"].is_null());
    assert_eq!(v["colorLabel"], "Colors");
}

#[test]
fn api_unknown_shoe() {
    let state = test_state();
    let err = handle(get("/api/shoe/ghost"), &state).unwrap_err();
    assert_eq!(err.status(), 404);
}
