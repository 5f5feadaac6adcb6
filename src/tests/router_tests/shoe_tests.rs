use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn detail_page_for_sale_shoe() {
    let state = test_state();
    let resp = handle(get("/shoe/sale-racer"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<title>Sale Racer</title>"));
    assert!(body.contains(r#"<span class="price price--struck">$100.00</span>"#));
    assert!(body.contains(r#"<span class="sale-price">$80.00</span>"#));
    assert!(body.contains(">Sale</div>"));
}

#[test]
fn detail_page_for_new_release() {
    let state = test_state();
    let body = body_string(handle(get("/shoe/fresh-kicks"), &state).unwrap());

    assert!(body.contains("Just Released!"));
    assert!(body.contains(r#"<span class="price">$50.00</span>"#));
    assert!(!body.contains(r#"class="sale-price""#));
}

#[test]
fn unknown_shoe_is_not_found() {
    let state = test_state();
    let err = handle(get("/shoe/missing"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(get("/shoe/"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn unknown_route_renders_404_page() {
    let state = test_state();
    let err = handle(get("/nope"), &state).unwrap_err();

    let resp = error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}
