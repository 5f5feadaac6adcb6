use crate::catalog::Catalog;
use crate::domain::{FixedClock, Listing, RecencyWindow};
use crate::router::AppState;
use astra::{Body, Request, Response};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use http::Method;
use std::io::Read;

/// The instant every router test treats as "now".
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn days_ago(days: i64) -> NaiveDate {
    (test_now() - Duration::days(days)).date_naive()
}

fn listing(
    slug: &str,
    name: &str,
    price: u64,
    sale_price: Option<u64>,
    released: NaiveDate,
) -> Listing {
    Listing {
        slug: slug.into(),
        name: name.into(),
        image_src: format!("/assets/{slug}.jpg"),
        price,
        sale_price,
        release_date: released,
        num_of_colors: 2,
    }
}

/// Three shoes, one per variant.
pub fn test_state() -> AppState {
    let catalog = Catalog::new(vec![
        listing("sale-racer", "Sale Racer", 10000, Some(8000), days_ago(3650)),
        listing("fresh-kicks", "Fresh Kicks", 5000, None, days_ago(5)),
        listing("old-faithful", "Old Faithful", 7500, None, days_ago(730)),
    ])
    .unwrap_or_else(|e| panic!("test catalog invalid: {e}"));

    AppState {
        catalog,
        clock: Box::new(FixedClock(test_now())),
        recency: RecencyWindow::default(),
    }
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
