use crate::catalog::{Catalog, SortOrder};
use crate::domain::{Clock, DisplayModel, RecencyWindow};
use crate::errors::ServerError;
use crate::responses::{error_response, html_response, json_response, ResultResp};
use crate::templates;
use astra::{Request, Response};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Everything a request handler needs. Shared read-only across workers.
pub struct AppState {
    pub catalog: Catalog,
    pub clock: Box<dyn Clock>,
    pub recency: RecencyWindow,
}

impl AppState {
    fn card(&self, slug: &str, now: DateTime<Utc>) -> Result<DisplayModel, ServerError> {
        let listing = self.catalog.get(slug).ok_or(ServerError::NotFound)?;
        Ok(DisplayModel::from_listing(listing, now, self.recency))
    }
}

/// Entry point for the server loop: failures become HTML error pages.
pub fn respond(req: Request, state: &AppState) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(%method, %path, status = err.status(), error = %err, "request failed");
            error_response(err)
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::debug!(method, path, "request");

    let now = state.clock.now();

    match (method, path) {
        ("GET", "/") => {
            let params = parse_query(&req);
            let sort = match params.get("sort") {
                None => SortOrder::default(),
                Some(raw) => SortOrder::parse(raw)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown sort '{raw}'")))?,
            };

            let cards: Vec<DisplayModel> = state
                .catalog
                .sorted(sort)
                .into_iter()
                .map(|listing| DisplayModel::from_listing(listing, now, state.recency))
                .collect();

            html_response(templates::pages::shoes_page(&cards, sort))
        }
        ("GET", p) if p.starts_with("/shoe/") => {
            let slug = slug_from(p, "/shoe/")?;
            html_response(templates::pages::shoe_page(&state.card(slug, now)?))
        }
        ("GET", p) if p.starts_with("/api/shoe/") => {
            let slug = slug_from(p, "/api/shoe/")?;
            json_response(&state.card(slug, now)?)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn slug_from<'a>(path: &'a str, prefix: &str) -> Result<&'a str, ServerError> {
    match path.strip_prefix(prefix) {
        Some(slug) if !slug.is_empty() && !slug.contains('/') => Ok(slug),
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
