pub mod error;
pub mod extractors;
pub mod model;

use std::time::Duration;

use log::{debug, error};
use reqwest::header::{HeaderMap, USER_AGENT};
use scraper::Html;

use crate::error::ImportError;
use crate::extractors::BonAppetitExtractor;
use crate::model::Recipe;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the raw HTML of a recipe page.
///
/// HTTP error statuses count as failures, the same as network errors.
pub fn fetch_page(url: &str) -> Result<String, ImportError> {
    // Set up headers with a user agent
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".parse()?);

    let body = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?
        .get(url)
        .headers(headers)
        .send()?
        .error_for_status()?
        .text()?;

    Ok(body)
}

/// Fetches a Bon Appetit page and extracts its recipe.
///
/// Returns `None` only when the fetch itself fails; a page that was fetched
/// but does not match the expected layout still yields a recipe, with the
/// unmatched fields empty.
pub fn scrape_recipe(url: &str) -> Option<Recipe> {
    let body = match fetch_page(url) {
        Ok(body) => body,
        Err(err) => {
            error!("Failed to fetch {}: {}", url, err);
            return None;
        }
    };

    let document = Html::parse_document(&body);
    let recipe = BonAppetitExtractor.extract(&document, url);
    debug!("{:#?}", recipe);

    Some(recipe)
}
