use crate::model::Recipe;
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Origin label stamped on every extracted recipe.
pub const SOURCE: &str = "Bon Appetit";

/// Line-break + tab artifact that Bon Appetit leaves inside ingredient names.
const NAME_ARTIFACT: &str = "\u{2028}\t";

/// Extracts a [`Recipe`] from one Bon Appetit page layout.
///
/// Each field is pulled by its own rule; a rule that finds nothing yields an
/// empty value for that field and leaves every other field alone. Extraction
/// never fails: an unrecognized page produces a recipe with empty fields,
/// not an error.
pub struct BonAppetitExtractor;

impl BonAppetitExtractor {
    pub fn extract(&self, document: &Html, source_url: &str) -> Recipe {
        debug!("Extracting recipe from {}", source_url);

        Recipe {
            title: self.title(document),
            ingredients: self.ingredients(document),
            directions: self.directions(document),
            servings: self.servings(document),
            source: SOURCE.to_string(),
            source_url: source_url.to_string(),
            img_url: self.img_url(document),
            cooking_time: self.cooking_time(document),
            total_time: self.total_time(document),
            notes: self.notes(document),
        }
    }

    fn title(&self, document: &Html) -> String {
        first_text(document, "h3.recipe-title").unwrap_or_default()
    }

    fn img_url(&self, document: &Html) -> String {
        let selector = Selector::parse(r#"meta[property="og:image"]"#).unwrap();
        document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|content| content.to_string())
            .unwrap_or_default()
    }

    fn ingredients(&self, document: &Html) -> Vec<String> {
        // All-or-nothing: one ingredient missing a quantity/unit/name child
        // discards the whole list, while zero ingredient nodes is simply an
        // empty list.
        self.collect_ingredients(document).unwrap_or_default()
    }

    fn collect_ingredients(&self, document: &Html) -> Option<Vec<String>> {
        let selector = Selector::parse("span.ingredient").unwrap();
        let mut lines = Vec::new();
        for ingredient in document.select(&selector) {
            let quantity = child_text(ingredient, "span.quantity")?;
            let unit = child_text(ingredient, "span.unit")?;
            let name = child_text(ingredient, "span.name")?.replace(NAME_ARTIFACT, "");
            lines.push(compose_line(&quantity, &unit, &name));
        }
        debug!("Found {} ingredients", lines.len());
        Some(lines)
    }

    fn directions(&self, document: &Html) -> Vec<String> {
        let selector = Selector::parse(r#"div[itemprop="recipeInstructions"]"#).unwrap();
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    fn servings(&self, document: &Html) -> String {
        first_text(document, "span.total-servings")
            .map(|text| suffix_after(&text, "Servings: "))
            .unwrap_or_default()
    }

    fn cooking_time(&self, document: &Html) -> String {
        first_text(document, r#"span.active-time[itemprop=""]"#)
            .map(|text| suffix_after(&text, "active: "))
            .unwrap_or_default()
    }

    fn total_time(&self, document: &Html) -> String {
        first_text(document, r#"span.active-time[itemprop="totalTime"]"#)
            .map(|text| suffix_after(&text, "total: "))
            .unwrap_or_default()
    }

    fn notes(&self, document: &Html) -> String {
        let selector = Selector::parse("div.content-intro").unwrap();
        document
            .select(&selector)
            .next()
            .and_then(|intro| child_text(intro, "h2"))
            .unwrap_or_default()
    }
}

fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).unwrap();
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

fn child_text(element: ElementRef, css: &str) -> Option<String> {
    let selector = Selector::parse(css).unwrap();
    element
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

/// Everything after the first occurrence of `delimiter`, or `""` when the
/// text does not contain it.
fn suffix_after(text: &str, delimiter: &str) -> String {
    match text.split_once(delimiter) {
        Some((_, suffix)) => suffix.to_string(),
        None => String::new(),
    }
}

/// Joins quantity, unit and name with single spaces, skipping the separator
/// in front of any empty part. The order is fixed.
fn compose_line(quantity: &str, unit: &str, name: &str) -> String {
    let mut line = String::new();
    if !quantity.is_empty() {
        line.push_str(quantity);
    }
    if !unit.is_empty() {
        if !quantity.is_empty() {
            line.push(' ');
        }
        line.push_str(unit);
    }
    if !name.is_empty() {
        if !quantity.is_empty() || !unit.is_empty() {
            line.push(' ');
        }
        line.push_str(name);
    }
    line
}
