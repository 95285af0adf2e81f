use serde::Serialize;

/// A recipe extracted from a single Bon Appetit page.
///
/// Every field is always present: data the page did not provide is an empty
/// string (or an empty list for `ingredients`/`directions`), never a missing
/// key. Consumers can print or serialize the record unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    /// Composed "quantity unit name" lines, in document order.
    pub ingredients: Vec<String>,
    /// Instruction paragraphs, in document order.
    pub directions: Vec<String>,
    pub servings: String,
    /// Fixed origin label, always "Bon Appetit".
    pub source: String,
    /// The URL the caller asked for, verbatim.
    pub source_url: String,
    pub img_url: String,
    pub cooking_time: String,
    pub total_time: String,
    pub notes: String,
}
