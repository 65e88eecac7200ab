//! Parsing of the spreadsheet CSV export into [`CatalogEntry`] rows.
//!
//! The export is read line by line with a small quote-aware scanner. Quoted
//! fields may contain commas (`"R$ 99,00"`) but never span physical lines.
//! Rows that are too short or have no name are skipped, never reported as
//! errors.

use storefront_core::CatalogEntry;

use crate::normalize::normalize_image_reference;

/// Minimum number of fields for a row to be mapped into an entry.
pub const MIN_FIELDS: usize = 7;

/// Column offsets in the sheet, left to right.
mod column {
    pub const NAME: usize = 0;
    pub const EXTERNAL_ID: usize = 1;
    pub const DESCRIPTION: usize = 2;
    pub const IMAGE: usize = 3;
    pub const STOCK: usize = 4;
    pub const PRICE: usize = 5;
    pub const CATEGORY: usize = 6;
}

/// Result of parsing one export body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCatalog {
    /// Accepted rows, in sheet order.
    pub entries: Vec<CatalogEntry>,
    /// Data rows dropped for having fewer than [`MIN_FIELDS`] fields or an
    /// empty name. The header is not counted.
    pub skipped_rows: usize,
}

/// Parses a full CSV export body.
///
/// Blank lines are ignored and the first non-blank line is treated as the
/// header, whatever it contains.
#[must_use]
pub fn parse_catalog(body: &str) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();

    for (line_no, line) in body
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .skip(1)
    {
        let fields = split_fields(line);
        match map_row(&fields) {
            Some(entry) => parsed.entries.push(entry),
            None => {
                tracing::debug!(
                    line_no,
                    field_count = fields.len(),
                    "skipping catalog row without name or with too few fields"
                );
                parsed.skipped_rows += 1;
            }
        }
    }

    parsed
}

/// Splits one physical line into trimmed fields.
///
/// A `"` toggles quoted mode and is dropped; a `,` separates fields only
/// outside quotes. An unterminated quote swallows the rest of the line into
/// the current field.
#[must_use]
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_owned());

    fields
}

/// Maps positional fields to a [`CatalogEntry`].
///
/// Returns `None` when there are fewer than [`MIN_FIELDS`] fields or the name
/// is empty. Extra trailing columns are ignored.
#[must_use]
pub fn map_row(fields: &[String]) -> Option<CatalogEntry> {
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let field = |idx: usize| clean_field(&fields[idx]);

    let name = field(column::NAME);
    if name.is_empty() {
        return None;
    }

    Some(CatalogEntry {
        name,
        external_id: field(column::EXTERNAL_ID),
        description: field(column::DESCRIPTION),
        image_reference: normalize_image_reference(&fields[column::IMAGE]),
        stock_count: field(column::STOCK),
        price: field(column::PRICE),
        category: field(column::CATEGORY),
    })
}

fn clean_field(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_owned()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
