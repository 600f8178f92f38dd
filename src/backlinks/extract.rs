//! Backlink table extraction from rendered HTML.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::config::{BACKLINK_ROW_SELECTOR, MAX_BACKLINK_ROWS, MISSING_CELL_PLACEHOLDER};
use crate::utils::parse_selector_with_fallback;

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(BACKLINK_ROW_SELECTOR, "backlink rows"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("td", "backlink cells"));

/// Zero-based column positions in the report table.
const SOURCE_COLUMN: usize = 1;
const ANCHOR_COLUMN: usize = 2;
const LINK_TYPE_COLUMN: usize = 4;

/// One inbound link as listed by the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklinkRecord {
    pub source: String,
    pub anchor: String,
    pub link_type: String,
}

/// Reads up to the first ten rows of the backlink table.
pub fn extract_backlinks(html: &str) -> Vec<BacklinkRecord> {
    let document = Html::parse_document(html);

    document
        .select(&ROW_SELECTOR)
        .take(MAX_BACKLINK_ROWS)
        .map(|row| {
            let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
            BacklinkRecord {
                source: cell_text(&cells, SOURCE_COLUMN),
                anchor: cell_text(&cells, ANCHOR_COLUMN),
                link_type: cell_text(&cells, LINK_TYPE_COLUMN),
            }
        })
        .collect()
}

fn cell_text(cells: &[ElementRef<'_>], index: usize) -> String {
    cells
        .get(index)
        .map(|cell| {
            cell.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| MISSING_CELL_PLACEHOLDER.to_string())
}
