use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product row from the catalog spreadsheet, ready for display.
///
/// Stock and price are display strings exactly as typed in the sheet
/// (`"R$ 4.500,00"`); the sheet mixes currency symbols and locale
/// formatting, so they are never coerced to numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Opaque identifier from the sheet's ID column. Not guaranteed unique.
    pub external_id: String,
    pub description: String,
    /// Directly loadable image URL or embedded `data:` image.
    pub image_reference: String,
    pub stock_count: String,
    pub price: String,
    pub category: String,
}

/// Where the entries of a [`CatalogSnapshot`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    /// Parsed from the spreadsheet export.
    Sheet,
    /// The built-in fallback set from [`crate::default_entries`].
    Defaults,
}

impl std::fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotSource::Sheet => write!(f, "sheet"),
            SnapshotSource::Defaults => write!(f, "defaults"),
        }
    }
}

/// The complete catalog as published at one point in time.
///
/// Snapshots are immutable once built and shared behind an [`std::sync::Arc`]; a
/// refresh replaces the whole snapshot rather than editing entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
    source: SnapshotSource,
    generation: u64,
    refreshed_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Snapshot holding the built-in default entries.
    #[must_use]
    pub fn defaults(generation: u64) -> Self {
        Self {
            entries: crate::default_entries(),
            source: SnapshotSource::Defaults,
            generation,
            refreshed_at: Utc::now(),
        }
    }

    /// Snapshot built from a successful sheet parse.
    ///
    /// Callers are expected to reject empty parses before publishing; an
    /// empty `entries` here would violate the "never empty" guarantee.
    #[must_use]
    pub fn from_sheet(entries: Vec<CatalogEntry>, generation: u64) -> Self {
        debug_assert!(!entries.is_empty(), "sheet snapshot must not be empty");
        Self {
            entries,
            source: SnapshotSource::Sheet,
            generation,
            refreshed_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn source(&self) -> SnapshotSource {
        self.source
    }

    /// Publish counter; `0` for the initial snapshot installed at startup.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose `external_id` matches `id`.
    #[must_use]
    pub fn find_by_external_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.external_id == id)
    }
}
