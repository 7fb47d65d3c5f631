//! Name filtering and pagination for directory-style listings.
//!
//! The user and franchise listing endpoints share these semantics:
//!
//! - `name` is a case-insensitive substring filter. A wildcard-only pattern
//!   (`*`) matches everything; a single leading and/or trailing `*` is
//!   stripped before matching, so `*pizza*`, `pizza*`, and `pizza` all match
//!   "LotaPizza".
//! - `page` is a zero-based page index over the filtered list, `limit` the
//!   fixed page size. `more` is true iff `(page + 1) * limit` is still short
//!   of the filtered count.

use serde::{Deserialize, Serialize};

/// Default page size when the client omits `limit`.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Parsed listing query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    /// Zero-based page index.
    #[serde(default)]
    pub page: usize,
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Raw name filter pattern, if any.
    pub name: Option<String>,
}

const fn default_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_PAGE_LIMIT,
            name: None,
        }
    }
}

impl ListQuery {
    /// The name pattern for this query.
    #[must_use]
    pub fn pattern(&self) -> NamePattern {
        NamePattern::parse(self.name.as_deref())
    }
}

/// A parsed name filter pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    /// Match every record (absent filter or wildcard-only pattern).
    All,
    /// Case-insensitive substring match (pattern stored lowercased).
    Substring(String),
}

impl NamePattern {
    /// Parse a raw `name` query value.
    ///
    /// `None`, the empty string, and wildcard-only patterns all match
    /// everything. Otherwise a single leading and a single trailing `*` are
    /// stripped and the remainder is matched as a lowercase substring.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else { return Self::All };

        let stripped = raw.strip_prefix('*').unwrap_or(raw);
        let stripped = stripped.strip_suffix('*').unwrap_or(stripped);

        if stripped.is_empty() || stripped.chars().all(|c| c == '*') {
            Self::All
        } else {
            Self::Substring(stripped.to_lowercase())
        }
    }

    /// True if `name` matches this pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Substring(needle) => name.to_lowercase().contains(needle),
        }
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// True iff further pages exist.
    pub more: bool,
    /// The requested page index.
    pub page: usize,
    /// The requested page size.
    pub limit: usize,
    /// Total filtered record count.
    pub total: usize,
    /// Total page count.
    pub total_pages: usize,
}

/// Slice one page out of an already-filtered list.
///
/// The returned slice equals `filtered[page*limit .. page*limit + limit]`
/// (clamped to the list length), and `more == (page + 1) * limit < total`.
/// A zero `limit` yields an empty page with `more == false`.
#[must_use]
pub fn paginate<T>(filtered: Vec<T>, page: usize, limit: usize) -> Page<T> {
    let total = filtered.len();
    let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
    let items: Vec<T> = filtered
        .into_iter()
        .skip(page.saturating_mul(limit))
        .take(limit)
        .collect();

    Page {
        items,
        more: page.saturating_add(1).saturating_mul(limit) < total,
        page,
        limit,
        total,
        total_pages,
    }
}
