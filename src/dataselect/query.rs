//! Filter and pagination parameters for one selection run

use serde::{Deserialize, Serialize};

/// Combined filter and pagination parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSelectQuery {
    pub filter: FilterQuery,
    pub paginate: PaginateQuery,
}

/// Substring match against the item name. An empty name matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub name: String,
}

/// Page selection. `limit` is the page size, `page` is 1-indexed.
///
/// Pagination only applies when both values are positive; anything else
/// returns the full collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginateQuery {
    pub limit: i64,
    pub page: i64,
}

impl DataSelectQuery {
    pub fn new(filter_name: impl Into<String>, limit: i64, page: i64) -> Self {
        Self {
            filter: FilterQuery {
                name: filter_name.into(),
            },
            paginate: PaginateQuery { limit, page },
        }
    }
}

impl PaginateQuery {
    /// Whether this query narrows the collection at all
    pub fn is_enabled(&self) -> bool {
        self.limit > 0 && self.page > 0
    }

    /// Half-open index range `[start, end)` for a collection of `len` items.
    ///
    /// Returns `None` when pagination is disabled. A page past the end of the
    /// data yields an empty range rather than an out-of-bounds start.
    pub fn range(&self, len: usize) -> Option<std::ops::Range<usize>> {
        if !self.is_enabled() {
            return None;
        }

        let start = self
            .limit
            .checked_mul(self.page - 1)
            .and_then(|s| usize::try_from(s).ok())
            .unwrap_or(usize::MAX);

        if start >= len {
            return Some(len..len);
        }

        let end = self
            .limit
            .checked_mul(self.page)
            .and_then(|e| usize::try_from(e).ok())
            .unwrap_or(usize::MAX)
            .min(len);

        Some(start..end)
    }
}
