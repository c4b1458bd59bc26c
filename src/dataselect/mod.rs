//! Generic filter, sort and paginate pipeline for resource lists
//!
//! A [`DataSelector`] owns a list of [`DataCell`] adapters and the
//! [`DataSelectQuery`] to apply to them. Callers normally go through
//! [`select`], which runs the stages in their fixed order:
//!
//! 1. filter by name substring
//! 2. capture the total (post-filter, pre-pagination)
//! 3. sort by creation time, newest first
//! 4. cut out the requested page

pub mod cell;
pub mod query;

pub use cell::{DataCell, PodCell};
pub use query::{DataSelectQuery, FilterQuery, PaginateQuery};

use serde::{Deserialize, Serialize};

/// Working set for one selection run
#[derive(Debug, Clone)]
pub struct DataSelector<C> {
    cells: Vec<C>,
    query: DataSelectQuery,
}

impl<C: DataCell> DataSelector<C> {
    pub fn new(cells: Vec<C>, query: DataSelectQuery) -> Self {
        Self { cells, query }
    }

    /// Keep cells whose name contains the filter pattern (case-sensitive).
    /// An empty pattern keeps everything.
    pub fn filter(mut self) -> Self {
        let pattern = self.query.filter.name.as_str();
        if pattern.is_empty() {
            return self;
        }

        self.cells.retain(|cell| cell.name().contains(pattern));
        self
    }

    /// Order by creation time, newest first.
    ///
    /// Cells with equal timestamps keep their input order. Cells without a
    /// timestamp go last.
    pub fn sort(mut self) -> Self {
        // sort_by is stable
        self.cells
            .sort_by(|a, b| b.creation_time().cmp(&a.creation_time()));
        self
    }

    /// Keep only the requested page. Disabled pagination leaves the cells as
    /// they are; a page past the end leaves nothing.
    pub fn paginate(mut self) -> Self {
        if let Some(range) = self.query.paginate.range(self.cells.len()) {
            self.cells.truncate(range.end);
            self.cells.drain(..range.start);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<C> {
        self.cells
    }
}

/// One page of results plus the number of items that matched the filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection<T> {
    pub total: usize,
    pub items: Vec<T>,
}

/// Run the full pipeline over `items` using the adapter `C`.
///
/// `total` counts the items that passed the filter, before pagination, so
/// clients can work out how many pages exist.
pub fn select<T, C>(items: Vec<T>, query: &DataSelectQuery) -> Selection<T>
where
    C: DataCell + From<T>,
    T: From<C>,
{
    let cells = items.into_iter().map(C::from).collect();

    let filtered = DataSelector::new(cells, query.clone()).filter();
    let total = filtered.len();

    let page = filtered.sort().paginate();

    Selection {
        total,
        items: page.into_cells().into_iter().map(T::from).collect(),
    }
}
