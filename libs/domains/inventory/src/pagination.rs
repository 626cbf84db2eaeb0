//! Offset-based paging.
//!
//! A [`PageRequest`] keeps the raw `offset` and `limit` a caller asked for
//! instead of a page number, so `skip=5&limit=10` skips exactly five rows.
//! Stores answer with a [`Page`] carrying the rows and the total row count.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};

/// Column a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortField {
    #[default]
    Id,
    Name,
    ReleaseDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort order of a listing. Ties on a non-id field are broken by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

/// Parses `field` or `field,direction`, e.g. `release_date,desc`.
impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, direction)) => (field.trim(), Some(direction.trim())),
            None => (s.trim(), None),
        };

        let field = SortField::from_str(field)
            .map_err(|_| format!("unknown sort field '{}'", field))?;
        let direction = match direction {
            Some(direction) => SortDirection::from_str(direction)
                .map_err(|_| format!("unknown sort direction '{}'", direction))?,
            None => SortDirection::default(),
        };

        Ok(Self::new(field, direction))
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Requested window over a sorted result set.
///
/// The descriptor does not validate its bounds; callers check `limit`
/// before building one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    limit: u64,
    offset: u64,
    sort: SortOrder,
}

impl PageRequest {
    /// Window of `limit` rows starting after `offset` rows, ordered by id
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit,
            offset,
            sort: SortOrder::default(),
        }
    }

    pub fn with_sort(self, sort: SortOrder) -> Self {
        Self { sort, ..self }
    }

    /// `offset / limit`, or 0 for a zero limit
    pub fn page_number(&self) -> u64 {
        self.offset.checked_div(self.limit).unwrap_or(0)
    }

    pub fn page_size(&self) -> u64 {
        self.limit
    }

    /// Rows to skip. Used as-is, never recomputed from the page number.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            ..*self
        }
    }

    pub fn previous_or_first(&self) -> Self {
        if self.has_previous() {
            Self {
                offset: self.offset - self.limit,
                ..*self
            }
        } else {
            *self
        }
    }

    pub fn first(&self) -> Self {
        Self { offset: 0, ..*self }
    }

    /// True only when more than one full page lies before this one.
    ///
    /// An offset equal to the limit reports no previous page even though
    /// `limit` rows were skipped.
    pub fn has_previous(&self) -> bool {
        self.offset > self.limit
    }

    /// Total row count implied by a fetched window, when the window proves it.
    ///
    /// A short non-empty window ends the result set, as does a short window
    /// starting at offset 0. Anything else needs a count query.
    pub fn known_total(&self, fetched: usize) -> Option<u64> {
        let fetched = fetched as u64;
        if fetched < self.limit && (fetched > 0 || self.offset == 0) {
            Some(self.offset + fetched)
        } else {
            None
        }
    }
}

/// One window of a listing plus the size of the whole listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
    request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// Page for a request that was never sent to a store. The total is
    /// unknown and reported as 0.
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), 0, request)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> u64 {
        if self.request.page_size() == 0 {
            0
        } else {
            self.total.div_ceil(self.request.page_size())
        }
    }

    pub fn has_next(&self) -> bool {
        self.request.offset() + (self.items.len() as u64) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.request.has_previous()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}
