//! Query parameters and paged results for ticket listings.

use serde::Serialize;

/// Upper bound on page size; out-of-range requests collapse to this value.
pub const MAX_PAGE_SIZE: u32 = 10;

/// Page size used when the caller does not request one.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Sortable ticket fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Status,
    CreatedAt,
    ModifiedAt,
}

/// A resolved sort order: field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub descending: bool,
}

impl SortKey {
    /// Resolve a raw `orderBy` string, case-insensitively.
    ///
    /// Recognized values are the field names `title`, `status`, `createdat`,
    /// `modifiedat` and their `desc`-suffixed variants. Anything else,
    /// including the empty string, falls back to created-at descending.
    pub fn resolve(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "title" => Self {
                field: SortField::Title,
                descending: false,
            },
            "titledesc" => Self {
                field: SortField::Title,
                descending: true,
            },
            "status" => Self {
                field: SortField::Status,
                descending: false,
            },
            "statusdesc" => Self {
                field: SortField::Status,
                descending: true,
            },
            "createdat" => Self {
                field: SortField::CreatedAt,
                descending: false,
            },
            "createdatdesc" => Self {
                field: SortField::CreatedAt,
                descending: true,
            },
            "modifiedat" => Self {
                field: SortField::ModifiedAt,
                descending: false,
            },
            "modifiedatdesc" => Self {
                field: SortField::ModifiedAt,
                descending: true,
            },
            _ => Self {
                field: SortField::CreatedAt,
                descending: true,
            },
        }
    }
}

/// Normalized, request-scoped query parameters for listing tickets.
///
/// Page number and page size are clamped on the way in, so a constructed
/// `TicketParams` is always valid: page size outside `[1, MAX_PAGE_SIZE]`
/// collapses to `MAX_PAGE_SIZE` (not the nearest bound), page number below 1
/// is forced to 1.
#[derive(Debug, Clone)]
pub struct TicketParams {
    page_number: u32,
    page_size: u32,
    order_by: String,
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub assign_to: Option<i64>,
    pub created_by: Option<i64>,
}

impl Default for TicketParams {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            order_by: "CreatedAt".to_string(),
            search_term: None,
            status: None,
            assign_to: None,
            created_by: None,
        }
    }
}

impl TicketParams {
    /// Create parameters with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number; values below 1 are forced to 1.
    pub fn with_page_number(mut self, page_number: i64) -> Self {
        self.page_number = if page_number < 1 {
            1
        } else {
            page_number.min(i64::from(u32::MAX)) as u32
        };
        self
    }

    /// Set the page size; anything outside `[1, MAX_PAGE_SIZE]` collapses to
    /// `MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = if page_size < 1 || page_size > MAX_PAGE_SIZE as i64 {
            MAX_PAGE_SIZE
        } else {
            page_size as u32
        };
        self
    }

    /// Set the raw sort order string.
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    /// Filter by case-insensitive substring on title or description.
    pub fn with_search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = Some(search_term.into());
        self
    }

    /// Filter by exact status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filter by assignee.
    pub fn with_assign_to(mut self, assign_to: i64) -> Self {
        self.assign_to = Some(assign_to);
        self
    }

    /// Filter by creator.
    pub fn with_created_by(mut self, created_by: i64) -> Self {
        self.created_by = Some(created_by);
        self
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows to skip for the requested page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page_number - 1) * i64::from(self.page_size)
    }

    /// Resolve the raw sort string into a concrete sort key.
    pub fn sort_key(&self) -> SortKey {
        SortKey::resolve(&self.order_by)
    }
}

/// One page of results plus total-count metadata.
///
/// `total_count` counts every item matching the active filters, not just the
/// returned page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page_number: u32,
    pub page_size: u32,
}
