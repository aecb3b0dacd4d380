//! Ticket system: data model, query parameters and storage.

mod params;
mod seed;
mod sqlite_store;
mod store;
mod types;

pub use params::{
    PagedList, SortField, SortKey, TicketParams, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use seed::seed_from_file;
pub use sqlite_store::SqliteTicketStore;
pub use store::{ChangeSet, TicketError, TicketStore};
pub use types::{Ticket, MAX_DESCRIPTION_LEN, MAX_STATUS_LEN, MAX_TITLE_LEN};
