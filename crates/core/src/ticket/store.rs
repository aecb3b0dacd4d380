//! Ticket storage trait.

use thiserror::Error;

use crate::ticket::{PagedList, Ticket, TicketParams};

/// Error type for ticket storage operations.
#[derive(Debug, Error)]
pub enum TicketError {
    /// Ticket not found.
    #[error("Ticket not found: {0}")]
    NotFound(i64),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

/// A staged write, flushed on commit.
#[derive(Debug)]
pub(crate) enum PendingOp {
    Insert(Ticket),
    Update(Ticket),
    Delete(i64),
}

/// Writes staged by a single caller, flushed atomically by
/// [`TicketStore::commit`].
///
/// Each request scopes its own change set; nothing is shared between
/// callers, so one caller's commit can never flush or observe another's
/// staged operations.
#[derive(Debug, Default)]
pub struct ChangeSet {
    pub(crate) ops: Vec<PendingOp>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any operations are staged.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Trait for ticket storage backends.
///
/// Writes follow a unit-of-work pattern: `add`, `update` and `delete` stage
/// operations into a caller-owned [`ChangeSet`] which `commit` flushes in one
/// transaction. Reads (`get_by_id`, `exists`, `get_tickets`) observe
/// committed state only.
pub trait TicketStore: Send + Sync {
    /// Stage a new ticket for insertion. Assigns the next identity and
    /// returns the ticket with its id set. Identities are unique across
    /// concurrent change sets.
    fn add(&self, changes: &mut ChangeSet, ticket: Ticket) -> Result<Ticket, TicketError>;

    /// Get a ticket by id.
    fn get_by_id(&self, id: i64) -> Result<Option<Ticket>, TicketError>;

    /// Query tickets: filter, count, sort and paginate in one pass.
    fn get_tickets(&self, params: &TicketParams) -> Result<PagedList<Ticket>, TicketError>;

    /// Stage a full-record replace. Sets `modified_at`. Does not verify
    /// existence; the caller is expected to have checked.
    fn update(&self, changes: &mut ChangeSet, ticket: Ticket) -> Result<(), TicketError>;

    /// Stage a delete.
    fn delete(&self, changes: &mut ChangeSet, id: i64) -> Result<(), TicketError>;

    /// Whether a ticket with this id exists in committed state.
    fn exists(&self, id: i64) -> Result<bool, TicketError>;

    /// Flush the change set's operations in one transaction. Returns whether
    /// any row was affected; a `false` does not distinguish a failed write
    /// from a no-op one.
    fn commit(&self, changes: ChangeSet) -> Result<bool, TicketError>;
}
