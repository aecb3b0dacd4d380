//! SQLite-backed ticket store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection};

use super::store::PendingOp;
use super::{ChangeSet, PagedList, SortField, Ticket, TicketError, TicketParams, TicketStore};

const SELECT_COLUMNS: &str =
    "id, title, description, created_by, assign_to, status, created_at, modified_at";

struct Inner {
    conn: Connection,
    // Highest id handed out by `add`, across all change sets. Never reused,
    // even when a change set is dropped without committing.
    next_id: i64,
}

/// SQLite-backed ticket store.
///
/// Writes are staged into caller-owned [`ChangeSet`]s and flushed in a single
/// transaction by `commit`, so concurrent requests never see or flush each
/// other's staged operations. Counting and fetching a page happen under one
/// lock acquisition, so a page and its total count always reflect the same
/// committed state.
pub struct SqliteTicketStore {
    inner: Mutex<Inner>,
}

impl SqliteTicketStore {
    /// Create a new SQLite ticket store, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, TicketError> {
        let conn = Connection::open(path).map_err(|e| TicketError::Database(e.to_string()))?;
        Self::setup_connection(&conn)?;
        let next_id = Self::max_committed_id(&conn)?;
        Ok(Self {
            inner: Mutex::new(Inner { conn, next_id }),
        })
    }

    /// Create an in-memory SQLite ticket store (useful for testing).
    pub fn in_memory() -> Result<Self, TicketError> {
        let conn =
            Connection::open_in_memory().map_err(|e| TicketError::Database(e.to_string()))?;
        Self::setup_connection(&conn)?;
        Ok(Self {
            inner: Mutex::new(Inner { conn, next_id: 0 }),
        })
    }

    fn setup_connection(conn: &Connection) -> Result<(), TicketError> {
        // SQLite's built-in LOWER folds ASCII only; search needs the same
        // Unicode folding as the bound term, which is lowercased in Rust.
        conn.create_scalar_function(
            "unicode_lower",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text: String = ctx.get(0)?;
                Ok(text.to_lowercase())
            },
        )
        .map_err(|e| TicketError::Database(e.to_string()))?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tickets (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                created_by INTEGER NOT NULL,
                assign_to INTEGER,
                status TEXT NOT NULL DEFAULT 'Open',
                created_at TEXT NOT NULL,
                modified_at TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_tickets_status ON tickets(status);
            CREATE INDEX IF NOT EXISTS idx_tickets_created_by ON tickets(created_by);
            CREATE INDEX IF NOT EXISTS idx_tickets_created_at ON tickets(created_at);
            "#,
        )
        .map_err(|e| TicketError::Database(e.to_string()))?;

        Ok(())
    }

    fn max_committed_id(conn: &Connection) -> Result<i64, TicketError> {
        conn.query_row("SELECT COALESCE(MAX(id), 0) FROM tickets", [], |row| {
            row.get(0)
        })
        .map_err(|e| TicketError::Database(e.to_string()))
    }

    fn build_where_clause(params: &TicketParams) -> (String, Vec<Box<dyn rusqlite::ToSql>>) {
        let mut conditions = Vec::new();
        let mut bind: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(term) = params
            .search_term
            .as_deref()
            .filter(|t| !t.trim().is_empty())
        {
            // INSTR avoids LIKE-pattern escaping for user-supplied terms
            conditions.push(
                "(INSTR(unicode_lower(title), ?) > 0 OR INSTR(unicode_lower(description), ?) > 0)",
            );
            let lowered = term.to_lowercase();
            bind.push(Box::new(lowered.clone()));
            bind.push(Box::new(lowered));
        }

        if let Some(status) = params.status.as_deref().filter(|s| !s.trim().is_empty()) {
            conditions.push("status = ?");
            bind.push(Box::new(status.to_string()));
        }

        if let Some(created_by) = params.created_by {
            conditions.push("created_by = ?");
            bind.push(Box::new(created_by));
        }

        if let Some(assign_to) = params.assign_to {
            conditions.push("assign_to = ?");
            bind.push(Box::new(assign_to));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        (where_clause, bind)
    }

    fn order_clause(params: &TicketParams) -> String {
        let key = params.sort_key();
        let column = match key.field {
            SortField::Title => "title",
            SortField::Status => "status",
            SortField::CreatedAt => "created_at",
            SortField::ModifiedAt => "modified_at",
        };
        let direction = if key.descending { "DESC" } else { "ASC" };
        // id ASC tie-break keeps pagination stable across repeated queries
        format!("ORDER BY {} {}, id ASC", column, direction)
    }

    fn row_to_ticket(row: &rusqlite::Row) -> rusqlite::Result<Ticket> {
        let id: i64 = row.get(0)?;
        let title: String = row.get(1)?;
        let description: String = row.get(2)?;
        let created_by: i64 = row.get(3)?;
        let assign_to: Option<i64> = row.get(4)?;
        let status: String = row.get(5)?;
        let created_at_str: String = row.get(6)?;
        let modified_at_str: Option<String> = row.get(7)?;

        let created_at = parse_timestamp(6, &created_at_str)?;
        let modified_at = match modified_at_str {
            Some(s) => Some(parse_timestamp(7, &s)?),
            None => None,
        };

        Ok(Ticket {
            id,
            title,
            description,
            created_by,
            assign_to,
            status,
            created_at,
            modified_at,
        })
    }
}

fn parse_timestamp(column: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, e.into())
        })
}

impl TicketStore for SqliteTicketStore {
    fn add(&self, changes: &mut ChangeSet, mut ticket: Ticket) -> Result<Ticket, TicketError> {
        let mut inner = self.inner.lock().unwrap();

        let max_committed = Self::max_committed_id(&inner.conn)?;
        inner.next_id = inner.next_id.max(max_committed) + 1;
        ticket.id = inner.next_id;
        changes.ops.push(PendingOp::Insert(ticket.clone()));

        Ok(ticket)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Ticket>, TicketError> {
        let inner = self.inner.lock().unwrap();

        let result = inner.conn.query_row(
            &format!("SELECT {} FROM tickets WHERE id = ?", SELECT_COLUMNS),
            params![id],
            Self::row_to_ticket,
        );

        match result {
            Ok(ticket) => Ok(Some(ticket)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(TicketError::Database(e.to_string())),
        }
    }

    fn get_tickets(&self, params: &TicketParams) -> Result<PagedList<Ticket>, TicketError> {
        let inner = self.inner.lock().unwrap();

        let (where_clause, bind) = Self::build_where_clause(params);

        // Total count before pagination, against the same filtered set
        let count_sql = format!("SELECT COUNT(*) FROM tickets {}", where_clause);
        let count_refs: Vec<&dyn rusqlite::ToSql> = bind.iter().map(|p| p.as_ref()).collect();
        let total_count: i64 = inner
            .conn
            .query_row(&count_sql, count_refs.as_slice(), |row| row.get(0))
            .map_err(|e| TicketError::Database(e.to_string()))?;

        let sql = format!(
            "SELECT {} FROM tickets {} {} LIMIT ? OFFSET ?",
            SELECT_COLUMNS,
            where_clause,
            Self::order_clause(params),
        );

        let mut stmt = inner
            .conn
            .prepare(&sql)
            .map_err(|e| TicketError::Database(e.to_string()))?;

        let mut all_params: Vec<Box<dyn rusqlite::ToSql>> = bind;
        all_params.push(Box::new(i64::from(params.page_size())));
        all_params.push(Box::new(params.offset()));

        let param_refs: Vec<&dyn rusqlite::ToSql> = all_params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt
            .query_map(param_refs.as_slice(), Self::row_to_ticket)
            .map_err(|e| TicketError::Database(e.to_string()))?;

        let mut items = Vec::new();
        for row_result in rows {
            let ticket = row_result.map_err(|e| TicketError::Database(e.to_string()))?;
            items.push(ticket);
        }

        Ok(PagedList {
            items,
            total_count,
            page_number: params.page_number(),
            page_size: params.page_size(),
        })
    }

    fn update(&self, changes: &mut ChangeSet, mut ticket: Ticket) -> Result<(), TicketError> {
        ticket.modified_at = Some(Utc::now());
        changes.ops.push(PendingOp::Update(ticket));
        Ok(())
    }

    fn delete(&self, changes: &mut ChangeSet, id: i64) -> Result<(), TicketError> {
        changes.ops.push(PendingOp::Delete(id));
        Ok(())
    }

    fn exists(&self, id: i64) -> Result<bool, TicketError> {
        let inner = self.inner.lock().unwrap();

        inner
            .conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM tickets WHERE id = ?)",
                params![id],
                |row| row.get(0),
            )
            .map_err(|e| TicketError::Database(e.to_string()))
    }

    fn commit(&self, changes: ChangeSet) -> Result<bool, TicketError> {
        if changes.ops.is_empty() {
            return Ok(false);
        }

        let mut inner = self.inner.lock().unwrap();
        let tx = inner
            .conn
            .transaction()
            .map_err(|e| TicketError::Database(e.to_string()))?;

        let mut affected = 0usize;
        for op in &changes.ops {
            affected += match op {
                PendingOp::Insert(t) => tx
                    .execute(
                        "INSERT INTO tickets (id, title, description, created_by, assign_to, status, created_at, modified_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                        params![
                            t.id,
                            t.title,
                            t.description,
                            t.created_by,
                            t.assign_to,
                            t.status,
                            t.created_at.to_rfc3339(),
                            t.modified_at.map(|dt| dt.to_rfc3339()),
                        ],
                    )
                    .map_err(|e| TicketError::Database(e.to_string()))?,
                PendingOp::Update(t) => tx
                    .execute(
                        "UPDATE tickets SET title = ?, description = ?, created_by = ?, assign_to = ?, status = ?, created_at = ?, modified_at = ? WHERE id = ?",
                        params![
                            t.title,
                            t.description,
                            t.created_by,
                            t.assign_to,
                            t.status,
                            t.created_at.to_rfc3339(),
                            t.modified_at.map(|dt| dt.to_rfc3339()),
                            t.id,
                        ],
                    )
                    .map_err(|e| TicketError::Database(e.to_string()))?,
                PendingOp::Delete(id) => tx
                    .execute("DELETE FROM tickets WHERE id = ?", params![id])
                    .map_err(|e| TicketError::Database(e.to_string()))?,
            };
        }

        tx.commit()
            .map_err(|e| TicketError::Database(e.to_string()))?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_store() -> SqliteTicketStore {
        SqliteTicketStore::in_memory().unwrap()
    }

    fn test_ticket(title: &str, description: &str, created_by: i64, status: &str) -> Ticket {
        Ticket {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            created_by,
            assign_to: None,
            status: status.to_string(),
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    fn add_and_commit(store: &SqliteTicketStore, ticket: Ticket) -> Ticket {
        let mut changes = ChangeSet::new();
        let ticket = store.add(&mut changes, ticket).unwrap();
        assert!(store.commit(changes).unwrap());
        ticket
    }

    /// Dataset from the repository query scenarios: creators {1, 1, 2, 5},
    /// statuses {Open, In Progress, Open, Open}.
    fn seed_query_dataset(store: &SqliteTicketStore) {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let rows = [
            ("AWS workspace not responding", "Service not available - error", 1, "Open"),
            ("VPN drops every hour", "Connection resets while on call", 1, "In Progress"),
            ("Password reset needed", "Locked out after vacation", 2, "Open"),
            ("Printer offline", "Third floor printer unreachable", 5, "Open"),
        ];
        let mut changes = ChangeSet::new();
        for (i, (title, description, created_by, status)) in rows.iter().enumerate() {
            let mut ticket = test_ticket(title, description, *created_by, status);
            ticket.created_at = base + chrono::Duration::hours(i as i64);
            store.add(&mut changes, ticket).unwrap();
        }
        assert!(store.commit(changes).unwrap());
    }

    #[test]
    fn test_add_assigns_monotonic_ids() {
        let store = create_test_store();

        let mut changes = ChangeSet::new();
        let first = store.add(&mut changes, test_ticket("a", "a", 1, "Open")).unwrap();
        let second = store.add(&mut changes, test_ticket("b", "b", 1, "Open")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        assert!(store.commit(changes).unwrap());

        let mut changes = ChangeSet::new();
        let third = store.add(&mut changes, test_ticket("c", "c", 1, "Open")).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_change_sets_are_isolated_between_callers() {
        let store = create_test_store();

        // Two requests staging concurrently, each with its own change set
        let mut first = ChangeSet::new();
        let mut second = ChangeSet::new();
        let a = store.add(&mut first, test_ticket("a", "a", 1, "Open")).unwrap();
        let b = store.add(&mut second, test_ticket("b", "b", 2, "Open")).unwrap();
        assert_ne!(a.id, b.id);

        // Committing one flushes only its own staged insert
        assert!(store.commit(first).unwrap());
        assert!(store.get_by_id(a.id).unwrap().is_some());
        assert!(store.get_by_id(b.id).unwrap().is_none());

        // The other caller's commit still reports its own write
        assert!(store.commit(second).unwrap());
        assert!(store.get_by_id(b.id).unwrap().is_some());
    }

    #[test]
    fn test_dropped_change_set_never_reaches_the_store() {
        let store = create_test_store();

        let mut abandoned = ChangeSet::new();
        let staged = store
            .add(&mut abandoned, test_ticket("a", "a", 1, "Open"))
            .unwrap();
        drop(abandoned);

        assert!(store.get_by_id(staged.id).unwrap().is_none());

        // Ids skipped by abandoned change sets are not reused
        let committed = add_and_commit(&store, test_ticket("b", "b", 1, "Open"));
        assert!(committed.id > staged.id);
    }

    #[test]
    fn test_reads_see_committed_state_only() {
        let store = create_test_store();

        let mut changes = ChangeSet::new();
        let ticket = store.add(&mut changes, test_ticket("a", "a", 1, "Open")).unwrap();
        assert!(store.get_by_id(ticket.id).unwrap().is_none());
        assert!(!store.exists(ticket.id).unwrap());

        assert!(store.commit(changes).unwrap());
        assert!(store.get_by_id(ticket.id).unwrap().is_some());
        assert!(store.exists(ticket.id).unwrap());
    }

    #[test]
    fn test_commit_with_nothing_staged_returns_false() {
        let store = create_test_store();
        assert!(!store.commit(ChangeSet::new()).unwrap());
    }

    #[test]
    fn test_get_nonexistent_ticket() {
        let store = create_test_store();
        assert!(store.get_by_id(100).unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_record_and_sets_modified_at() {
        let store = create_test_store();
        let ticket = add_and_commit(&store, test_ticket("a", "a", 1, "Open"));

        let mut changed = ticket.clone();
        changed.status = "Resolved".to_string();
        changed.assign_to = Some(102);
        let mut changes = ChangeSet::new();
        store.update(&mut changes, changed).unwrap();
        assert!(store.commit(changes).unwrap());

        let fetched = store.get_by_id(ticket.id).unwrap().unwrap();
        assert_eq!(fetched.status, "Resolved");
        assert_eq!(fetched.assign_to, Some(102));
        assert!(fetched.modified_at.is_some());
    }

    #[test]
    fn test_delete_removes_ticket() {
        let store = create_test_store();
        let ticket = add_and_commit(&store, test_ticket("a", "a", 1, "Open"));

        let mut changes = ChangeSet::new();
        store.delete(&mut changes, ticket.id).unwrap();
        assert!(store.commit(changes).unwrap());
        assert!(store.get_by_id(ticket.id).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_timestamp_surfaces_as_database_error() {
        let store = create_test_store();
        store
            .inner
            .lock()
            .unwrap()
            .conn
            .execute(
                "INSERT INTO tickets (id, title, description, created_by, status, created_at) \
                 VALUES (1, 'a', 'a', 1, 'Open', 'not-a-timestamp')",
                [],
            )
            .unwrap();

        assert!(matches!(
            store.get_by_id(1),
            Err(TicketError::Database(_))
        ));
        assert!(matches!(
            store.get_tickets(&TicketParams::new()),
            Err(TicketError::Database(_))
        ));
    }

    #[test]
    fn test_query_by_creator_ordered_by_status() {
        let store = create_test_store();
        seed_query_dataset(&store);

        let params = TicketParams::new()
            .with_page_number(1)
            .with_page_size(2)
            .with_created_by(1)
            .with_order_by("status");
        let page = store.get_tickets(&params).unwrap();

        assert_eq!(page.total_count, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].status, "In Progress");
        assert_eq!(page.items[1].status, "Open");
    }

    #[test]
    fn test_search_term_matches_title_or_description() {
        let store = create_test_store();
        let mut changes = ChangeSet::new();
        store
            .add(
                &mut changes,
                test_ticket(
                    "AWS workspace not responding",
                    "Service not available - error",
                    1,
                    "Open",
                ),
            )
            .unwrap();
        store
            .add(
                &mut changes,
                test_ticket(
                    "Facing Issue with HDMI port",
                    "No monitor detected, tried multiple HDMI cables/ports but no luck",
                    1,
                    "Open",
                ),
            )
            .unwrap();
        store.commit(changes).unwrap();

        let page = store
            .get_tickets(&TicketParams::new().with_search_term("HDMI"))
            .unwrap();
        assert_eq!(page.total_count, 1);
        assert!(page.items[0].title.contains("HDMI"));

        // Case-insensitive, and also matches description-only hits
        let page = store
            .get_tickets(&TicketParams::new().with_search_term("monitor DETECTED"))
            .unwrap();
        assert_eq!(page.total_count, 1);

        // Blank terms are ignored
        let page = store
            .get_tickets(&TicketParams::new().with_search_term("   "))
            .unwrap();
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_search_is_case_insensitive_for_non_ascii() {
        let store = create_test_store();
        add_and_commit(
            &store,
            test_ticket("Ärger mit dem Drucker", "Großes Problem im Büro", 1, "Open"),
        );

        for term in ["ärger", "ÄRGER", "großes", "BÜRO"] {
            let page = store
                .get_tickets(&TicketParams::new().with_search_term(term))
                .unwrap();
            assert_eq!(page.total_count, 1, "term {:?}", term);
        }

        let page = store
            .get_tickets(&TicketParams::new().with_search_term("drücker"))
            .unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_status_filter_is_exact_and_case_sensitive() {
        let store = create_test_store();
        seed_query_dataset(&store);

        let page = store
            .get_tickets(&TicketParams::new().with_status("Open"))
            .unwrap();
        assert_eq!(page.total_count, 3);

        let page = store
            .get_tickets(&TicketParams::new().with_status("open"))
            .unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_assign_to_filter() {
        let store = create_test_store();
        let mut changes = ChangeSet::new();
        let mut ticket = test_ticket("a", "a", 1, "Open");
        ticket.assign_to = Some(7);
        store.add(&mut changes, ticket).unwrap();
        store.add(&mut changes, test_ticket("b", "b", 1, "Open")).unwrap();
        store.commit(changes).unwrap();

        let page = store
            .get_tickets(&TicketParams::new().with_assign_to(7))
            .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].assign_to, Some(7));
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let store = create_test_store();
        seed_query_dataset(&store);

        let params = TicketParams::new()
            .with_created_by(1)
            .with_status("Open")
            .with_search_term("workspace");
        let page = store.get_tickets(&params).unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].title, "AWS workspace not responding");
    }

    #[test]
    fn test_total_count_is_independent_of_pagination() {
        let store = create_test_store();
        seed_query_dataset(&store);

        for page_number in 1..=3 {
            let params = TicketParams::new()
                .with_page_number(page_number)
                .with_page_size(2);
            let page = store.get_tickets(&params).unwrap();
            assert_eq!(page.total_count, 4);
        }
    }

    #[test]
    fn test_page_beyond_data_is_empty_with_valid_total() {
        let store = create_test_store();
        seed_query_dataset(&store);

        let params = TicketParams::new().with_page_number(10).with_page_size(2);
        let page = store.get_tickets(&params).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn test_last_page_is_partial() {
        let store = create_test_store();
        seed_query_dataset(&store);

        let params = TicketParams::new().with_page_number(2).with_page_size(3);
        let page = store.get_tickets(&params).unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_unrecognized_order_by_matches_created_at_desc() {
        let store = create_test_store();
        seed_query_dataset(&store);

        let explicit = store
            .get_tickets(&TicketParams::new().with_order_by("createdatdesc"))
            .unwrap();
        let fallback = store
            .get_tickets(&TicketParams::new().with_order_by("bogus"))
            .unwrap();

        let explicit_ids: Vec<i64> = explicit.items.iter().map(|t| t.id).collect();
        let fallback_ids: Vec<i64> = fallback.items.iter().map(|t| t.id).collect();
        assert_eq!(explicit_ids, fallback_ids);
        assert_eq!(explicit_ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_repeated_query_is_idempotent() {
        let store = create_test_store();
        seed_query_dataset(&store);

        let params = TicketParams::new().with_order_by("status").with_page_size(10);
        let first = store.get_tickets(&params).unwrap();
        let second = store.get_tickets(&params).unwrap();
        assert_eq!(first.items, second.items);
        assert_eq!(first.total_count, second.total_count);
    }

    #[test]
    fn test_equal_sort_keys_break_ties_by_id() {
        let store = create_test_store();
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut changes = ChangeSet::new();
        for title in ["c", "a", "b"] {
            let mut ticket = test_ticket(title, "same status", 1, "Open");
            ticket.created_at = created_at;
            store.add(&mut changes, ticket).unwrap();
        }
        store.commit(changes).unwrap();

        let page = store
            .get_tickets(&TicketParams::new().with_order_by("status"))
            .unwrap();
        let ids: Vec<i64> = page.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_order_by_title() {
        let store = create_test_store();
        seed_query_dataset(&store);

        let page = store
            .get_tickets(&TicketParams::new().with_order_by("title").with_page_size(10))
            .unwrap();
        let titles: Vec<&str> = page.items.iter().map(|t| t.title.as_str()).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn test_file_based_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("tickets.db");

        let store = SqliteTicketStore::new(&db_path).unwrap();
        let ticket = add_and_commit(&store, test_ticket("a", "a", 1, "Open"));

        assert!(db_path.exists());
        assert!(store.get_by_id(ticket.id).unwrap().is_some());
    }

    #[test]
    fn test_reopened_file_store_continues_id_sequence() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("tickets.db");

        {
            let store = SqliteTicketStore::new(&db_path).unwrap();
            add_and_commit(&store, test_ticket("a", "a", 1, "Open"));
        }

        let store = SqliteTicketStore::new(&db_path).unwrap();
        let second = add_and_commit(&store, test_ticket("b", "b", 1, "Open"));
        assert_eq!(second.id, 2);
    }
}
