//! Seed-data loading for bootstrap.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{ChangeSet, Ticket, TicketParams, TicketStore};

/// Load tickets from a JSON array file into an empty store.
///
/// A store that already holds tickets is left untouched. Returns the number
/// of tickets seeded.
pub fn seed_from_file(store: &dyn TicketStore, path: &Path) -> Result<usize> {
    let existing = store
        .get_tickets(&TicketParams::new())
        .context("Failed to check existing tickets before seeding")?;
    if existing.total_count > 0 {
        info!("Skipping seed, store already holds {} tickets", existing.total_count);
        return Ok(0);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {:?}", path))?;
    let tickets: Vec<Ticket> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse seed file {:?}", path))?;

    let count = tickets.len();
    let mut changes = ChangeSet::new();
    for ticket in tickets {
        store
            .add(&mut changes, ticket)
            .context("Failed to stage seed ticket")?;
    }
    if !changes.is_empty() {
        store
            .commit(changes)
            .context("Failed to commit seed tickets")?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::SqliteTicketStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SEED_JSON: &str = r#"[
        {"title": "AWS workspace not responding", "description": "Service not available - error", "createdBy": 1},
        {"title": "Facing Issue with HDMI port", "description": "No monitor detected", "createdBy": 2, "status": "In Progress"}
    ]"#;

    fn seed_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SEED_JSON.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_seed_empty_store() {
        let store = SqliteTicketStore::in_memory().unwrap();
        let file = seed_file();

        let seeded = seed_from_file(&store, file.path()).unwrap();
        assert_eq!(seeded, 2);

        let page = store.get_tickets(&TicketParams::new()).unwrap();
        assert_eq!(page.total_count, 2);
        assert_eq!(
            page.items.iter().filter(|t| t.status == "Open").count(),
            1
        );
    }

    #[test]
    fn test_seed_is_noop_on_populated_store() {
        let store = SqliteTicketStore::in_memory().unwrap();
        let file = seed_file();

        assert_eq!(seed_from_file(&store, file.path()).unwrap(), 2);
        assert_eq!(seed_from_file(&store, file.path()).unwrap(), 0);

        let page = store.get_tickets(&TicketParams::new()).unwrap();
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_seed_missing_file_errors() {
        let store = SqliteTicketStore::in_memory().unwrap();
        let result = seed_from_file(&store, Path::new("/nonexistent/tickets.json"));
        assert!(result.is_err());
    }
}
