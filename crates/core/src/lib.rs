pub mod config;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseConfig,
    ServerConfig,
};
pub use ticket::{
    seed_from_file, ChangeSet, PagedList, SortField, SortKey, SqliteTicketStore, Ticket,
    TicketError, TicketParams, TicketStore, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
