pub mod access_log;
pub mod connect;
pub mod model;
pub mod postgres;
pub mod sql;
pub mod store;

pub use access_log::{
    RECENT_LOG_LIMIT,
    TOP_IP_LIMIT,
    access_stats,
    record_access,
};

pub use connect::acquire;

pub use model::{
    AccessLogEntry,
    AccessStats,
    IpCount,
};

pub use postgres::{
    PgConnection,
    PgConnector,
};

pub use store::{
    AccessLogStore,
    Connect,
};
