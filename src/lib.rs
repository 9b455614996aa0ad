pub mod elo;
pub mod forecast;
pub mod history_fetch;
pub mod http_client;
pub mod replay;
pub mod report;
pub mod roster;
pub mod schedule_fetch;
pub mod store;
