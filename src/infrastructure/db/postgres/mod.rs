pub mod client_store_postgres;
mod database;

pub use database::PostgresDatabase;
