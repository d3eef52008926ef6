use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::ClientRow;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientRepositoryError {
    #[error("client not found")]
    NotFound,
    #[error("storage timed out")]
    Timeout,
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<DatabaseError> for ClientRepositoryError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Timeout(_) => ClientRepositoryError::Timeout,
            other => ClientRepositoryError::StorageUnavailable(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for ClientRepositoryError {
    fn from(err: sqlx::Error) -> Self {
        DatabaseError::Query(err.to_string()).into()
    }
}

#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Fetch every client row, ordered by id.
    async fn list(&self) -> Result<Vec<ClientRow>, ClientRepositoryError>;
    /// Fetch a client by its ID. Returns `None` if it doesn't exist.
    async fn get(&self, id_cliente: i32) -> Result<Option<ClientRow>, ClientRepositoryError>;
    /// Insert a client and return the stored row with its generated id.
    async fn insert(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError>;
    /// Update a client and return exactly what was stored in the database.
    async fn update(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError>;
    /// Delete a client by its ID. Returns an error if it doesn't exist.
    async fn delete(&self, id_cliente: i32) -> Result<(), ClientRepositoryError>;
}
