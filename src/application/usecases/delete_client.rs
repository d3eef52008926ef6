// Use case: delete_client.

use crate::application::context::AppContext;
use crate::domain::value_objects::ids::ClientId;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;

/// Removes a client by its ID.
pub struct DeleteClientUseCase;

#[derive(Debug)]
pub enum DeleteClientError {
    NotFound,
    Storage(String),
}

impl DeleteClientUseCase {
    pub async fn execute(ctx: &AppContext, client_id: ClientId) -> Result<(), DeleteClientError> {
        ctx.repos
            .client
            .delete(client_id)
            .await
            .map_err(|e| match e {
                ClientRepositoryError::NotFound => DeleteClientError::NotFound,
                other => DeleteClientError::Storage(other.to_string()),
            })
    }
}
