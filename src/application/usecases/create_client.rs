// Use case: create_client.

use crate::application::context::AppContext;
use crate::application::shared::client_fields::ClientFields;
use crate::domain::entities::client::{Client, ClientValidationError};

/// Validates and stores a new client.
pub struct CreateClientUseCase;

#[derive(Debug)]
pub enum CreateClientError {
    Validation(ClientValidationError),
    Storage(String),
}

impl CreateClientUseCase {
    /// Create a new client and return it with its generated identifier.
    pub async fn execute(ctx: &AppContext, fields: ClientFields) -> Result<Client, CreateClientError> {
        // Step 1: Validate input and build a transient client.
        let client = fields.into_client().map_err(CreateClientError::Validation)?;

        // Step 2: Persist the client.
        let stored = ctx
            .repos
            .client
            .insert(&client)
            .await
            .map_err(|e| CreateClientError::Storage(e.to_string()))?;

        // Step 3: Return the stored client.
        Ok(stored)
    }
}
