// Use case: get_client.

use crate::application::context::AppContext;
use crate::domain::entities::client::Client;
use crate::domain::value_objects::ids::ClientId;

/// Fetches a client by its ID.
pub struct GetClientUseCase;

#[derive(Debug)]
pub enum GetClientError {
    NotFound,
    Storage(String),
}

impl GetClientUseCase {
    pub async fn execute(ctx: &AppContext, client_id: ClientId) -> Result<Client, GetClientError> {
        // Step 1: Fetch the client from storage.
        let client = ctx
            .repos
            .client
            .get(client_id)
            .await
            .map_err(|e| GetClientError::Storage(e.to_string()))?;

        // Step 2: Return NotFound when missing.
        client.ok_or(GetClientError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::{GetClientError, GetClientUseCase};
    use crate::application::context::test_support::{
        InMemoryClientStore, context_with_store, test_context,
    };
    use crate::domain::value_objects::ids::ClientId;
    use crate::infrastructure::db::dto::ClientRow;
    use crate::infrastructure::db::stores::client_store::ClientStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn given_existing_client_when_execute_should_return_it() {
        let store = Arc::new(InMemoryClientStore::default());
        let stored = store
            .insert(&ClientRow {
                id_cliente: 0,
                nome: "Ana".to_string(),
                cpf: "111".to_string(),
                telefone: "999".to_string(),
            })
            .await
            .unwrap();
        let ctx = context_with_store(store);

        let client = GetClientUseCase::execute(&ctx, ClientId(stored.id_cliente))
            .await
            .unwrap();

        assert_eq!(client, stored.into_client());
    }

    #[tokio::test]
    async fn given_missing_client_when_execute_should_return_not_found() {
        let ctx = context_with_store(Arc::new(InMemoryClientStore::default()));

        let result = GetClientUseCase::execute(&ctx, ClientId(3)).await;

        assert!(matches!(result, Err(GetClientError::NotFound)));
    }

    #[tokio::test]
    async fn given_storage_error_when_execute_should_return_storage_error() {
        let ctx = test_context();

        let result = GetClientUseCase::execute(&ctx, ClientId(3)).await;

        assert!(matches!(result, Err(GetClientError::Storage(_))));
    }
}
