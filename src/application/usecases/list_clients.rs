// Use case: list_clients.

use crate::application::context::AppContext;
use crate::domain::entities::client::Client;

/// Lists every stored client.
pub struct ListClientsUseCase;

#[derive(Debug)]
pub enum ListClientsError {
    Storage(String),
}

impl ListClientsUseCase {
    pub async fn execute(ctx: &AppContext) -> Result<Vec<Client>, ListClientsError> {
        ctx.repos
            .client
            .list()
            .await
            .map_err(|e| ListClientsError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ListClientsError, ListClientsUseCase};
    use crate::application::context::test_support::{
        InMemoryClientStore, context_with_store, test_context,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn given_empty_store_when_execute_should_return_empty_list() {
        let ctx = context_with_store(Arc::new(InMemoryClientStore::default()));

        let clients = ListClientsUseCase::execute(&ctx).await.unwrap();

        assert!(clients.is_empty());
    }

    #[tokio::test]
    async fn given_storage_error_when_execute_should_return_error_not_empty_list() {
        let ctx = test_context();

        let result = ListClientsUseCase::execute(&ctx).await;

        assert!(matches!(result, Err(ListClientsError::Storage(_))));
    }
}
