// Use case: update_client.

use crate::application::context::AppContext;
use crate::application::shared::client_fields::ClientFields;
use crate::domain::entities::client::{Client, ClientValidationError};
use crate::domain::value_objects::ids::ClientId;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;

/// Replaces the name, CPF and phone of an existing client.
pub struct UpdateClientUseCase;

#[derive(Debug)]
pub struct UpdateClientCommand {
    pub client_id: ClientId,
    pub fields: ClientFields,
}

#[derive(Debug)]
pub enum UpdateClientError {
    Validation(ClientValidationError),
    NotFound,
    Storage(String),
}

impl UpdateClientUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: UpdateClientCommand,
    ) -> Result<Client, UpdateClientError> {
        // Step 1: Validate input and bind it to the target id.
        let client = cmd
            .fields
            .into_client()
            .map_err(UpdateClientError::Validation)?
            .with_id(cmd.client_id);

        // Step 2: Persist; zero matched rows means the client does not exist.
        ctx.repos
            .client
            .update(&client)
            .await
            .map_err(|e| match e {
                ClientRepositoryError::NotFound => UpdateClientError::NotFound,
                other => UpdateClientError::Storage(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{UpdateClientCommand, UpdateClientError, UpdateClientUseCase};
    use crate::application::context::test_support::{
        InMemoryClientStore, context_with_store, test_context,
    };
    use crate::application::shared::client_fields::ClientFields;
    use crate::domain::value_objects::ids::ClientId;
    use crate::infrastructure::db::dto::ClientRow;
    use crate::infrastructure::db::stores::client_store::ClientStore;
    use std::sync::Arc;

    fn fields(nome: &str) -> ClientFields {
        ClientFields {
            nome: nome.into(),
            cpf: "111".into(),
            telefone: "999".into(),
        }
    }

    async fn seeded_store(names: &[&str]) -> Arc<InMemoryClientStore> {
        let store = Arc::new(InMemoryClientStore::default());
        for nome in names {
            store
                .insert(&ClientRow {
                    id_cliente: 0,
                    nome: nome.to_string(),
                    cpf: "111".to_string(),
                    telefone: "999".to_string(),
                })
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn given_existing_client_when_execute_should_change_only_that_client() {
        let store = seeded_store(&["Ana", "Bia"]).await;
        let ctx = context_with_store(store.clone());

        let updated = UpdateClientUseCase::execute(
            &ctx,
            UpdateClientCommand {
                client_id: ClientId(1),
                fields: fields("Ana Silva"),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, Some(ClientId(1)));
        let rows = store.snapshot();
        assert_eq!(rows[0].nome, "Ana Silva");
        assert_eq!(rows[1].nome, "Bia");
    }

    #[tokio::test]
    async fn given_missing_client_when_execute_should_return_not_found_and_keep_rows() {
        let store = seeded_store(&["Ana"]).await;
        let ctx = context_with_store(store.clone());

        let result = UpdateClientUseCase::execute(
            &ctx,
            UpdateClientCommand {
                client_id: ClientId(99),
                fields: fields("Ghost"),
            },
        )
        .await;

        assert!(matches!(result, Err(UpdateClientError::NotFound)));
        assert_eq!(store.snapshot()[0].nome, "Ana");
    }

    #[tokio::test]
    async fn given_blank_name_when_execute_should_return_validation_error() {
        let ctx = test_context();

        let result = UpdateClientUseCase::execute(
            &ctx,
            UpdateClientCommand {
                client_id: ClientId(1),
                fields: fields(""),
            },
        )
        .await;

        assert!(matches!(result, Err(UpdateClientError::Validation(_))));
    }

    #[tokio::test]
    async fn given_storage_timeout_when_execute_should_return_storage_error() {
        let ctx = test_context();

        let result = UpdateClientUseCase::execute(
            &ctx,
            UpdateClientCommand {
                client_id: ClientId(1),
                fields: fields("Ana"),
            },
        )
        .await;

        assert!(matches!(result, Err(UpdateClientError::Storage(_))));
    }
}
