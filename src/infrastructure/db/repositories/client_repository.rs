use crate::domain::entities::client::Client;
use crate::domain::value_objects::ids::ClientId;
use crate::infrastructure::db::dto::ClientRow;
use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
use metrics::counter;
use std::sync::Arc;
use tracing::{error, info};

/// Entity-level access to clients. Storage errors are logged here and handed back
/// as `ClientRepositoryError`; not-found is passed through without logging.
pub struct ClientRepository {
    store: Arc<dyn ClientStore>,
}

impl ClientRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// List every stored client.
    pub async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        let rows = self
            .store
            .list()
            .await
            .map_err(|e| log_failure("list", None, e))?;

        Ok(rows.into_iter().map(ClientRow::into_client).collect())
    }

    /// Fetch a client by its ID. Returns `None` if it doesn't exist.
    pub async fn get(&self, client_id: ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        let row = self
            .store
            .get(client_id.0)
            .await
            .map_err(|e| log_failure("get", Some(client_id), e))?;

        Ok(row.map(ClientRow::into_client))
    }

    /// Insert a client and return it with the identifier storage assigned.
    pub async fn insert(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let dto = ClientRow::from_client(client);
        let stored = self
            .store
            .insert(&dto)
            .await
            .map_err(|e| log_failure("insert", None, e))?;

        info!(id_cliente = stored.id_cliente, "client inserted");
        Ok(stored.into_client())
    }

    /// Update the client identified by `client.id` and return what was stored.
    pub async fn update(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let Some(client_id) = client.id else {
            return Err(ClientRepositoryError::NotFound);
        };
        let dto = ClientRow::from_client(client);
        let stored = self
            .store
            .update(&dto)
            .await
            .map_err(|e| log_failure("update", Some(client_id), e))?;

        info!(id_cliente = stored.id_cliente, "client updated");
        Ok(stored.into_client())
    }

    /// Delete a client by its ID. Returns `NotFound` if nothing was removed.
    pub async fn delete(&self, client_id: ClientId) -> Result<(), ClientRepositoryError> {
        self.store
            .delete(client_id.0)
            .await
            .map_err(|e| log_failure("delete", Some(client_id), e))?;

        info!(id_cliente = client_id.0, "client deleted");
        Ok(())
    }
}

fn log_failure(
    operation: &'static str,
    client_id: Option<ClientId>,
    err: ClientRepositoryError,
) -> ClientRepositoryError {
    if err != ClientRepositoryError::NotFound {
        counter!("client_store_errors_total", "operation" => operation).increment(1);
        error!(
            operation,
            id_cliente = client_id.map(|id| id.0),
            error = %err,
            "client storage operation failed"
        );
    }
    err
}
