use crate::domain::entities::client::Client;
use crate::domain::value_objects::ids::ClientId;

/// One row of the `cliente` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ClientRow {
    pub id_cliente: i32,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
}

impl ClientRow {
    /// A client that has not been stored yet maps to `id_cliente = 0`.
    pub fn from_client(client: &Client) -> Self {
        Self {
            id_cliente: client.id.map(|id| id.0).unwrap_or(0),
            nome: client.nome.clone(),
            cpf: client.cpf.clone(),
            telefone: client.telefone.clone(),
        }
    }

    pub fn into_client(self) -> Client {
        Client {
            id: Some(ClientId(self.id_cliente)),
            nome: self.nome,
            cpf: self.cpf,
            telefone: self.telefone,
        }
    }
}
