use crate::application::shared::client_fields::ClientFields;
use crate::domain::entities::client::{Client, FieldInput};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /clientes` and `PUT /clientes/:idCliente`.
///
/// Fields are kept as raw JSON so a mistyped field is reported per field
/// instead of rejecting the whole body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientRequest {
    pub nome: Option<Value>,
    pub cpf: Option<Value>,
    pub telefone: Option<Value>,
}

fn field_input(value: Option<Value>) -> FieldInput {
    match value {
        None | Some(Value::Null) => FieldInput::Missing,
        Some(Value::String(text)) => FieldInput::Text(text),
        Some(_) => FieldInput::NotText,
    }
}

impl From<ClientRequest> for ClientFields {
    fn from(req: ClientRequest) -> Self {
        Self {
            nome: field_input(req.nome),
            cpf: field_input(req.cpf),
            telefone: field_input(req.telefone),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id_cliente: i32,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id_cliente: client.id.map(|id| id.0).unwrap_or_default(),
            nome: client.nome,
            cpf: client.cpf,
            telefone: client.telefone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensagem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedClientResponse {
    pub mensagem: String,
    pub id_cliente: i32,
}
