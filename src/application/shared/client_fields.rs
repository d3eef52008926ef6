use crate::domain::entities::client::{Client, ClientValidationError, FieldInput};

/// Raw client fields as received from a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct ClientFields {
    pub nome: FieldInput,
    pub cpf: FieldInput,
    pub telefone: FieldInput,
}

impl ClientFields {
    pub fn into_client(self) -> Result<Client, ClientValidationError> {
        Client::from_fields(self.nome, self.cpf, self.telefone)
    }
}
