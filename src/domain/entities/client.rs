use crate::domain::value_objects::ids::ClientId;
use thiserror::Error;

/// A registered client. `id` is `None` until storage assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: Option<ClientId>,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
}

impl Client {
    pub fn new(
        nome: impl Into<String>,
        cpf: impl Into<String>,
        telefone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            cpf: cpf.into(),
            telefone: telefone.into(),
        }
    }

    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }

    /// Build a client from raw, possibly missing or mistyped, input fields.
    ///
    /// Every field must be present, textual and non-blank. Values are stored as
    /// given, surrounding whitespace included.
    pub fn from_fields(
        nome: FieldInput,
        cpf: FieldInput,
        telefone: FieldInput,
    ) -> Result<Self, ClientValidationError> {
        let mut fields = Vec::new();
        let nome = required("nome", nome, &mut fields);
        let cpf = required("cpf", cpf, &mut fields);
        let telefone = required("telefone", telefone, &mut fields);

        match (nome, cpf, telefone) {
            (Some(nome), Some(cpf), Some(telefone)) => Ok(Self::new(nome, cpf, telefone)),
            _ => Err(ClientValidationError { fields }),
        }
    }
}

fn required(
    field: &'static str,
    value: FieldInput,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let message = match value {
        FieldInput::Text(v) if !v.trim().is_empty() => return Some(v),
        FieldInput::Text(_) => "must not be blank",
        FieldInput::NotText => "must be a string",
        FieldInput::Missing => "is required",
    };
    errors.push(FieldError::new(field, message));
    None
}

/// One raw input field as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldInput {
    #[default]
    Missing,
    Text(String),
    /// Present, but not a string (a number, a boolean, an object...).
    NotText,
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid client fields: {}", field_list(.fields))]
pub struct ClientValidationError {
    pub fields: Vec<FieldError>,
}

fn field_list(fields: &[FieldError]) -> String {
    fields.iter().map(|f| f.field).collect::<Vec<_>>().join(", ")
}

impl ClientValidationError {
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.field).collect()
    }
}
