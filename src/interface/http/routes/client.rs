// HTTP routes: client CRUD.

use crate::application::usecases::create_client::{CreateClientError, CreateClientUseCase};
use crate::application::usecases::delete_client::{DeleteClientError, DeleteClientUseCase};
use crate::application::usecases::get_client::{GetClientError, GetClientUseCase};
use crate::application::usecases::list_clients::ListClientsUseCase;
use crate::application::usecases::update_client::{
    UpdateClientCommand, UpdateClientError, UpdateClientUseCase,
};
use crate::domain::value_objects::ids::ClientId;
use crate::interface::http::dto::client::{
    ClientRequest, ClientResponse, CreatedClientResponse, MessageResponse,
};
use crate::interface::http::problem::{
    CLIENT_NOT_FOUND, REQUEST_MALFORMED, STORAGE_DB_ERROR, problem, validation_problem,
};
use crate::interface::http::state::AppState;
use crate::interface::http::trace::TraceId;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tracing::warn;

const MSG_NOT_FOUND: &str = "Cliente não encontrado.";
const MSG_INVALID_ID: &str = "Identificador de cliente inválido.";

/// Builds the `/clientes` routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/clientes", get(list_clients).post(create_client))
        .route(
            "/clientes/:idCliente",
            get(get_client).put(update_client).delete(delete_client),
        )
}

fn parse_client_id(raw: &str, trace_id: &Option<String>) -> Result<ClientId, Response> {
    raw.parse::<ClientId>().map_err(|_| {
        problem(
            StatusCode::BAD_REQUEST,
            REQUEST_MALFORMED,
            MSG_INVALID_ID,
            Some(format!("/clientes/{raw}")),
            trace_id.clone(),
        )
    })
}

fn malformed_body(rejection: JsonRejection, trace_id: Option<String>) -> Response {
    warn!(error = %rejection.body_text(), "rejected client payload");
    problem(
        StatusCode::BAD_REQUEST,
        REQUEST_MALFORMED,
        "Corpo da requisição inválido.",
        None,
        trace_id,
    )
}

fn message(text: &str) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            mensagem: text.to_string(),
        }),
    )
        .into_response()
}

/// Lists every client.
async fn list_clients(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
) -> Response {
    match ListClientsUseCase::execute(&state.ctx).await {
        Ok(clients) => {
            let body: Vec<ClientResponse> = clients.into_iter().map(ClientResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(_) => problem(
            StatusCode::INTERNAL_SERVER_ERROR,
            STORAGE_DB_ERROR,
            "Não foi possível acessar a listagem de clientes.",
            None,
            Some(trace_id.0),
        ),
    }
}

/// Returns a single client.
async fn get_client(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Path(raw_id): Path<String>,
) -> Response {
    let trace_id = Some(trace_id.0);
    let client_id = match parse_client_id(&raw_id, &trace_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match GetClientUseCase::execute(&state.ctx, client_id).await {
        Ok(client) => (StatusCode::OK, Json(ClientResponse::from(client))).into_response(),
        Err(GetClientError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            CLIENT_NOT_FOUND,
            MSG_NOT_FOUND,
            Some(format!("/clientes/{client_id}")),
            trace_id,
        ),
        Err(GetClientError::Storage(_)) => problem(
            StatusCode::INTERNAL_SERVER_ERROR,
            STORAGE_DB_ERROR,
            "Não foi possível consultar o cliente.",
            None,
            trace_id,
        ),
    }
}

/// Registers a new client and returns its generated identifier.
async fn create_client(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    payload: Result<Json<ClientRequest>, JsonRejection>,
) -> Response {
    let trace_id = Some(trace_id.0);
    // Step 1: Decode the body.
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection, trace_id),
    };

    // Step 2: Run the use case and map the outcome.
    match CreateClientUseCase::execute(&state.ctx, payload.into()).await {
        Ok(client) => {
            let response = CreatedClientResponse {
                mensagem: "Cliente cadastrado com sucesso!".to_string(),
                id_cliente: client.id.map(|id| id.0).unwrap_or_default(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(CreateClientError::Validation(err)) => validation_problem(&err, trace_id),
        Err(CreateClientError::Storage(_)) => problem(
            StatusCode::INTERNAL_SERVER_ERROR,
            STORAGE_DB_ERROR,
            "Erro ao cadastrar o cliente. Entre em contato com o administrador do sistema.",
            None,
            trace_id,
        ),
    }
}

/// Replaces the fields of an existing client.
async fn update_client(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ClientRequest>, JsonRejection>,
) -> Response {
    let trace_id = Some(trace_id.0);
    // Step 1: Parse the id, then the body.
    let client_id = match parse_client_id(&raw_id, &trace_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection, trace_id),
    };

    // Step 2: Run the use case and map the outcome.
    let cmd = UpdateClientCommand {
        client_id,
        fields: payload.into(),
    };
    match UpdateClientUseCase::execute(&state.ctx, cmd).await {
        Ok(_) => message("O cliente foi atualizado com sucesso!"),
        Err(UpdateClientError::Validation(err)) => validation_problem(&err, trace_id),
        Err(UpdateClientError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            CLIENT_NOT_FOUND,
            MSG_NOT_FOUND,
            Some(format!("/clientes/{client_id}")),
            trace_id,
        ),
        Err(UpdateClientError::Storage(_)) => problem(
            StatusCode::INTERNAL_SERVER_ERROR,
            STORAGE_DB_ERROR,
            "Não foi possível atualizar o cliente. Entre em contato com o administrador do sistema.",
            None,
            trace_id,
        ),
    }
}

/// Removes a client.
async fn delete_client(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Path(raw_id): Path<String>,
) -> Response {
    let trace_id = Some(trace_id.0);
    let client_id = match parse_client_id(&raw_id, &trace_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match DeleteClientUseCase::execute(&state.ctx, client_id).await {
        Ok(()) => message("O cliente foi removido com sucesso!"),
        Err(DeleteClientError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            CLIENT_NOT_FOUND,
            MSG_NOT_FOUND,
            Some(format!("/clientes/{client_id}")),
            trace_id,
        ),
        Err(DeleteClientError::Storage(_)) => problem(
            StatusCode::INTERNAL_SERVER_ERROR,
            STORAGE_DB_ERROR,
            "Erro ao remover o cliente. Entre em contato com o administrador do sistema.",
            None,
            trace_id,
        ),
    }
}
