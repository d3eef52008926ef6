use crate::infrastructure::db::dto::ClientRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
use async_trait::async_trait;
use sqlx::PgConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct ClientStorePostgres {
    db: Arc<PostgresDatabase>,
}

impl ClientStorePostgres {
    /// Build a Postgres-backed client store.
    pub fn new(db: Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn list_impl_conn(
        conn: &mut PgConnection,
    ) -> Result<Vec<ClientRow>, ClientRepositoryError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            "SELECT
                id_cliente,
                nome,
                cpf,
                telefone
            FROM cliente
            ORDER BY id_cliente",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }

    async fn get_impl_conn(
        conn: &mut PgConnection,
        id_cliente: i32,
    ) -> Result<Option<ClientRow>, ClientRepositoryError> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT
                id_cliente,
                nome,
                cpf,
                telefone
            FROM cliente
            WHERE id_cliente = $1",
        )
        .bind(id_cliente)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row)
    }

    async fn insert_impl_conn(
        conn: &mut PgConnection,
        row: &ClientRow,
    ) -> Result<ClientRow, ClientRepositoryError> {
        let stored = sqlx::query_as::<_, ClientRow>(
            "INSERT INTO cliente (
                nome,
                cpf,
                telefone
            )
            VALUES ($1, $2, $3)
            RETURNING
                id_cliente,
                nome,
                cpf,
                telefone",
        )
        .bind(&row.nome)
        .bind(&row.cpf)
        .bind(&row.telefone)
        .fetch_one(&mut *conn)
        .await?;

        Ok(stored)
    }

    async fn update_impl_conn(
        conn: &mut PgConnection,
        row: &ClientRow,
    ) -> Result<ClientRow, ClientRepositoryError> {
        let stored = sqlx::query_as::<_, ClientRow>(
            "UPDATE cliente SET
                nome = $2,
                cpf = $3,
                telefone = $4
            WHERE id_cliente = $1
            RETURNING
                id_cliente,
                nome,
                cpf,
                telefone",
        )
        .bind(row.id_cliente)
        .bind(&row.nome)
        .bind(&row.cpf)
        .bind(&row.telefone)
        .fetch_optional(&mut *conn)
        .await?;

        stored.ok_or(ClientRepositoryError::NotFound)
    }

    async fn delete_impl_conn(
        conn: &mut PgConnection,
        id_cliente: i32,
    ) -> Result<(), ClientRepositoryError> {
        let result = sqlx::query("DELETE FROM cliente WHERE id_cliente = $1")
            .bind(id_cliente)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ClientRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ClientStore for ClientStorePostgres {
    async fn list(&self) -> Result<Vec<ClientRow>, ClientRepositoryError> {
        self.db
            .with_conn(|conn| Box::pin(Self::list_impl_conn(conn)))
            .await
    }

    async fn get(&self, id_cliente: i32) -> Result<Option<ClientRow>, ClientRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::get_impl_conn(conn, id_cliente)))
            .await
    }

    async fn insert(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| Box::pin(async move { Self::insert_impl_conn(conn, &row).await }))
            .await
    }

    async fn update(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| Box::pin(async move { Self::update_impl_conn(conn, &row).await }))
            .await
    }

    async fn delete(&self, id_cliente: i32) -> Result<(), ClientRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::delete_impl_conn(conn, id_cliente)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::ClientStorePostgres;
    use crate::config::Db;
    use crate::infrastructure::db::database::Database;
    use crate::infrastructure::db::dto::ClientRow;
    use crate::infrastructure::db::postgres::PostgresDatabase;
    use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
    use std::sync::Arc;

    async fn setup_store() -> Option<ClientStorePostgres> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let settings = Db {
            url,
            max_connections: 2,
            connect_timeout_ms: 2_000,
            statement_timeout_ms: 5_000,
        };
        let db = Arc::new(PostgresDatabase::connect(&settings).await.ok()?);
        db.execute(include_str!("../../../../sql/cliente.sql"))
            .await
            .ok()?;
        Some(ClientStorePostgres::new(db))
    }

    fn sample_row(nome: &str) -> ClientRow {
        ClientRow {
            id_cliente: 0,
            nome: nome.to_string(),
            cpf: "12345678900".to_string(),
            telefone: "11999990000".to_string(),
        }
    }

    #[tokio::test]
    async fn given_new_client_when_insert_should_return_generated_id() {
        let Some(store) = setup_store().await else { return; };
        let row = sample_row("Ana");

        let stored = store.insert(&row).await.unwrap();

        assert!(stored.id_cliente > 0);
        assert_eq!(stored.nome, row.nome);
        store.delete(stored.id_cliente).await.unwrap();
    }

    #[tokio::test]
    async fn given_quoted_name_when_insert_should_store_verbatim() {
        let Some(store) = setup_store().await else { return; };
        let row = sample_row("O'Brien'); DROP TABLE cliente; --");

        let stored = store.insert(&row).await.unwrap();
        let fetched = store.get(stored.id_cliente).await.unwrap().unwrap();

        assert_eq!(fetched.nome, row.nome);
        store.delete(stored.id_cliente).await.unwrap();
    }

    #[tokio::test]
    async fn given_existing_client_when_list_should_include_row() {
        let Some(store) = setup_store().await else { return; };
        let stored = store.insert(&sample_row("Listed")).await.unwrap();

        let rows = store.list().await.unwrap();

        assert!(rows.contains(&stored));
        store.delete(stored.id_cliente).await.unwrap();
    }

    #[tokio::test]
    async fn given_existing_client_when_update_should_return_new_values() {
        let Some(store) = setup_store().await else { return; };
        let mut row = store.insert(&sample_row("Before")).await.unwrap();
        row.nome = "After".to_string();

        let updated = store.update(&row).await.unwrap();

        assert_eq!(updated, row);
        store.delete(row.id_cliente).await.unwrap();
    }

    #[tokio::test]
    async fn given_missing_client_when_update_should_return_not_found() {
        let Some(store) = setup_store().await else { return; };
        let mut row = sample_row("Ghost");
        row.id_cliente = i32::MAX;

        let err = store.update(&row).await.unwrap_err();

        assert_eq!(err, ClientRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn given_missing_client_when_delete_should_return_not_found() {
        let Some(store) = setup_store().await else { return; };

        let err = store.delete(i32::MAX).await.unwrap_err();

        assert_eq!(err, ClientRepositoryError::NotFound);
    }
}
