//! `SQLite` implementation of [`ClientRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devman_app::ports::ClientRepository;
use devman_domain::client::Client;
use devman_domain::error::DevManError;
use devman_domain::id::ClientId;
use devman_domain::value::{ClientName, Email, PhoneNumber};

use crate::codec::{decode_err, decode_ts, encode_ts};
use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain [`Client`]s.
struct Wrapper(Client);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Client> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let email: String = row.try_get("email")?;
        let phone: Option<String> = row.try_get("phone")?;
        let status: bool = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = ClientId::from_str(&id).map_err(decode_err)?;
        let name = ClientName::new(name).map_err(decode_err)?;
        let email = Email::new(email).map_err(decode_err)?;
        let phone = phone.map(PhoneNumber::new).transpose().map_err(decode_err)?;

        Ok(Self(Client {
            id,
            name,
            email,
            phone,
            status,
            created_at: decode_ts(&created_at)?,
            updated_at: decode_ts(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO clients (id, name, email, phone, status, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM clients WHERE id = ?";
const SELECT_BY_EMAIL: &str = "SELECT * FROM clients WHERE email = ? AND status = 1";
const SELECT_ACTIVE: &str = "SELECT * FROM clients WHERE status = 1 ORDER BY id";
const UPDATE: &str = r"
    UPDATE clients SET name = ?, email = ?, phone = ?, status = ?, updated_at = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM clients WHERE id = ?";

/// `SQLite`-backed client repository.
pub struct SqliteClientRepository {
    pool: SqlitePool,
}

impl SqliteClientRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ClientRepository for SqliteClientRepository {
    fn create(&self, client: Client) -> impl Future<Output = Result<Client, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(client.id.to_string())
                .bind(client.name.as_str())
                .bind(client.email.as_str())
                .bind(client.phone.as_ref().map(PhoneNumber::as_str))
                .bind(client.status)
                .bind(encode_ts(client.created_at))
                .bind(encode_ts(client.updated_at))
                .execute(&pool)
                .await
                .map_err(write_error)?;

            Ok(client)
        }
    }

    fn get_by_id(
        &self,
        id: ClientId,
    ) -> impl Future<Output = Result<Option<Client>, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Client>, DevManError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Client>, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ACTIVE)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, client: Client) -> impl Future<Output = Result<Client, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(client.name.as_str())
                .bind(client.email.as_str())
                .bind(client.phone.as_ref().map(PhoneNumber::as_str))
                .bind(client.status)
                .bind(encode_ts(client.updated_at))
                .bind(client.id.to_string())
                .execute(&pool)
                .await
                .map_err(write_error)?;

            Ok(client)
        }
    }

    fn delete(&self, id: ClientId) -> impl Future<Output = Result<(), DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
