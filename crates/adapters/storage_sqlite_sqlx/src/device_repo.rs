//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devman_app::ports::DeviceRepository;
use devman_domain::device::Device;
use devman_domain::error::DevManError;
use devman_domain::id::{ClientId, DeviceId};
use devman_domain::value::{Imei, SerialNumber};

use crate::codec::{decode_err, decode_ts, encode_ts};
use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain [`Device`]s.
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let serial: String = row.try_get("serial")?;
        let imei: String = row.try_get("imei")?;
        let activated_at: Option<String> = row.try_get("activated_at")?;
        let client_id: String = row.try_get("client_id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = DeviceId::from_str(&id).map_err(decode_err)?;
        let serial = SerialNumber::new(serial).map_err(decode_err)?;
        let imei = Imei::new(imei).map_err(decode_err)?;
        let client_id = ClientId::from_str(&client_id).map_err(decode_err)?;
        let activated_at = activated_at.as_deref().map(decode_ts).transpose()?;

        Ok(Self(Device {
            id,
            serial,
            imei,
            activated_at,
            client_id,
            created_at: decode_ts(&created_at)?,
            updated_at: decode_ts(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO devices (id, serial, imei, activated_at, client_id, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_BY_SERIAL: &str = "SELECT * FROM devices WHERE serial = ?";
const SELECT_BY_CLIENT: &str = "SELECT * FROM devices WHERE client_id = ? ORDER BY id";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY id";
const UPDATE: &str = r"
    UPDATE devices SET serial = ?, imei = ?, activated_at = ?, client_id = ?, updated_at = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM devices WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DevManError>> + Send {
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

    fn get_by_serial(
        &self,
        serial: &str,
    ) -> impl Future<Output = Result<Option<Device>, DevManError>> + Send {
        let pool = self.pool.clone();
        let serial = serial.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_SERIAL)
                .bind(serial)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_by_client_id(
        &self,
        client_id: ClientId,
    ) -> impl Future<Output = Result<Vec<Device>, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CLIENT)
                .bind(client_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn create(&self, device: Device) -> impl Future<Output = Result<Device, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(device.id.to_string())
                .bind(device.serial.as_str())
                .bind(device.imei.as_str())
                .bind(device.activated_at.map(encode_ts))
                .bind(device.client_id.to_string())
                .bind(encode_ts(device.created_at))
                .bind(encode_ts(device.updated_at))
                .execute(&pool)
                .await
                .map_err(write_error)?;

            Ok(device)
        }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(device.serial.as_str())
                .bind(device.imei.as_str())
                .bind(device.activated_at.map(encode_ts))
                .bind(device.client_id.to_string())
                .bind(encode_ts(device.updated_at))
                .bind(device.id.to_string())
                .execute(&pool)
                .await
                .map_err(write_error)?;

            Ok(device)
        }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DevManError>> + Send {
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
