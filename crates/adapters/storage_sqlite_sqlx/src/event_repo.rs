//! `SQLite` implementation of [`EventRepository`].
//!
//! Timestamps are stored as fixed-width RFC 3339 text, so the range
//! comparisons below are plain lexicographic `TEXT` comparisons.

use std::future::Future;
use std::str::FromStr;

use chrono::Duration;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devman_app::ports::EventRepository;
use devman_domain::error::DevManError;
use devman_domain::event::{Event, EventType};
use devman_domain::id::{DeviceId, EventId};
use devman_domain::time::{self, Timestamp};

use crate::codec::{decode_err, decode_ts, encode_ts};
use crate::error::StorageError;

struct Wrapper(Event);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let device_id: String = row.try_get("device_id")?;
        let event_type: String = row.try_get("event_type")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Event {
            id: EventId::from_str(&id).map_err(decode_err)?,
            device_id: DeviceId::from_str(&device_id).map_err(decode_err)?,
            event_type: EventType::from_str(&event_type).map_err(decode_err)?,
            created_at: decode_ts(&created_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO events (id, device_id, event_type, created_at)
    VALUES (?, ?, ?, ?)
";
const SELECT_BY_DEVICE_RANGE: &str = r"
    SELECT * FROM events
    WHERE device_id = ? AND created_at >= ? AND created_at <= ?
    ORDER BY created_at DESC
";
const SELECT_SINCE: &str = r"
    SELECT * FROM events
    WHERE created_at >= ?
    ORDER BY created_at DESC
";

/// `SQLite`-backed event repository.
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EventRepository for SqliteEventRepository {
    fn create(&self, event: Event) -> impl Future<Output = Result<Event, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(event.id.to_string())
                .bind(event.device_id.to_string())
                .bind(event.event_type.as_str())
                .bind(encode_ts(event.created_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(event)
        }
    }

    fn get_by_device_id(
        &self,
        device_id: DeviceId,
        start: Timestamp,
        end: Timestamp,
    ) -> impl Future<Output = Result<Vec<Event>, DevManError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_DEVICE_RANGE)
                .bind(device_id.to_string())
                .bind(encode_ts(start))
                .bind(encode_ts(end))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_from_last_days(
        &self,
        days: u32,
    ) -> impl Future<Output = Result<Vec<Event>, DevManError>> + Send {
        let pool = self.pool.clone();
        let cutoff = time::now() - Duration::days(i64::from(days));
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_SINCE)
                .bind(encode_ts(cutoff))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client_repo::SqliteClientRepository;
    use crate::device_repo::SqliteDeviceRepository;
    use crate::pool::Config;
    use devman_app::ports::{ClientRepository, DeviceRepository};
    use devman_domain::client::Client;
    use devman_domain::device::Device;

    async fn setup() -> (SqliteEventRepository, DeviceId) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();

        let clients = SqliteClientRepository::new(pool.clone());
        let client = Client::create("Acme Corp", "a@b.com", None, true).unwrap();
        let client_id = client.id;
        clients.create(client).await.unwrap();

        let devices = SqliteDeviceRepository::new(pool.clone());
        let device =
            Device::create("SN-2024-ABC-1A2B3C4D", "123456789012345", client_id).unwrap();
        let device_id = device.id;
        devices.create(device).await.unwrap();

        (SqliteEventRepository::new(pool), device_id)
    }

    fn backdated(device_id: DeviceId, event_type: EventType, days_ago: i64) -> Event {
        let mut event = Event::new(device_id, event_type);
        event.created_at = time::now() - Duration::days(days_ago);
        event
    }

    #[tokio::test]
    async fn should_append_and_query_events_newest_first() {
        let (repo, device_id) = setup().await;
        repo.create(backdated(device_id, EventType::PoweredOn, 2))
            .await
            .unwrap();
        repo.create(backdated(device_id, EventType::Motion, 1))
            .await
            .unwrap();
        repo.create(Event::new(device_id, EventType::PoweredOff))
            .await
            .unwrap();

        let start = time::now() - Duration::days(3);
        let events = repo
            .get_by_device_id(device_id, start, time::now())
            .await
            .unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event_type, EventType::PoweredOff);
        assert_eq!(events[1].event_type, EventType::Motion);
        assert_eq!(events[2].event_type, EventType::PoweredOn);
    }

    #[tokio::test]
    async fn should_exclude_events_outside_the_range() {
        let (repo, device_id) = setup().await;
        repo.create(backdated(device_id, EventType::PoweredOn, 10))
            .await
            .unwrap();
        repo.create(backdated(device_id, EventType::Motion, 1))
            .await
            .unwrap();

        let start = time::now() - Duration::days(3);
        let events = repo
            .get_by_device_id(device_id, start, time::now())
            .await
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::Motion);
    }

    #[tokio::test]
    async fn should_only_return_events_for_the_requested_device() {
        let (repo, device_id) = setup().await;
        repo.create(Event::new(device_id, EventType::Motion))
            .await
            .unwrap();

        let start = time::now() - Duration::days(1);
        let events = repo
            .get_by_device_id(DeviceId::new(), start, time::now())
            .await
            .unwrap();

        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn should_window_events_by_day_count() {
        let (repo, device_id) = setup().await;
        repo.create(backdated(device_id, EventType::SignalLoss, 8))
            .await
            .unwrap();
        repo.create(backdated(device_id, EventType::Motion, 3))
            .await
            .unwrap();
        repo.create(Event::new(device_id, EventType::PoweredOn))
            .await
            .unwrap();

        let events = repo.get_from_last_days(7).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EventType::PoweredOn);
        assert_eq!(events[1].event_type, EventType::Motion);
    }
}
