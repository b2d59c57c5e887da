use crate::database::{model::room::RoomRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, RoomListOptions},
        Room,
    },
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

use super::{classify_fk_violation, classify_unique_violation};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let name = event.normalized_name();

        // Pre-check on the normalized form. The UNIQUE constraint on
        // rooms.name still backs this up when two creations race.
        let existing: Option<RoomRow> = sqlx::query_as(
            r#"
                SELECT id, name, capacity, location
                FROM rooms
                WHERE name = $1
            "#,
        )
        .bind(&name)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing.is_some() {
            return Err(AppError::DuplicateEntry(format!(
                "a room named \"{}\" already exists",
                event.name
            )));
        }

        let row: RoomRow = sqlx::query_as(
            r#"
                INSERT INTO rooms (name, capacity, location)
                VALUES ($1, $2, $3)
                RETURNING id, name, capacity, location
            "#,
        )
        .bind(&name)
        .bind(event.capacity)
        .bind(&event.location)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| classify_unique_violation(e, "a room with this name already exists"))?;

        Ok(row.into())
    }

    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT id, name, capacity, location
                FROM rooms
                WHERE $1::TEXT IS NULL OR name ILIKE '%' || $1 || '%'
                ORDER BY id ASC
            "#,
        )
        .bind(options.name)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
                SELECT id, name, capacity, location
                FROM rooms
                WHERE id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Room::from))
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<bool> {
        let res = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(room_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(|e| classify_fk_violation(e, "room still has reservations"))?;

        Ok(res.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_room_stores_normalized_name(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool));

        let room = repo
            .create(CreateRoom::new(" Lab A ".into(), 10, "Bloco B".into()))
            .await?;
        assert_eq!(room.name, "lab a");
        assert_eq!(room.capacity, 10);
        assert_eq!(room.location, "Bloco B");

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_duplicate_normalized_name_is_rejected(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateRoom::new("Lab A".into(), 10, "Bloco B".into()))
            .await?;
        let res = repo
            .create(CreateRoom::new(" lab a ".into(), 4, "Bloco C".into()))
            .await;

        assert!(matches!(res, Err(AppError::DuplicateEntry(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_find_all_filters_by_substring(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateRoom::new("Lab A".into(), 10, "Bloco B".into()))
            .await?;
        repo.create(CreateRoom::new("Auditório".into(), 80, "Bloco A".into()))
            .await?;

        let all = repo.find_all(RoomListOptions::default()).await?;
        assert_eq!(all.len(), 2);

        let labs = repo
            .find_all(RoomListOptions {
                name: Some("LAB".into()),
            })
            .await?;
        assert_eq!(labs.len(), 1);
        assert_eq!(labs[0].name, "lab a");

        Ok(())
    }
}
