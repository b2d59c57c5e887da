use crate::database::{
    model::{reservation::ReservationRow, room::RoomRow, user::UserRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::{
    id::ReservationId,
    reservation::{
        event::{CreateReservation, ReservationListOptions},
        Reservation, ReservationRoom, ReservationUser,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use super::classify_unique_violation;

const RESERVATION_SELECT: &str = r#"
    SELECT
        r.id,
        r.room_id,
        r.user_id,
        r.start_time,
        r.end_time,
        r.participants,
        s.name AS room_name,
        s.capacity AS room_capacity,
        s.location AS room_location,
        u.name AS user_name,
        u.email AS user_email
    FROM reservations AS r
    INNER JOIN rooms AS s ON r.room_id = s.id
    INNER JOIN users AS u ON r.user_id = u.id
"#;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        // Pre-checks: the referenced room and user must exist, and the
        // participant count must fit the room. Reads and the insert
        // share one transaction so the checks see a consistent state.
        let room: Option<RoomRow> =
            sqlx::query_as("SELECT id, name, capacity, location FROM rooms WHERE id = $1")
                .bind(event.room_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        let Some(room) = room else {
            return Err(AppError::EntityNotFound(format!(
                "room {} does not exist",
                event.room_id
            )));
        };

        let user: Option<UserRow> =
            sqlx::query_as("SELECT id, name, email FROM users WHERE id = $1")
                .bind(event.user_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        let Some(user) = user else {
            return Err(AppError::EntityNotFound(format!(
                "user {} does not exist",
                event.user_id
            )));
        };

        if event.participants > room.capacity {
            return Err(AppError::UnprocessableEntity(format!(
                "participant count ({}) exceeds the capacity of room \"{}\" ({})",
                event.participants, room.name, room.capacity
            )));
        }

        let id: ReservationId = sqlx::query_scalar(
            r#"
                INSERT INTO reservations (room_id, user_id, start_time, end_time, participants)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
            "#,
        )
        .bind(event.room_id)
        .bind(event.user_id)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.participants)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify_unique_violation(e, "an identical reservation already exists"))?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Reservation {
            id,
            room_id: event.room_id,
            user_id: event.user_id,
            start_time: event.start_time,
            end_time: event.end_time,
            participants: event.participants,
            room: ReservationRoom {
                name: room.name,
                capacity: room.capacity,
                location: room.location,
            },
            user: ReservationUser {
                name: user.name,
                email: user.email,
            },
        })
    }

    async fn find_all(&self, options: ReservationListOptions) -> AppResult<Vec<Reservation>> {
        let sql = format!(
            r#"{RESERVATION_SELECT}
                WHERE ($1::BIGINT IS NULL OR r.room_id = $1)
                  AND ($2::BIGINT IS NULL OR r.user_id = $2)
                ORDER BY r.id ASC
            "#
        );
        let rows: Vec<ReservationRow> = sqlx::query_as(&sql)
            .bind(options.room_id)
            .bind(options.user_id)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn find_overlapping(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Reservation>> {
        // Half-open intervals: [start, end) overlaps [qstart, qend)
        // iff start < qend AND end > qstart.
        let sql = format!(
            r#"{RESERVATION_SELECT}
                WHERE r.start_time < $2
                  AND r.end_time > $1
                ORDER BY r.start_time ASC
            "#
        );
        let rows: Vec<ReservationRow> = sqlx::query_as(&sql)
            .bind(start)
            .bind(end)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn find_by_id(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<Option<Reservation>> {
        let sql = format!("{RESERVATION_SELECT} WHERE r.id = $1");
        let row: Option<ReservationRow> = sqlx::query_as(&sql)
            .bind(reservation_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Reservation::from))
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<bool> {
        let res = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(reservation_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{room::RoomRepositoryImpl, user::UserRepositoryImpl};
    use chrono::TimeZone;
    use kernel::model::{
        id::{RoomId, UserId},
        room::{event::CreateRoom, Room},
        user::{event::CreateUser, User},
    };
    use kernel::repository::{room::RoomRepository, user::UserRepository};

    async fn seed(pool: &sqlx::PgPool) -> anyhow::Result<(Room, User)> {
        let rooms = RoomRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let room = rooms
            .create(CreateRoom::new("Lab A".into(), 5, "Bloco B".into()))
            .await?;
        let user = users
            .create(CreateUser::new("Ana".into(), "ana@x.com".into()))
            .await?;
        Ok((room, user))
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 26, hour, 0, 0).unwrap()
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_create_fails_for_missing_room(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let (_, user) = seed(&pool).await?;

        let res = repo
            .create(CreateReservation::new(
                RoomId::new(4242),
                user.id,
                at(10),
                at(12),
                2,
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        // Nothing was persisted by the failed attempt.
        let all = repo.find_all(ReservationListOptions::default()).await?;
        assert!(all.is_empty());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_create_fails_for_missing_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let (room, _) = seed(&pool).await?;

        let res = repo
            .create(CreateReservation::new(
                room.id,
                UserId::new(4242),
                at(10),
                at(12),
                2,
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_capacity_is_enforced_at_the_boundary(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let (room, user) = seed(&pool).await?;

        // Room capacity is 5: ten participants is over, five is exactly at it.
        let res = repo
            .create(CreateReservation::new(room.id, user.id, at(10), at(12), 10))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        let created = repo
            .create(CreateReservation::new(room.id, user.id, at(10), at(12), 5))
            .await?;
        assert_eq!(created.participants, 5);
        assert_eq!(created.room.name, "lab a");
        assert_eq!(created.user.email, "ana@x.com");

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_overlap_query_uses_half_open_intervals(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let (room, user) = seed(&pool).await?;

        // [08:00, 10:00) touches the query start, [12:00, 14:00) touches
        // the query end; only [11:00, 13:00) overlaps [10:00, 12:00).
        repo.create(CreateReservation::new(room.id, user.id, at(8), at(10), 1))
            .await?;
        let inside = repo
            .create(CreateReservation::new(room.id, user.id, at(11), at(13), 1))
            .await?;
        repo.create(CreateReservation::new(room.id, user.id, at(12), at(14), 1))
            .await?;

        let overlapping = repo.find_overlapping(at(10), at(12)).await?;
        assert_eq!(overlapping.len(), 1);
        assert_eq!(overlapping[0].id, inside.id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_find_all_filters_by_room_and_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let rooms = RoomRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let (room_a, user) = seed(&pool).await?;
        let room_b = rooms
            .create(CreateRoom::new("Lab B".into(), 5, "Bloco C".into()))
            .await?;

        repo.create(CreateReservation::new(room_a.id, user.id, at(8), at(9), 1))
            .await?;
        repo.create(CreateReservation::new(room_b.id, user.id, at(9), at(10), 1))
            .await?;

        let by_room = repo
            .find_all(ReservationListOptions {
                room_id: Some(room_b.id),
                user_id: None,
            })
            .await?;
        assert_eq!(by_room.len(), 1);
        assert_eq!(by_room[0].room_id, room_b.id);

        let by_user = repo
            .find_all(ReservationListOptions {
                room_id: None,
                user_id: Some(user.id),
            })
            .await?;
        assert_eq!(by_user.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_room_with_reservations_cannot_be_deleted(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let rooms = RoomRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let (room, user) = seed(&pool).await?;

        let reservation = repo
            .create(CreateReservation::new(room.id, user.id, at(10), at(12), 1))
            .await?;

        let res = rooms.delete(room.id).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // Once the reservation is gone the room can be removed.
        assert!(repo.delete(reservation.id).await?);
        assert!(rooms.delete(room.id).await?);

        Ok(())
    }
}
