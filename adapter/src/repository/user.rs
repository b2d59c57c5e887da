use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use super::{classify_fk_violation, classify_unique_violation};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users (name, email)
                VALUES ($1, $2)
                RETURNING id, name, email
            "#,
        )
        .bind(&event.name)
        .bind(&event.email)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| classify_unique_violation(e, "email is already registered"))?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT id, name, email
                FROM users
                ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, name, email
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, user_id: UserId) -> AppResult<bool> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(|e| classify_fk_violation(e, "user still has reservations"))?;

        Ok(res.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_user_round_trip(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateUser::new("Ana".into(), "ana@x.com".into()))
            .await?;

        let fetched = repo.find_by_id(created.id).await?;
        assert_eq!(fetched, Some(created.clone()));
        assert_eq!(created.name, "Ana");
        assert_eq!(created.email, "ana@x.com");

        assert!(repo.delete(created.id).await?);
        assert_eq!(repo.find_by_id(created.id).await?, None);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_duplicate_email_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateUser::new("Ana".into(), "ana@x.com".into()))
            .await?;
        let res = repo
            .create(CreateUser::new("Outra Ana".into(), "ana@x.com".into()))
            .await;

        assert!(matches!(res, Err(AppError::DuplicateEntry(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_delete_missing_user_is_a_no_op(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        assert!(!repo.delete(UserId::new(4242)).await?);

        Ok(())
    }
}
