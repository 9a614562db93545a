use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::*;

pub struct UserQueries;

impl UserQueries {
    pub async fn create_user(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, requests_today, last_request_date, premium, created_at)
            VALUES (?, ?, ?, ?, 0, NULL, 0, ?)
            RETURNING id, username, email, password_hash, requests_today, last_request_date, premium, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, requests_today, last_request_date, premium, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, requests_today, last_request_date, premium, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email_or_username(
        pool: &SqlitePool,
        email: &str,
        username: &str,
    ) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, requests_today, last_request_date, premium, created_at FROM users WHERE email = ? OR username = ?",
        )
        .bind(email)
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    // Last-write-wins; the daily counter has no isolation against concurrent
    // requests from the same account, so it can overshoot by one under load.
    pub async fn update_quota(
        pool: &SqlitePool,
        id: Uuid,
        requests_today: i64,
        last_request_date: NaiveDate,
    ) -> Result<()> {
        sqlx::query("UPDATE users SET requests_today = ?, last_request_date = ? WHERE id = ?")
            .bind(requests_today)
            .bind(last_request_date)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn set_premium(pool: &SqlitePool, id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET premium = 1 WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

pub struct HistoryQueries;

impl HistoryQueries {
    pub async fn append(
        pool: &SqlitePool,
        user_id: Uuid,
        ingredients: &str,
        recipe: &str,
    ) -> Result<RecipeHistory> {
        let row = sqlx::query_as::<_, RecipeHistory>(
            r#"
            INSERT INTO recipes_history (id, user_id, ingredients, recipe, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, ingredients, recipe, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(ingredients)
        .bind(recipe)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn list_for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<RecipeHistory>> {
        let rows = sqlx::query_as::<_, RecipeHistory>(
            r#"
            SELECT id, user_id, ingredients, recipe, created_at
            FROM recipes_history
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    pub async fn count_for_user(pool: &SqlitePool, user_id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM recipes_history WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}

pub struct PaymentQueries;

impl PaymentQueries {
    pub async fn create_payment(
        pool: &SqlitePool,
        user_id: Uuid,
        amount: f64,
        status: &str,
    ) -> Result<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, user_id, amount, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, amount, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(amount)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(payment)
    }

    pub async fn list_for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT id, user_id, amount, status, created_at FROM payments WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(payments)
    }
}
