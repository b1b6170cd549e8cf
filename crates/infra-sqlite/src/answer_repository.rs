// SQLite AnswerRepository Implementation

use crate::error::{is_foreign_key_violation, map_sqlx_error};
use async_trait::async_trait;
use qanda_core::domain::{Answer, AnswerId, NewAnswer};
use qanda_core::error::{AppError, Result};
use qanda_core::port::{AnswerRepository, TimeProvider};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct SqliteAnswerRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteAnswerRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl AnswerRepository for SqliteAnswerRepository {
    async fn insert(&self, answer: &NewAnswer) -> Result<Answer> {
        let created_at = self.time_provider.now_millis();

        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            INSERT INTO answers (question_id, user_id, text, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, question_id, user_id, text, created_at
            "#,
        )
        .bind(answer.question_id())
        .bind(answer.user_id())
        .bind(answer.text())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::question_not_found(answer.question_id())
            } else {
                map_sqlx_error(e)
            }
        })?;

        Ok(row.into_answer())
    }

    async fn find_by_id(&self, id: AnswerId) -> Result<Option<Answer>> {
        let row = sqlx::query_as::<_, AnswerRow>(
            "SELECT id, question_id, user_id, text, created_at FROM answers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(AnswerRow::into_answer))
    }

    async fn delete(&self, id: AnswerId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM answers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AnswerRow {
    id: i64,
    question_id: i64,
    user_id: String,
    text: String,
    created_at: i64,
}

impl AnswerRow {
    pub(crate) fn into_answer(self) -> Answer {
        Answer {
            id: self.id,
            question_id: self.question_id,
            user_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}
