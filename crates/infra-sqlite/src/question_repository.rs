// SQLite QuestionRepository Implementation

use crate::answer_repository::AnswerRow;
use crate::error::map_sqlx_error;
use async_trait::async_trait;
use qanda_core::domain::{NewQuestion, Question, QuestionId};
use qanda_core::error::Result;
use qanda_core::port::{QuestionRepository, TimeProvider};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;

pub struct SqliteQuestionRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteQuestionRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn insert(&self, question: &NewQuestion) -> Result<Question> {
        let created_at = self.time_provider.now_millis();

        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (text, created_at)
            VALUES (?, ?)
            RETURNING id, text, created_at
            "#,
        )
        .bind(question.text())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_question(Vec::new()))
    }

    async fn list(&self) -> Result<Vec<Question>> {
        let rows: Vec<QuestionRow> =
            sqlx::query_as("SELECT id, text, created_at FROM questions ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_question(Vec::new()))
            .collect())
    }

    async fn find_by_id(&self, id: QuestionId, with_answers: bool) -> Result<Option<Question>> {
        // Question row and its answers are read from one snapshot
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let row = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, text, created_at FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let answers = if with_answers {
            let answer_rows: Vec<AnswerRow> = sqlx::query_as(
                r#"
                SELECT id, question_id, user_id, text, created_at
                FROM answers
                WHERE question_id = ?
                ORDER BY id ASC
                "#,
            )
            .bind(id)
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

            answer_rows.into_iter().map(AnswerRow::into_answer).collect()
        } else {
            Vec::new()
        };

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(Some(row.into_question(answers)))
    }

    async fn exists(&self, id: QuestionId) -> Result<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM questions WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(found != 0)
    }

    async fn delete_cascade(&self, id: QuestionId) -> Result<Option<u64>> {
        // Every statement here writes, so the write lock is taken before any
        // snapshot exists and a competing writer is waited out by busy_timeout
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let answers_removed = sqlx::query("DELETE FROM answers WHERE question_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .rows_affected();

        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(map_sqlx_error)?;
            return Ok(None);
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        debug!(question_id = id, answers_removed, "Cascade delete committed");
        Ok(Some(answers_removed))
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    created_at: i64,
}

impl QuestionRow {
    fn into_question(self, answers: Vec<qanda_core::domain::Answer>) -> Question {
        Question {
            id: self.id,
            text: self.text,
            created_at: self.created_at,
            answers,
        }
    }
}
