//! Shared wiring: services over a real SQLite store

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use qanda_core::application::{AnswerService, QuestionService};
use qanda_core::port::time_provider::SystemTimeProvider;
use qanda_core::port::TimeProvider;
use qanda_infra_sqlite::{
    create_pool, run_migrations, SqliteAnswerRepository, SqliteQuestionRepository,
};
use sqlx::SqlitePool;

pub struct TestApp {
    pub pool: SqlitePool,
    pub questions: QuestionService,
    pub answers: AnswerService,
}

impl TestApp {
    pub async fn in_memory() -> Self {
        Self::open("sqlite::memory:").await
    }

    pub async fn open(database_url: &str) -> Self {
        let pool = create_pool(database_url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Self::with_pool(pool)
    }

    pub fn with_pool(pool: SqlitePool) -> Self {
        let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
        let question_repo = Arc::new(SqliteQuestionRepository::new(
            pool.clone(),
            time_provider.clone(),
        ));
        let answer_repo = Arc::new(SqliteAnswerRepository::new(pool.clone(), time_provider));

        Self {
            pool,
            questions: QuestionService::new(question_repo.clone()),
            answers: AnswerService::new(answer_repo, question_repo),
        }
    }

    /// Rows in the answers table for a question, read straight from storage
    pub async fn stored_answer_count(&self, question_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM answers WHERE question_id = ?")
            .bind(question_id)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

/// Fresh database file under the system temp dir
pub fn temp_db_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "qanda-{}-{}-{}.db",
        name,
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    cleanup(&path);
    path
}

pub fn db_url(path: &PathBuf) -> String {
    format!("sqlite://{}", path.display())
}

pub fn cleanup(path: &PathBuf) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
    }
}
