// Migration Runner

use sqlx::SqlitePool;
use tracing::info;

/// Embedded migrations, applied in order
const MIGRATIONS: &[(i64, &str, &str)] = &[(
    1,
    "Initial schema (questions, answers)",
    include_str!("../migrations/001_initial_schema.sql"),
)];

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
    info!("Running database migrations...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    let current_version: i64 =
        sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
            .fetch_one(pool)
            .await?;

    info!("Current schema version: {}", current_version);

    for (version, description, sql) in MIGRATIONS {
        if *version <= current_version {
            continue;
        }
        info!("Applying migration {:03}: {}", version, description);
        apply_migration(pool, *version, sql).await?;
    }

    info!("All migrations applied successfully");
    Ok(())
}

/// Apply a single migration SQL file and record its version atomically
async fn apply_migration(
    pool: &SqlitePool,
    version: i64,
    sql: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tx = pool.begin().await?;

    // Split by semicolon and execute each statement
    for statement in sql.split(';') {
        let clean_statement: String = statement
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        if !clean_statement.is_empty() {
            sqlx::query(&clean_statement).execute(&mut *tx).await?;
        }
    }

    sqlx::query(
        "INSERT INTO schema_version (version, applied_at) \
         VALUES (?, strftime('%s', 'now') * 1000)",
    )
    .bind(version)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
