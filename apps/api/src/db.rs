use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Ensures the two tables exist. The DDL is idempotent, so this runs at
/// every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id            BIGSERIAL PRIMARY KEY,
            name          TEXT NOT NULL,
            dob           DATE NOT NULL,
            gender        TEXT NOT NULL,
            locality      TEXT NOT NULL,
            city          TEXT NOT NULL,
            pin           INTEGER NOT NULL CHECK (pin >= 0),
            state         TEXT NOT NULL,
            mobile        BIGINT NOT NULL,
            email         TEXT NOT NULL,
            job_city      TEXT NOT NULL,
            profile_image TEXT,
            resume_file   TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS leads (
            id         BIGSERIAL PRIMARY KEY,
            name       TEXT NOT NULL,
            email      TEXT NOT NULL UNIQUE,
            phone      TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema ensured");
    Ok(())
}
