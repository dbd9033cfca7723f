use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::lead::{LeadRecord, NewLead};
use crate::models::resume::{NewResume, ResumeRecord};
use crate::repository::{LeadRepository, RepoError, ResumeRepository};

pub struct PgResumeRepository {
    pool: PgPool,
}

impl PgResumeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn create(&self, new: NewResume) -> Result<ResumeRecord, RepoError> {
        let record = sqlx::query_as::<_, ResumeRecord>(
            r#"
            INSERT INTO resumes
                (name, dob, gender, locality, city, pin, state, mobile, email,
                 job_city, profile_image, resume_file)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(new.name)
        .bind(new.dob)
        .bind(new.gender)
        .bind(new.locality)
        .bind(new.city)
        .bind(new.pin)
        .bind(new.state)
        .bind(new.mobile)
        .bind(new.email)
        .bind(new.job_city)
        .bind(new.profile_image)
        .bind(new.resume_file)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ResumeRecord>, RepoError> {
        let records =
            sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(records)
    }

    async fn get(&self, id: i64) -> Result<ResumeRecord, RepoError> {
        let record = sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }
}

pub struct PgLeadRepository {
    pool: PgPool,
}

impl PgLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for PgLeadRepository {
    async fn create(&self, new: NewLead) -> Result<LeadRecord, RepoError> {
        // No pre-check on email; a duplicate surfaces as the unique-constraint
        // violation from the database.
        let record = sqlx::query_as::<_, LeadRecord>(
            r#"
            INSERT INTO leads (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
