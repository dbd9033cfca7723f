//! Repository seam between the HTTP handlers and storage.
//!
//! Handlers only see the traits; `postgres` implements them against the real
//! database and `memory` backs the handler tests.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::lead::{LeadRecord, NewLead};
use crate::models::resume::{NewResume, ResumeRecord};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,
    #[error("{0}")]
    Storage(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => RepoError::NotFound,
            other => RepoError::Storage(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn create(&self, new: NewResume) -> Result<ResumeRecord, RepoError>;
    async fn list(&self) -> Result<Vec<ResumeRecord>, RepoError>;
    async fn get(&self, id: i64) -> Result<ResumeRecord, RepoError>;
}

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create(&self, new: NewLead) -> Result<LeadRecord, RepoError>;
}
