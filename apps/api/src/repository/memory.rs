//! In-memory repositories backing the handler tests. They mirror the schema
//! behavior the Postgres implementations rely on: serial ids starting at 1
//! and a unique constraint on lead email.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::lead::{LeadRecord, NewLead};
use crate::models::resume::{NewResume, ResumeRecord};
use crate::repository::{LeadRepository, RepoError, ResumeRepository};

#[derive(Default)]
pub struct MemoryResumeRepository {
    records: Mutex<Vec<ResumeRecord>>,
}

#[async_trait]
impl ResumeRepository for MemoryResumeRepository {
    async fn create(&self, new: NewResume) -> Result<ResumeRecord, RepoError> {
        let mut records = self.records.lock().unwrap();
        let record = ResumeRecord {
            id: records.len() as i64 + 1,
            name: new.name,
            dob: new.dob,
            gender: new.gender,
            locality: new.locality,
            city: new.city,
            pin: new.pin,
            state: new.state,
            mobile: new.mobile,
            email: new.email,
            job_city: new.job_city,
            profile_image: new.profile_image,
            resume_file: new.resume_file,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ResumeRecord>, RepoError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<ResumeRecord, RepoError> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

#[derive(Default)]
pub struct MemoryLeadRepository {
    records: Mutex<Vec<LeadRecord>>,
}

impl MemoryLeadRepository {
    pub fn all(&self) -> Vec<LeadRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadRepository for MemoryLeadRepository {
    async fn create(&self, new: NewLead) -> Result<LeadRecord, RepoError> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.email == new.email) {
            return Err(RepoError::Storage(format!(
                "duplicate key value violates unique constraint \"leads_email_key\" (email={})",
                new.email
            )));
        }
        let record = LeadRecord {
            id: records.len() as i64 + 1,
            name: new.name,
            email: new.email,
            phone: new.phone,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_resume() -> NewResume {
        NewResume {
            name: "Asha Rao".to_string(),
            dob: NaiveDate::from_ymd_opt(1994, 3, 11).unwrap(),
            gender: "female".to_string(),
            locality: "Koramangala".to_string(),
            city: "Bangalore".to_string(),
            pin: 560034,
            state: "Karnataka".to_string(),
            mobile: 9876543210,
            email: "asha@example.com".to_string(),
            job_city: "Bangalore, Pune".to_string(),
            profile_image: None,
            resume_file: None,
        }
    }

    #[tokio::test]
    async fn test_resume_ids_are_sequential() {
        let repo = MemoryResumeRepository::default();
        let a = repo.create(sample_resume()).await.unwrap();
        let b = repo.create(sample_resume()).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_resume_get_missing_is_not_found() {
        let repo = MemoryResumeRepository::default();
        assert!(matches!(repo.get(42).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_lead_duplicate_email_is_storage_error() {
        let repo = MemoryLeadRepository::default();
        let lead = NewLead {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9000000000".to_string(),
        };
        repo.create(lead.clone()).await.unwrap();
        let err = repo.create(lead).await.unwrap_err();
        assert!(matches!(err, RepoError::Storage(_)));
        assert_eq!(repo.all().len(), 1);
    }
}
