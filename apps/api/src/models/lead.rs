use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted lead captured by the webhook. `email` carries a UNIQUE
/// constraint at the schema level; nothing pre-checks it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeadRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Lead fields accepted from the webhook payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
}
