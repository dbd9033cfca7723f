use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Accepted values for the `gender` field.
pub const GENDERS: &[&str] = &["male", "female", "other"];

/// Fixed list of Indian states and union territories offered by the form.
pub const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Cities a candidate may pick as preferred job locations (multi-select).
pub const JOB_CITIES: &[&str] = &[
    "Delhi",
    "Mumbai",
    "Pune",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
];

/// A persisted candidate profile.
///
/// `job_city` holds the `", "`-joined serialization of the selected job
/// cities; membership in [`JOB_CITIES`] is enforced by the form validator,
/// not by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecord {
    pub id: i64,
    pub name: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub locality: String,
    pub city: String,
    pub pin: i32,
    pub state: String,
    pub mobile: i64,
    pub email: String,
    pub job_city: String,
    /// Relative media path of the uploaded profile image, if any.
    pub profile_image: Option<String>,
    /// Relative media path of the uploaded resume document, if any.
    pub resume_file: Option<String>,
}

/// A validated candidate profile ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResume {
    pub name: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub locality: String,
    pub city: String,
    pub pin: i32,
    pub state: String,
    pub mobile: i64,
    pub email: String,
    pub job_city: String,
    pub profile_image: Option<String>,
    pub resume_file: Option<String>,
}
