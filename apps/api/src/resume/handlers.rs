use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::media::{PROFILE_IMAGE_DIR, RESUME_DOC_DIR};
use crate::models::resume::{ResumeRecord, GENDERS, JOB_CITIES, STATES};
use crate::repository::RepoError;
use crate::resume::validation::{validate, ResumeSubmission};
use crate::state::AppState;

/// Choice lists a client needs to render the empty submission form.
#[derive(Serialize)]
pub struct FormChoices {
    pub genders: &'static [&'static str],
    pub states: &'static [&'static str],
    pub job_cities: &'static [&'static str],
}

impl FormChoices {
    fn new() -> Self {
        Self {
            genders: GENDERS,
            states: STATES,
            job_cities: JOB_CITIES,
        }
    }
}

#[derive(Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<ResumeRecord>,
    pub form: FormChoices,
}

/// GET /api/candidates
/// Every record, unfiltered and unpaginated, plus the form choice lists.
pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let candidates = state.resumes.list().await?;
    Ok(Json(CandidateListResponse {
        candidates,
        form: FormChoices::new(),
    }))
}

/// GET /api/candidates/:id
pub async fn candidate_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResumeRecord>, AppError> {
    let candidate = state.resumes.get(id).await.map_err(|e| match e {
        RepoError::NotFound => AppError::NotFound(format!("Candidate {id} not found")),
        other => AppError::from(other),
    })?;
    Ok(Json(candidate))
}

/// POST /api/candidates
/// Validates the multipart submission, stores any uploads, persists the
/// record, and returns it.
pub async fn create_candidate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    let (submission, profile_image, resume_file) = read_submission(multipart).await?;

    let mut new = validate(&submission).map_err(|errors| {
        warn!("Candidate submission rejected: {} invalid field(s)", errors.0.len());
        AppError::InvalidForm(errors)
    })?;

    // Uploads are only written once the field validation has passed, so a
    // rejected submission leaves nothing on disk.
    let mut stored_paths: Vec<String> = Vec::new();
    if let Some(upload) = profile_image {
        let path = state
            .media
            .save(PROFILE_IMAGE_DIR, &upload.filename, &upload.data)
            .await?;
        stored_paths.push(path.clone());
        new.profile_image = Some(path);
    }
    if let Some(upload) = resume_file {
        let path = state
            .media
            .save(RESUME_DOC_DIR, &upload.filename, &upload.data)
            .await?;
        stored_paths.push(path.clone());
        new.resume_file = Some(path);
    }

    let record = match state.resumes.create(new).await {
        Ok(record) => record,
        Err(e) => {
            // A failed insert must not leave orphaned uploads behind.
            for stored in &stored_paths {
                state.media.remove(stored).await;
            }
            return Err(e.into());
        }
    };
    info!("Candidate created: id={} city={}", record.id, record.city);
    Ok((StatusCode::CREATED, Json(record)))
}

struct Upload {
    filename: String,
    data: Vec<u8>,
}

/// Drains the multipart stream into the raw submission. Unknown fields are
/// ignored; file parts without a filename count as "no upload", matching a
/// blank file input.
async fn read_submission(
    mut multipart: Multipart,
) -> Result<(ResumeSubmission, Option<Upload>, Option<Upload>), AppError> {
    let mut sub = ResumeSubmission::default();
    let mut profile_image = None;
    let mut resume_file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" => sub.name = read_text(field).await?,
            "dob" => sub.dob = read_text(field).await?,
            "gender" => sub.gender = read_text(field).await?,
            "locality" => sub.locality = read_text(field).await?,
            "city" => sub.city = read_text(field).await?,
            "pin" => sub.pin = read_text(field).await?,
            "state" => sub.state = read_text(field).await?,
            "mobile" => sub.mobile = read_text(field).await?,
            "email" => sub.email = read_text(field).await?,
            "job_city" => sub.job_city.push(read_text(field).await?),
            "profile_image" => profile_image = read_upload(field).await?,
            "resume_file" => resume_file = read_upload(field).await?,
            _ => {}
        }
    }

    Ok((sub, profile_image, resume_file))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Unreadable form field: {e}")))
}

async fn read_upload(
    field: axum::extract::multipart::Field<'_>,
) -> Result<Option<Upload>, AppError> {
    let filename = match field.file_name() {
        Some(f) if !f.is_empty() => f.to_string(),
        _ => return Ok(None),
    };
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Unreadable file upload: {e}")))?
        .to_vec();
    Ok(Some(Upload { filename, data }))
}
