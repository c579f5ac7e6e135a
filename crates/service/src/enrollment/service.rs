use std::sync::Arc;

use models::enrollment::{EnrollmentDetails, EnrollmentInput};
use tracing::{debug, error, info};

use crate::enrollment::repository::EnrollmentRepository;
use crate::errors::ServiceError;

pub struct EnrollmentService {
    repo: Arc<dyn EnrollmentRepository>,
}

impl EnrollmentService {
    pub fn new(repo: Arc<dyn EnrollmentRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<EnrollmentDetails>, ServiceError> {
        info!("fetching all enrollments");
        let list = self
            .repo
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "error fetching enrollments"))?;
        debug!(count = list.len(), "found enrollments");
        Ok(list)
    }

    /// Missing ids are `ServiceError::NotFound`.
    pub async fn get(&self, id: i64) -> Result<EnrollmentDetails, ServiceError> {
        info!(id, "fetching enrollment by id");
        let found = self
            .repo
            .find_by_id(id)
            .await
            .and_then(|e| e.ok_or_else(|| ServiceError::not_found("enrollment", id)))
            .inspect_err(|e| error!(id, error = %e, "error fetching enrollment"))?;
        debug!(enrollment = ?found, "found enrollment");
        Ok(found)
    }

    pub async fn save(&self, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError> {
        info!(
            id = ?input.id_enrollment,
            student = ?input.student.map(|s| s.id_student),
            course = ?input.course.map(|c| c.id_course),
            "saving enrollment"
        );
        let saved = self
            .repo
            .save(input)
            .await
            .inspect_err(|e| error!(error = %e, "error saving enrollment"))?;
        debug!(id = saved.id_enrollment, "saved enrollment");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        info!(id, "deleting enrollment");
        let removed = self
            .repo
            .delete_by_id(id)
            .await
            .inspect_err(|e| error!(id, error = %e, "error deleting enrollment"))?;
        debug!(id, removed, "deleted enrollment");
        Ok(())
    }
}
