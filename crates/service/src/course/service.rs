use std::sync::Arc;

use models::course::{self, CourseInput};
use tracing::{debug, error, info};

use crate::course::repository::CourseRepository;
use crate::errors::ServiceError;

pub struct CourseService {
    repo: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<course::Model>, ServiceError> {
        info!("fetching all courses");
        let list = self
            .repo
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "error fetching courses"))?;
        debug!(count = list.len(), "found courses");
        Ok(list)
    }

    pub async fn get(&self, id: i64) -> Result<course::Model, ServiceError> {
        info!(id, "fetching course by id");
        self.repo
            .find_by_id(id)
            .await
            .and_then(|c| c.ok_or_else(|| ServiceError::not_found("course", id)))
            .inspect_err(|e| error!(id, error = %e, "error fetching course"))
    }

    pub async fn save(&self, input: CourseInput) -> Result<course::Model, ServiceError> {
        info!(course = ?input, "saving course");
        let saved = self
            .repo
            .save(input)
            .await
            .inspect_err(|e| error!(error = %e, "error saving course"))?;
        debug!(id = saved.id_course, "saved course");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        info!(id, "deleting course");
        let removed = self
            .repo
            .delete_by_id(id)
            .await
            .inspect_err(|e| error!(id, error = %e, "error deleting course"))?;
        debug!(id, removed, "deleted course");
        Ok(())
    }
}
