use std::sync::Arc;

use models::student::{self, StudentInput};
use tracing::{debug, error, info, warn};

use crate::errors::ServiceError;
use crate::student::repository::StudentRepository;

/// Student use cases. Unlike the other entities, a missing student is not
/// an error: `get` yields `None` and the HTTP layer answers with an empty body.
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<student::Model>, ServiceError> {
        info!("fetching all students");
        let list = self
            .repo
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "error fetching students"))?;
        debug!(count = list.len(), "found students");
        Ok(list)
    }

    pub async fn get(&self, id: i64) -> Result<Option<student::Model>, ServiceError> {
        info!(id, "fetching student by id");
        let found = self
            .repo
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(id, error = %e, "error fetching student"))?;
        match &found {
            Some(s) => debug!(student = ?s, "found student"),
            None => warn!(id, "student not found"),
        }
        Ok(found)
    }

    pub async fn save(&self, input: StudentInput) -> Result<student::Model, ServiceError> {
        info!(student = ?input, "saving student");
        let saved = self
            .repo
            .save(input)
            .await
            .inspect_err(|e| error!(error = %e, "error saving student"))?;
        debug!(id = saved.id_student, "saved student");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        info!(id, "deleting student");
        let removed = self
            .repo
            .delete_by_id(id)
            .await
            .inspect_err(|e| error!(id, error = %e, "error deleting student"))?;
        debug!(id, removed, "deleted student");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::repository::mock::MockStudentRepository;
    use chrono::NaiveDate;

    fn svc() -> StudentService {
        StudentService::new(Arc::new(MockStudentRepository::new()))
    }

    fn alice() -> StudentInput {
        StudentInput {
            first_name: Some("Alice".into()),
            last_name: Some("Martin".into()),
            email: Some("alice@example.com".into()),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 3, 14),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn get_missing_is_none_not_error() -> Result<(), anyhow::Error> {
        assert!(svc().get(999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn save_then_get_round_trips_fields() -> Result<(), anyhow::Error> {
        let svc = svc();
        let saved = svc.save(alice()).await?;
        assert_eq!(saved.id_student, 1);

        let found = svc.get(saved.id_student).await?;
        assert_eq!(found, Some(saved));
        Ok(())
    }

    #[tokio::test]
    async fn save_with_id_replaces_every_field() -> Result<(), anyhow::Error> {
        let svc = svc();
        let saved = svc.save(alice()).await?;

        // fields absent from the update become null
        let update = StudentInput {
            id_student: Some(saved.id_student),
            first_name: Some("Alicia".into()),
            ..Default::default()
        };
        let updated = svc.save(update).await?;
        assert_eq!(updated.id_student, saved.id_student);
        assert_eq!(updated.first_name.as_deref(), Some("Alicia"));
        assert_eq!(updated.email, None);
        assert_eq!(svc.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_and_tolerates_unknown_ids() -> Result<(), anyhow::Error> {
        let svc = svc();
        let saved = svc.save(alice()).await?;
        svc.delete(saved.id_student).await?;
        assert!(svc.get(saved.id_student).await?.is_none());
        svc.delete(saved.id_student).await?;
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn store_errors_pass_through() {
        let svc = StudentService::new(Arc::new(MockStudentRepository::failing("Erreur de connexion")));
        let err = svc.get(1).await.unwrap_err();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("Erreur de connexion"));
        assert!(svc.list().await.is_err());
        assert!(svc.save(alice()).await.is_err());
        assert!(svc.delete(1).await.is_err());
    }
}
