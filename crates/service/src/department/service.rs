use std::sync::Arc;

use models::department::{self, DepartmentInput};
use tracing::{debug, error, info};

use crate::department::repository::DepartmentRepository;
use crate::errors::ServiceError;

/// Department use cases: list, lookup (absence is an error), upsert, delete.
pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<department::Model>, ServiceError> {
        info!("fetching all departments");
        let list = self
            .repo
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "error fetching departments"))?;
        debug!(count = list.len(), "found departments");
        Ok(list)
    }

    /// Look up a department; a missing id is `ServiceError::NotFound`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::department::{repository::mock::MockDepartmentRepository, service::DepartmentService};
    /// use models::department::DepartmentInput;
    ///
    /// let svc = DepartmentService::new(Arc::new(MockDepartmentRepository::new()));
    /// let input = DepartmentInput { name: Some("Physics".into()), ..Default::default() };
    /// let saved = tokio_test::block_on(svc.save(input)).unwrap();
    /// let found = tokio_test::block_on(svc.get(saved.id_department)).unwrap();
    /// assert_eq!(found.name.as_deref(), Some("Physics"));
    /// assert!(tokio_test::block_on(svc.get(999)).unwrap_err().is_not_found());
    /// ```
    pub async fn get(&self, id: i64) -> Result<department::Model, ServiceError> {
        info!(id, "fetching department by id");
        let found = self
            .repo
            .find_by_id(id)
            .await
            .and_then(|d| d.ok_or_else(|| ServiceError::not_found("department", id)))
            .inspect_err(|e| error!(id, error = %e, "error fetching department"))?;
        debug!(department = ?found, "found department");
        Ok(found)
    }

    pub async fn save(&self, input: DepartmentInput) -> Result<department::Model, ServiceError> {
        info!(department = ?input, "saving department");
        let saved = self
            .repo
            .save(input)
            .await
            .inspect_err(|e| error!(error = %e, "error saving department"))?;
        debug!(id = saved.id_department, "saved department");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        info!(id, "deleting department");
        let removed = self
            .repo
            .delete_by_id(id)
            .await
            .inspect_err(|e| error!(id, error = %e, "error deleting department"))?;
        debug!(id, removed, "deleted department");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::department::repository::mock::MockDepartmentRepository;
    use sea_orm::DbErr;

    fn svc() -> DepartmentService {
        DepartmentService::new(Arc::new(MockDepartmentRepository::new()))
    }

    fn failing(msg: &str) -> DepartmentService {
        DepartmentService::new(Arc::new(MockDepartmentRepository::failing(msg)))
    }

    fn physics() -> DepartmentInput {
        DepartmentInput {
            id_department: None,
            name: Some("Physique".into()),
            location: Some("Bâtiment C".into()),
            phone: Some("0123456789".into()),
            head: Some("Dr. Dupont".into()),
        }
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() -> Result<(), anyhow::Error> {
        assert!(svc().list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_every_saved_department() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.save(DepartmentInput { name: Some("Informatique".into()), ..Default::default() }).await?;
        svc.save(DepartmentInput { name: Some("Mathématiques".into()), ..Default::default() }).await?;

        let all = svc.list().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id_department, 1);
        assert_eq!(all[0].name.as_deref(), Some("Informatique"));
        assert_eq!(all[1].id_department, 2);
        assert_eq!(all[1].name.as_deref(), Some("Mathématiques"));
        Ok(())
    }

    #[tokio::test]
    async fn save_without_id_assigns_one() -> Result<(), anyhow::Error> {
        let saved = svc().save(physics()).await?;
        assert_eq!(saved.id_department, 1);
        assert_eq!(saved.name.as_deref(), Some("Physique"));
        assert_eq!(saved.head.as_deref(), Some("Dr. Dupont"));
        Ok(())
    }

    #[tokio::test]
    async fn save_with_id_keeps_it_and_overwrites() -> Result<(), anyhow::Error> {
        let svc = svc();
        let created = svc.save(physics()).await?;

        let mut update = DepartmentInput::from(created.clone());
        update.name = Some("Physique Quantique".into());
        let updated = svc.save(update).await?;
        assert_eq!(updated.id_department, created.id_department);
        assert_eq!(updated.name.as_deref(), Some("Physique Quantique"));
        assert_eq!(svc.list().await?.len(), 1);

        let explicit = svc.save(DepartmentInput { id_department: Some(42), ..physics() }).await?;
        assert_eq!(explicit.id_department, 42);
        Ok(())
    }

    #[tokio::test]
    async fn get_existing_returns_saved_fields() -> Result<(), anyhow::Error> {
        let svc = svc();
        let created = svc.save(physics()).await?;
        let found = svc.get(created.id_department).await?;
        assert_eq!(found, created);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = svc().get(999).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> Result<(), anyhow::Error> {
        let svc = svc();
        let created = svc.save(physics()).await?;
        svc.delete(created.id_department).await?;
        assert!(svc.get(created.id_department).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_id_is_a_no_op() -> Result<(), anyhow::Error> {
        svc().delete(999).await?;
        Ok(())
    }

    #[tokio::test]
    async fn store_errors_pass_through_unchanged() {
        let svc = failing("Erreur de suppression");
        let is_original = |e: ServiceError| matches!(e, ServiceError::Db(DbErr::Custom(ref m)) if m == "Erreur de suppression");

        assert!(is_original(svc.list().await.unwrap_err()));
        assert!(is_original(svc.get(1).await.unwrap_err()));
        assert!(is_original(svc.save(physics()).await.unwrap_err()));
        assert!(is_original(svc.delete(999).await.unwrap_err()));
    }
}
