use std::sync::Arc;

use async_trait::async_trait;
use models::department::{self, DepartmentInput};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;

/// Persistence capability for departments.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<department::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<department::Model>, ServiceError>;
    async fn save(&self, input: DepartmentInput) -> Result<department::Model, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmDepartmentRepository {
    pub db: Arc<DatabaseConnection>,
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<department::Model>, ServiceError> {
        let rows = department::Entity::find()
            .order_by_asc(department::Column::IdDepartment)
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<department::Model>, ServiceError> {
        Ok(department::Entity::find_by_id(id).one(self.db.as_ref()).await?)
    }

    async fn save(&self, input: DepartmentInput) -> Result<department::Model, ServiceError> {
        Ok(department::save(self.db.as_ref(), input).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = department::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::storage::MemoryTable;

    #[derive(Default)]
    pub struct MockDepartmentRepository {
        rows: MemoryTable<department::Model>,
    }

    impl MockDepartmentRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every call fails with `DbErr::Custom(message)`.
        pub fn failing(message: &str) -> Self {
            Self { rows: MemoryTable::failing(message) }
        }
    }

    #[async_trait]
    impl DepartmentRepository for MockDepartmentRepository {
        async fn find_all(&self) -> Result<Vec<department::Model>, ServiceError> {
            self.rows.list().await
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<department::Model>, ServiceError> {
            self.rows.get(id).await
        }

        async fn save(&self, input: DepartmentInput) -> Result<department::Model, ServiceError> {
            let id = input.id_department;
            self.rows.upsert(id, |id| input.into_model(id)).await
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            self.rows.remove(id).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn dept(id: i64, name: &str, location: &str) -> department::Model {
        department::Model {
            id_department: id,
            name: Some(name.into()),
            location: Some(location.into()),
            phone: None,
            head: None,
        }
    }

    #[tokio::test]
    async fn seaorm_find_all_returns_rows() -> Result<(), anyhow::Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![dept(1, "Informatique", "Bâtiment A"), dept(2, "Mathématiques", "Bâtiment B")]])
            .into_connection();
        let repo = SeaOrmDepartmentRepository { db: Arc::new(db) };

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name.as_deref(), Some("Informatique"));
        assert_eq!(all[1].id_department, 2);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_find_by_id_missing_is_none() -> Result<(), anyhow::Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<department::Model>::new()])
            .into_connection();
        let repo = SeaOrmDepartmentRepository { db: Arc::new(db) };
        assert!(repo.find_by_id(999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_save_returns_row_with_assigned_id() -> Result<(), anyhow::Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![dept(1, "Physique", "Bâtiment C")]])
            .into_connection();
        let repo = SeaOrmDepartmentRepository { db: Arc::new(db) };

        let input = DepartmentInput {
            name: Some("Physique".into()),
            location: Some("Bâtiment C".into()),
            ..Default::default()
        };
        let saved = repo.save(input).await?;
        assert_eq!(saved.id_department, 1);
        assert_eq!(saved.location.as_deref(), Some("Bâtiment C"));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_delete_reports_rows_affected() -> Result<(), anyhow::Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult { last_insert_id: 0, rows_affected: 1 },
                MockExecResult { last_insert_id: 0, rows_affected: 0 },
            ])
            .into_connection();
        let repo = SeaOrmDepartmentRepository { db: Arc::new(db) };
        assert!(repo.delete_by_id(1).await?);
        assert!(!repo.delete_by_id(1).await?);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_store_error_passes_through() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("Erreur de connexion".into())])
            .into_connection();
        let repo = SeaOrmDepartmentRepository { db: Arc::new(db) };
        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        assert!(err.to_string().contains("Erreur de connexion"));
    }
}
