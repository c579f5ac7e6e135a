use std::sync::Arc;

use async_trait::async_trait;
use models::student::{self, StudentInput};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<student::Model>, ServiceError>;
    async fn save(&self, input: StudentInput) -> Result<student::Model, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SeaOrmStudentRepository {
    pub db: Arc<DatabaseConnection>,
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError> {
        Ok(student::Entity::find()
            .order_by_asc(student::Column::IdStudent)
            .all(self.db.as_ref())
            .await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<student::Model>, ServiceError> {
        Ok(student::Entity::find_by_id(id).one(self.db.as_ref()).await?)
    }

    async fn save(&self, input: StudentInput) -> Result<student::Model, ServiceError> {
        Ok(student::save(self.db.as_ref(), input).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = student::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(res.rows_affected > 0)
    }
}

pub mod mock {
    use super::*;
    use crate::storage::{restrict_violation, MemoryTable};
    use models::enrollment;

    #[derive(Default)]
    pub struct MockStudentRepository {
        rows: MemoryTable<student::Model>,
        enrollments: Option<MemoryTable<enrollment::Model>>,
    }

    impl MockStudentRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(message: &str) -> Self {
            Self { rows: MemoryTable::failing(message), enrollments: None }
        }

        /// Shared handle on the backing rows, for linking an enrollment mock.
        pub fn table(&self) -> MemoryTable<student::Model> {
            self.rows.clone()
        }

        /// Refuse to delete a student that enrollments in `enrollments` still point at.
        pub fn referenced_by(mut self, enrollments: MemoryTable<enrollment::Model>) -> Self {
            self.enrollments = Some(enrollments);
            self
        }
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError> {
            self.rows.list().await
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<student::Model>, ServiceError> {
            self.rows.get(id).await
        }

        async fn save(&self, input: StudentInput) -> Result<student::Model, ServiceError> {
            let id = input.id_student;
            self.rows.upsert(id, |id| input.into_model(id)).await
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            if let Some(enrollments) = &self.enrollments {
                if enrollments.any(|e| e.student_id == Some(id)).await? {
                    return Err(restrict_violation("student", "fk_enrollment_student", "enrollment"));
                }
            }
            self.rows.remove(id).await
        }
    }
}
