use std::sync::Arc;

use async_trait::async_trait;
use models::course::{self, CourseInput};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<course::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<course::Model>, ServiceError>;
    async fn save(&self, input: CourseInput) -> Result<course::Model, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SeaOrmCourseRepository {
    pub db: Arc<DatabaseConnection>,
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn find_all(&self) -> Result<Vec<course::Model>, ServiceError> {
        Ok(course::Entity::find()
            .order_by_asc(course::Column::IdCourse)
            .all(self.db.as_ref())
            .await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<course::Model>, ServiceError> {
        Ok(course::Entity::find_by_id(id).one(self.db.as_ref()).await?)
    }

    async fn save(&self, input: CourseInput) -> Result<course::Model, ServiceError> {
        Ok(course::save(self.db.as_ref(), input).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = course::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(res.rows_affected > 0)
    }
}

pub mod mock {
    use super::*;
    use crate::storage::{restrict_violation, MemoryTable};
    use models::enrollment;

    #[derive(Default)]
    pub struct MockCourseRepository {
        rows: MemoryTable<course::Model>,
        enrollments: Option<MemoryTable<enrollment::Model>>,
    }

    impl MockCourseRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(message: &str) -> Self {
            Self { rows: MemoryTable::failing(message), enrollments: None }
        }

        pub fn table(&self) -> MemoryTable<course::Model> {
            self.rows.clone()
        }

        /// Refuse to delete a course that enrollments in `enrollments` still point at.
        pub fn referenced_by(mut self, enrollments: MemoryTable<enrollment::Model>) -> Self {
            self.enrollments = Some(enrollments);
            self
        }
    }

    #[async_trait]
    impl CourseRepository for MockCourseRepository {
        async fn find_all(&self) -> Result<Vec<course::Model>, ServiceError> {
            self.rows.list().await
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<course::Model>, ServiceError> {
            self.rows.get(id).await
        }

        async fn save(&self, input: CourseInput) -> Result<course::Model, ServiceError> {
            let id = input.id_course;
            self.rows.upsert(id, |id| input.into_model(id)).await
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            if let Some(enrollments) = &self.enrollments {
                if enrollments.any(|e| e.course_id == Some(id)).await? {
                    return Err(restrict_violation("course", "fk_enrollment_course", "enrollment"));
                }
            }
            self.rows.remove(id).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn seaorm_find_all_keeps_row_order() -> Result<(), anyhow::Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                course::Model { id_course: 1, name: Some("Algèbre".into()) },
                course::Model { id_course: 2, name: Some("Analyse".into()) },
            ]])
            .into_connection();
        let repo = SeaOrmCourseRepository { db: Arc::new(db) };
        let names: Vec<_> = repo.find_all().await?.into_iter().filter_map(|c| c.name).collect();
        assert_eq!(names, ["Algèbre", "Analyse"]);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_save_without_id_inserts() -> Result<(), anyhow::Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![course::Model { id_course: 7, name: Some("Mécanique".into()) }]])
            .into_connection();
        let repo = SeaOrmCourseRepository { db: Arc::new(db) };
        let saved = repo.save(CourseInput { id_course: None, name: Some("Mécanique".into()) }).await?;
        assert_eq!(saved.id_course, 7);
        Ok(())
    }
}
