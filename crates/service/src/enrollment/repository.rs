use std::sync::Arc;

use async_trait::async_trait;
use models::enrollment::{self, EnrollmentDetails, EnrollmentInput};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::ServiceError;

/// Persistence capability for enrollments. Reads come back with the
/// referenced student and course resolved.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<EnrollmentDetails>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<EnrollmentDetails>, ServiceError>;
    async fn save(&self, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SeaOrmEnrollmentRepository {
    pub db: Arc<DatabaseConnection>,
}

#[async_trait]
impl EnrollmentRepository for SeaOrmEnrollmentRepository {
    async fn find_all(&self) -> Result<Vec<EnrollmentDetails>, ServiceError> {
        Ok(enrollment::list_details(self.db.as_ref()).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<EnrollmentDetails>, ServiceError> {
        let Some(row) = enrollment::Entity::find_by_id(id).one(self.db.as_ref()).await? else {
            return Ok(None);
        };
        Ok(Some(enrollment::load_details(self.db.as_ref(), row).await?))
    }

    async fn save(&self, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError> {
        let row = enrollment::save(self.db.as_ref(), input).await?;
        Ok(enrollment::load_details(self.db.as_ref(), row).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = enrollment::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(res.rows_affected > 0)
    }
}

/// In-memory enrollments. Student and course references are resolved
/// against tables shared with the student and course mocks, and a save that
/// points at a missing row fails the way a foreign key would. Pair with
/// `referenced_by` on those mocks to reject deletes of referenced rows.
pub mod mock {
    use super::*;
    use crate::storage::{fk_violation, MemoryTable};
    use models::{course, student};

    #[derive(Default)]
    pub struct MockEnrollmentRepository {
        rows: MemoryTable<enrollment::Model>,
        students: MemoryTable<student::Model>,
        courses: MemoryTable<course::Model>,
    }

    impl MockEnrollmentRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn linked(students: MemoryTable<student::Model>, courses: MemoryTable<course::Model>) -> Self {
            Self { rows: MemoryTable::new(), students, courses }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                rows: MemoryTable::failing(message),
                students: MemoryTable::failing(message),
                courses: MemoryTable::failing(message),
            }
        }

        pub fn table(&self) -> MemoryTable<enrollment::Model> {
            self.rows.clone()
        }

        async fn details(&self, row: enrollment::Model) -> Result<EnrollmentDetails, ServiceError> {
            let student = match row.student_id {
                Some(id) => self.students.get(id).await?,
                None => None,
            };
            let course = match row.course_id {
                Some(id) => self.courses.get(id).await?,
                None => None,
            };
            Ok(EnrollmentDetails::from_parts(row, student, course))
        }

        async fn check_refs(&self, input: &EnrollmentInput) -> Result<(), ServiceError> {
            if let Some(s) = input.student {
                if self.students.get(s.id_student).await?.is_none() {
                    return Err(fk_violation("enrollment", "fk_enrollment_student"));
                }
            }
            if let Some(c) = input.course {
                if self.courses.get(c.id_course).await?.is_none() {
                    return Err(fk_violation("enrollment", "fk_enrollment_course"));
                }
            }
            Ok(())
        }
    }

    #[async_trait]
    impl EnrollmentRepository for MockEnrollmentRepository {
        async fn find_all(&self) -> Result<Vec<EnrollmentDetails>, ServiceError> {
            let rows = self.rows.list().await?;
            let mut out = Vec::with_capacity(rows.len());
            for row in rows {
                out.push(self.details(row).await?);
            }
            Ok(out)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<EnrollmentDetails>, ServiceError> {
            match self.rows.get(id).await? {
                Some(row) => Ok(Some(self.details(row).await?)),
                None => Ok(None),
            }
        }

        async fn save(&self, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError> {
            self.check_refs(&input).await?;
            let id = input.id_enrollment;
            let row = self.rows.upsert(id, |id| input.into_model(id)).await?;
            self.details(row).await
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            self.rows.remove(id).await
        }
    }
}
