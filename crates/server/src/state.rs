use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::course::{repository::mock::MockCourseRepository, CourseService, SeaOrmCourseRepository};
use service::department::{
    repository::mock::MockDepartmentRepository, DepartmentService, SeaOrmDepartmentRepository,
};
use service::enrollment::{
    repository::mock::MockEnrollmentRepository, EnrollmentService, SeaOrmEnrollmentRepository,
};
use service::student::{repository::mock::MockStudentRepository, SeaOrmStudentRepository, StudentService};

/// Shared handler state; one service per entity.
#[derive(Clone)]
pub struct ServerState {
    pub departments: Arc<DepartmentService>,
    pub students: Arc<StudentService>,
    pub courses: Arc<CourseService>,
    pub enrollments: Arc<EnrollmentService>,
}

impl ServerState {
    /// Services backed by SeaORM over one pooled connection.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        Self {
            departments: Arc::new(DepartmentService::new(Arc::new(SeaOrmDepartmentRepository { db: Arc::clone(&db) }))),
            students: Arc::new(StudentService::new(Arc::new(SeaOrmStudentRepository { db: Arc::clone(&db) }))),
            courses: Arc::new(CourseService::new(Arc::new(SeaOrmCourseRepository { db: Arc::clone(&db) }))),
            enrollments: Arc::new(EnrollmentService::new(Arc::new(SeaOrmEnrollmentRepository { db }))),
        }
    }

    /// Services backed by in-memory tables. Enrollments resolve against the
    /// same student and course rows the other services write, and those rows
    /// cannot be deleted while an enrollment points at them.
    pub fn in_memory() -> Self {
        let students = MockStudentRepository::new();
        let courses = MockCourseRepository::new();
        let enrollments = MockEnrollmentRepository::linked(students.table(), courses.table());
        let students = students.referenced_by(enrollments.table());
        let courses = courses.referenced_by(enrollments.table());
        Self {
            departments: Arc::new(DepartmentService::new(Arc::new(MockDepartmentRepository::new()))),
            students: Arc::new(StudentService::new(Arc::new(students))),
            courses: Arc::new(CourseService::new(Arc::new(courses))),
            enrollments: Arc::new(EnrollmentService::new(Arc::new(enrollments))),
        }
    }

    /// Every store call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            departments: Arc::new(DepartmentService::new(Arc::new(MockDepartmentRepository::failing(message)))),
            students: Arc::new(StudentService::new(Arc::new(MockStudentRepository::failing(message)))),
            courses: Arc::new(CourseService::new(Arc::new(MockCourseRepository::failing(message)))),
            enrollments: Arc::new(EnrollmentService::new(Arc::new(MockEnrollmentRepository::failing(message)))),
        }
    }
}
