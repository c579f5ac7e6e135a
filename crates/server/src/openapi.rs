use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDoc {
    pub id_department: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDoc {
    pub id_student: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "2001-03-14")]
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDoc {
    pub id_course: Option<i64>,
    pub name: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusDoc {
    Active,
    Completed,
    Dropped,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDoc {
    pub id_enrollment: Option<i64>,
    #[schema(example = "2024-01-15")]
    pub enrollment_date: Option<String>,
    pub grade: Option<f64>,
    pub status: Option<StatusDoc>,
    pub student: Option<StudentDoc>,
    pub course: Option<CourseDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::department::list,
        crate::routes::department::get_one,
        crate::routes::department::create,
        crate::routes::department::update,
        crate::routes::department::remove,
        crate::routes::student::list,
        crate::routes::student::get_one,
        crate::routes::student::create,
        crate::routes::student::update,
        crate::routes::student::remove,
        crate::routes::course::list,
        crate::routes::course::get_one,
        crate::routes::course::create,
        crate::routes::course::update,
        crate::routes::course::remove,
        crate::routes::enrollment::list,
        crate::routes::enrollment::get_one,
        crate::routes::enrollment::create,
        crate::routes::enrollment::update,
        crate::routes::enrollment::remove,
    ),
    components(
        schemas(
            HealthResponse,
            DepartmentDoc,
            StudentDoc,
            CourseDoc,
            StatusDoc,
            EnrollmentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "department"),
        (name = "student"),
        (name = "course"),
        (name = "enrollment")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_entity_surface() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/Department/getAllDepartment",
            "/Department/getDepartment/{id}",
            "/students/getStudent/{id}",
            "/Course/deleteCourse/{id}",
            "/Enrollment/updateEnrollment",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
