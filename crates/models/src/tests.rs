use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityName};
use serde_json::json;

use crate::{course, department, enrollment, student};

fn physics() -> department::Model {
    department::Model {
        id_department: 1,
        name: Some("Physics".into()),
        location: Some("Building C".into()),
        phone: Some("555-123-4567".into()),
        head: Some("Dr. Einstein".into()),
    }
}

#[test]
fn department_uses_camel_case_wire_names() {
    let body = serde_json::to_value(physics()).unwrap();
    assert_eq!(
        body,
        json!({
            "idDepartment": 1,
            "name": "Physics",
            "location": "Building C",
            "phone": "555-123-4567",
            "head": "Dr. Einstein"
        })
    );
}

#[test]
fn department_json_round_trip() {
    let original = physics();
    let text = serde_json::to_string(&original).unwrap();
    let back: department::Model = serde_json::from_str(&text).unwrap();
    assert_eq!(back, original);
}

#[test]
fn minimal_department_input_leaves_missing_fields_empty() {
    let input: department::DepartmentInput =
        serde_json::from_str(r#"{"name":"Test Dept","location":"Test Building"}"#).unwrap();
    assert_eq!(input.id_department, None);
    assert_eq!(input.name.as_deref(), Some("Test Dept"));
    assert_eq!(input.phone, None);
    assert_eq!(input.head, None);
}

#[test]
fn input_without_id_leaves_primary_key_unset() {
    let am = department::DepartmentInput { name: Some("Math".into()), ..Default::default() }.into_active_model();
    assert!(matches!(am.id_department, ActiveValue::NotSet));
    assert!(matches!(am.name, ActiveValue::Set(Some(ref n)) if n == "Math"));
}

#[test]
fn input_with_id_sets_primary_key() {
    let am = student::StudentInput { id_student: Some(7), ..Default::default() }.into_active_model();
    assert!(matches!(am.id_student, ActiveValue::Set(7)));
}

#[test]
fn student_date_of_birth_is_iso_date() {
    let s = student::Model {
        id_student: 1,
        first_name: Some("John".into()),
        last_name: Some("Doe".into()),
        email: Some("john.doe@example.com".into()),
        phone: Some("1234567890".into()),
        date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1),
        address: Some("123 Main St".into()),
    };
    let body = serde_json::to_value(&s).unwrap();
    assert_eq!(body["idStudent"], 1);
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["dateOfBirth"], "2000-01-01");

    let back: student::Model = serde_json::from_value(body).unwrap();
    assert_eq!(back, s);
}

#[test]
fn student_input_converts_back_from_model() {
    let m = student::StudentInput { first_name: Some("Ada".into()), ..Default::default() }.into_model(3);
    let input = student::StudentInput::from(m.clone());
    assert_eq!(input.id_student, Some(3));
    assert_eq!(input.into_model(3), m);
}

#[test]
fn enrollment_input_reads_nested_ids_and_ignores_other_fields() {
    let input: enrollment::EnrollmentInput = serde_json::from_value(json!({
        "enrollmentDate": "2024-01-15",
        "grade": 85.5,
        "status": "ACTIVE",
        "student": {"idStudent": 1, "firstName": "John", "lastName": "Doe"},
        "course": {"idCourse": 1, "name": "Mathematics"}
    }))
    .unwrap();
    assert_eq!(input.enrollment_date, NaiveDate::from_ymd_opt(2024, 1, 15));
    assert_eq!(input.grade, Some(85.5));
    assert_eq!(input.status, Some(enrollment::Status::Active));
    assert_eq!(input.student, Some(enrollment::StudentRef { id_student: 1 }));
    assert_eq!(input.course, Some(enrollment::CourseRef { id_course: 1 }));

    let row = input.into_model(10);
    assert_eq!(row.student_id, Some(1));
    assert_eq!(row.course_id, Some(1));
}

#[test]
fn unknown_status_is_rejected() {
    let res = serde_json::from_value::<enrollment::EnrollmentInput>(json!({"status": "PAUSED"}));
    assert!(res.is_err());
}

#[test]
fn enrollment_details_nest_student_and_course() {
    let details = enrollment::EnrollmentDetails {
        id_enrollment: 1,
        enrollment_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        grade: Some(85.5),
        status: Some(enrollment::Status::Active),
        student: Some(student::StudentInput { first_name: Some("John".into()), ..Default::default() }.into_model(1)),
        course: Some(course::CourseInput { name: Some("Mathematics".into()), ..Default::default() }.into_model(1)),
    };
    let body = serde_json::to_value(&details).unwrap();
    assert_eq!(body["status"], "ACTIVE");
    assert_eq!(body["enrollmentDate"], "2024-01-15");
    assert_eq!(body["student"]["idStudent"], 1);
    assert_eq!(body["course"]["idCourse"], 1);
    assert_eq!(body["course"]["name"], "Mathematics");

    let back: enrollment::EnrollmentDetails = serde_json::from_value(body).unwrap();
    assert_eq!(back, details);
}

#[test]
fn table_names_match_migrations() {
    assert_eq!(department::Entity.table_name(), "department");
    assert_eq!(student::Entity.table_name(), "student");
    assert_eq!(course::Entity.table_name(), "course");
    assert_eq!(enrollment::Entity.table_name(), "enrollment");
}
