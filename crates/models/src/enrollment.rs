use sea_orm::{
    entity::prelude::*, sea_query::OnConflict, ActiveValue::NotSet, ConnectionTrait, LoaderTrait, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::{course, db::sync_id_sequence, student};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "DROPPED")]
    Dropped,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollment")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_enrollment: i64,
    pub enrollment_date: Option<Date>,
    pub grade: Option<f64>,
    pub status: Option<Status>,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Course,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Student => Entity::belongs_to(student::Entity)
                .from(Column::StudentId)
                .to(student::Column::IdStudent)
                .into(),
            Relation::Course => Entity::belongs_to(course::Entity)
                .from(Column::CourseId)
                .to(course::Column::IdCourse)
                .into(),
        }
    }
}

impl Related<student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Nested student reference; only the id is read, other fields are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub id_student: i64,
}

/// Nested course reference; only the id is read, other fields are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub id_course: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentInput {
    pub id_enrollment: Option<i64>,
    pub enrollment_date: Option<Date>,
    pub grade: Option<f64>,
    pub status: Option<Status>,
    pub student: Option<StudentRef>,
    pub course: Option<CourseRef>,
}

impl EnrollmentInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_enrollment: self.id_enrollment.map_or(NotSet, Set),
            enrollment_date: Set(self.enrollment_date),
            grade: Set(self.grade),
            status: Set(self.status),
            student_id: Set(self.student.map(|s| s.id_student)),
            course_id: Set(self.course.map(|c| c.id_course)),
        }
    }

    pub fn into_model(self, id: i64) -> Model {
        Model {
            id_enrollment: id,
            enrollment_date: self.enrollment_date,
            grade: self.grade,
            status: self.status,
            student_id: self.student.map(|s| s.id_student),
            course_id: self.course.map(|c| c.id_course),
        }
    }
}

/// Wire shape of an enrollment: the row plus its resolved student and course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDetails {
    pub id_enrollment: i64,
    pub enrollment_date: Option<Date>,
    pub grade: Option<f64>,
    pub status: Option<Status>,
    pub student: Option<student::Model>,
    pub course: Option<course::Model>,
}

impl EnrollmentDetails {
    pub fn from_parts(row: Model, student: Option<student::Model>, course: Option<course::Model>) -> Self {
        Self {
            id_enrollment: row.id_enrollment,
            enrollment_date: row.enrollment_date,
            grade: row.grade,
            status: row.status,
            student,
            course,
        }
    }
}

pub async fn save<C>(db: &C, input: EnrollmentInput) -> Result<Model, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let has_id = input.id_enrollment.is_some();
    let am = input.into_active_model();
    if !has_id {
        return am.insert(db).await;
    }
    let txn = db.begin().await?;
    let row = Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::IdEnrollment)
                .update_columns([
                    Column::EnrollmentDate,
                    Column::Grade,
                    Column::Status,
                    Column::StudentId,
                    Column::CourseId,
                ])
                .to_owned(),
        )
        .exec_with_returning(&txn)
        .await?;
    sync_id_sequence(&txn, Entity.table_name(), Column::IdEnrollment.as_str()).await?;
    txn.commit().await?;
    Ok(row)
}

/// Resolve the student and course rows an enrollment points at.
pub async fn load_details<C: ConnectionTrait>(db: &C, row: Model) -> Result<EnrollmentDetails, DbErr> {
    let student = match row.student_id {
        Some(id) => student::Entity::find_by_id(id).one(db).await?,
        None => None,
    };
    let course = match row.course_id {
        Some(id) => course::Entity::find_by_id(id).one(db).await?,
        None => None,
    };
    Ok(EnrollmentDetails::from_parts(row, student, course))
}

/// All enrollments in id order, with students and courses loaded in two batched queries.
pub async fn list_details<C: ConnectionTrait>(db: &C) -> Result<Vec<EnrollmentDetails>, DbErr> {
    let rows = Entity::find().order_by_asc(Column::IdEnrollment).all(db).await?;
    let students = rows.load_one(student::Entity, db).await?;
    let courses = rows.load_one(course::Entity, db).await?;
    Ok(rows
        .into_iter()
        .zip(students)
        .zip(courses)
        .map(|((row, student), course)| EnrollmentDetails::from_parts(row, student, course))
        .collect())
}
