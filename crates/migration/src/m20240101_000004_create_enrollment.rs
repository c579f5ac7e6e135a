//! Create `enrollment` table.
//! Links one student to one course; the status column holds the enum's string value.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollment::IdEnrollment)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(date_null(Enrollment::EnrollmentDate))
                    .col(double_null(Enrollment::Grade))
                    .col(string_len_null(Enrollment::Status, 16))
                    .col(big_integer_null(Enrollment::StudentId))
                    .col(big_integer_null(Enrollment::CourseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student")
                            .from(Enrollment::Table, Enrollment::StudentId)
                            .to(Student::Table, Student::IdStudent)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course")
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(Course::Table, Course::IdCourse)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Enrollment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Enrollment {
    Table,
    IdEnrollment,
    EnrollmentDate,
    Grade,
    Status,
    StudentId,
    CourseId,
}

#[derive(DeriveIden)]
enum Student { Table, IdStudent }

#[derive(DeriveIden)]
enum Course { Table, IdCourse }
