use sea_orm::{entity::prelude::*, sea_query::OnConflict, ActiveValue::NotSet, ConnectionTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::db::sync_id_sequence;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_student: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub id_student: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address: Option<String>,
}

impl StudentInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_student: self.id_student.map_or(NotSet, Set),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            phone: Set(self.phone),
            date_of_birth: Set(self.date_of_birth),
            address: Set(self.address),
        }
    }

    pub fn into_model(self, id: i64) -> Model {
        Model {
            id_student: id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            address: self.address,
        }
    }
}

impl From<Model> for StudentInput {
    fn from(m: Model) -> Self {
        Self {
            id_student: Some(m.id_student),
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            date_of_birth: m.date_of_birth,
            address: m.address,
        }
    }
}

pub async fn save<C>(db: &C, input: StudentInput) -> Result<Model, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let has_id = input.id_student.is_some();
    let am = input.into_active_model();
    if !has_id {
        return am.insert(db).await;
    }
    let txn = db.begin().await?;
    let row = Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::IdStudent)
                .update_columns([
                    Column::FirstName,
                    Column::LastName,
                    Column::Email,
                    Column::Phone,
                    Column::DateOfBirth,
                    Column::Address,
                ])
                .to_owned(),
        )
        .exec_with_returning(&txn)
        .await?;
    sync_id_sequence(&txn, Entity.table_name(), Column::IdStudent.as_str()).await?;
    txn.commit().await?;
    Ok(row)
}
