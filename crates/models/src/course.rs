use sea_orm::{entity::prelude::*, sea_query::OnConflict, ActiveValue::NotSet, ConnectionTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::db::sync_id_sequence;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_course: i64,
    pub name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub id_course: Option<i64>,
    pub name: Option<String>,
}

impl CourseInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel { id_course: self.id_course.map_or(NotSet, Set), name: Set(self.name) }
    }

    pub fn into_model(self, id: i64) -> Model {
        Model { id_course: id, name: self.name }
    }
}

pub async fn save<C>(db: &C, input: CourseInput) -> Result<Model, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let has_id = input.id_course.is_some();
    let am = input.into_active_model();
    if !has_id {
        return am.insert(db).await;
    }
    let txn = db.begin().await?;
    let row = Entity::insert(am)
        .on_conflict(OnConflict::column(Column::IdCourse).update_column(Column::Name).to_owned())
        .exec_with_returning(&txn)
        .await?;
    sync_id_sequence(&txn, Entity.table_name(), Column::IdCourse.as_str()).await?;
    txn.commit().await?;
    Ok(row)
}
