use sea_orm::{entity::prelude::*, sea_query::OnConflict, ActiveValue::NotSet, ConnectionTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::db::sync_id_sequence;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "department")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_department: i64,
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for create and update; a missing id means "insert".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentInput {
    pub id_department: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

impl DepartmentInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_department: self.id_department.map_or(NotSet, Set),
            name: Set(self.name),
            location: Set(self.location),
            phone: Set(self.phone),
            head: Set(self.head),
        }
    }

    /// Materialise the row the store would hold after writing this input under `id`.
    pub fn into_model(self, id: i64) -> Model {
        Model { id_department: id, name: self.name, location: self.location, phone: self.phone, head: self.head }
    }
}

impl From<Model> for DepartmentInput {
    fn from(m: Model) -> Self {
        Self { id_department: Some(m.id_department), name: m.name, location: m.location, phone: m.phone, head: m.head }
    }
}

/// Insert without id, or upsert by id and move the id sequence past it.
pub async fn save<C>(db: &C, input: DepartmentInput) -> Result<Model, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let has_id = input.id_department.is_some();
    let am = input.into_active_model();
    if !has_id {
        return am.insert(db).await;
    }
    let txn = db.begin().await?;
    let row = Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::IdDepartment)
                .update_columns([Column::Name, Column::Location, Column::Phone, Column::Head])
                .to_owned(),
        )
        .exec_with_returning(&txn)
        .await?;
    sync_id_sequence(&txn, Entity.table_name(), Column::IdDepartment.as_str()).await?;
    txn.commit().await?;
    Ok(row)
}
