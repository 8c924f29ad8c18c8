//! Expense database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Expense;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    /// `YYYY-MM-DD`; lexical order is chronological order
    pub date: String,
    pub category: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Expense {
            id: model.id,
            description: model.description,
            amount: model.amount,
            date: model.date,
            category: model.category,
        }
    }
}
