use sea_orm::entity::prelude::*;

/// A dated star value plus note for one (row, player) pair. At most one
/// observation exists per (row, player, date_creation); resubmissions within
/// a day update in place, later days append.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characteristic_observation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub row_id: i32,
    pub player_id: i32,
    pub user_id: Option<i32>,
    pub club_id: Option<i32>,
    pub date_creation: Date,
    pub value: i32,
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::characteristic_row::Entity",
        from = "Column::RowId",
        to = "super::characteristic_row::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Row,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::characteristic_row::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Row.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
