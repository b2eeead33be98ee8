use sea_orm::entity::prelude::*;

/// Lookup table: contract status of a player within the team. `translations`
/// maps language codes to display labels.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub translations: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_card::Entity")]
    PlayerCards,
}

impl Related<super::player_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerCards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
