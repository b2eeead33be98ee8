use sea_orm::entity::prelude::*;

/// Denormalized profile attributes for one player. Created lazily the first
/// time a profile submission supplies card fields; every column is optional.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub player_id: i32,
    pub citizenship: Option<String>,
    pub club_from: Option<String>,
    pub growth: Option<i32>,
    pub weight: Option<i32>,
    pub game_num: Option<i32>,
    pub birthsday: Option<Date>,
    pub come: Option<Date>,
    pub leave: Option<Date>,
    pub team_status_id: Option<i32>,
    pub player_status_id: Option<i32>,
    pub level_id: Option<i32>,
    pub position_id: Option<i32>,
    pub foot_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::team_status::Entity",
        from = "Column::TeamStatusId",
        to = "super::team_status::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    TeamStatus,
    #[sea_orm(
        belongs_to = "super::player_status::Entity",
        from = "Column::PlayerStatusId",
        to = "super::player_status::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PlayerStatus,
    #[sea_orm(
        belongs_to = "super::level::Entity",
        from = "Column::LevelId",
        to = "super::level::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Level,
    #[sea_orm(
        belongs_to = "super::position::Entity",
        from = "Column::PositionId",
        to = "super::position::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Position,
    #[sea_orm(
        belongs_to = "super::foot::Entity",
        from = "Column::FootId",
        to = "super::foot::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Foot,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::team_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamStatus.def()
    }
}

impl Related<super::player_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerStatus.def()
    }
}

impl Related<super::level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Level.def()
    }
}

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl Related<super::foot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
