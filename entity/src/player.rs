use sea_orm::entity::prelude::*;

/// A player profile. `photo` is a media-storage reference string, empty when
/// no photo has been uploaded. Ownership follows the team's scope: exactly
/// one of `user_id` or `club_id` is set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub photo: String,
    pub team_id: i32,
    pub user_id: Option<i32>,
    pub club_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::ClubId",
        to = "super::club::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Club,
    #[sea_orm(has_one = "super::player_card::Entity")]
    Card,
    #[sea_orm(has_many = "super::characteristic_observation::Entity")]
    CharacteristicObservations,
    #[sea_orm(has_many = "super::questionnaire_answer::Entity")]
    QuestionnaireAnswers,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::player_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl Related<super::characteristic_observation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacteristicObservations.def()
    }
}

impl Related<super::questionnaire_answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionnaireAnswers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
