//! 互评提交实体
//!
//! 每一行对应一次评估中"评价人 → 被评价人"的一条打分记录。
//! (course_id, evaluation_name, reviewer_email, reviewee_email) 的唯一性由存储层保证。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub course_id: String,
    pub evaluation_name: String,
    pub team_name: String,
    pub reviewer_email: String,
    pub reviewee_email: String,
    #[serde(default)]
    pub points: i32,
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(default)]
    pub justification: Option<String>,
    // 未开启互评反馈时为空
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(default)]
    pub peer_feedback: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
