// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub qid: Option<i64>,
    pub crawl_id: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub hit_at: Option<f64>,
    pub ranking: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub heat: String,
    pub created: Option<i64>,
    #[sea_orm(column_name = "visitCount")]
    pub visit_count: Option<i64>,
    #[sea_orm(column_name = "followerCount")]
    pub follower_count: Option<i64>,
    #[sea_orm(column_name = "answerCount")]
    pub answer_count: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub raw: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::crawl::Entity",
        from = "Column::CrawlId",
        to = "super::crawl::Column::Id"
    )]
    Crawl,
}

impl Related<super::crawl::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crawl.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
