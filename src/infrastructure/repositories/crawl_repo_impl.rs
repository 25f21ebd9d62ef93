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

use crate::domain::models::board_entry::BoardEntry;
use crate::domain::models::crawl::Crawl;
use crate::domain::models::hot_record::HotRecord;
use crate::domain::models::question_detail::QuestionDetail;
use crate::domain::repositories::crawl_repository::{CrawlRepository, RepositoryError};
use crate::infrastructure::database::entities::{crawl as crawl_entity, record as record_entity};
use async_trait::async_trait;
use sea_orm::{sea_query::Expr, *};
use std::sync::Arc;
use tracing::debug;

/// 抓取轮次仓库实现
pub struct CrawlRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CrawlRepositoryImpl {
    /// 创建新的抓取轮次仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrawlRepository for CrawlRepositoryImpl {
    async fn begin_crawl(&self, begin: f64) -> Result<i32, RepositoryError> {
        let model = crawl_entity::ActiveModel {
            begin: Set(begin),
            end: Set(None),
            ..Default::default()
        };

        let result = crawl_entity::Entity::insert(model)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.last_insert_id)
    }

    async fn end_crawl(&self, id: i32, end: f64) -> Result<(), RepositoryError> {
        let result = crawl_entity::Entity::update_many()
            .col_expr(crawl_entity::Column::End, Expr::value(end))
            .filter(crawl_entity::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn add_record(&self, record: &HotRecord) -> Result<(), RepositoryError> {
        let qid = record
            .entry
            .qid
            .map(i64::try_from)
            .transpose()
            .map_err(|_| RepositoryError::InvalidData("qid out of range".to_string()))?;

        let model = record_entity::ActiveModel {
            qid: Set(qid),
            crawl_id: Set(record.crawl_id),
            hit_at: Set(record.detail.hit_at),
            ranking: Set(record.ranking),
            title: Set(record.entry.title.clone()),
            heat: Set(record.entry.heat.clone()),
            created: Set(record.detail.created),
            visit_count: Set(record.detail.visit_count),
            follower_count: Set(record.detail.follower_count),
            answer_count: Set(record.detail.answer_count),
            excerpt: Set(record.entry.excerpt.clone()),
            raw: Set(record.detail.raw.clone()),
            url: Set(Some(record.entry.url.clone())),
            ..Default::default()
        };

        record_entity::Entity::insert(model)
            .exec(self.db.as_ref())
            .await?;
        debug!(
            crawl_id = record.crawl_id,
            ranking = record.ranking,
            with_detail = !record.detail.is_absent(),
            "Record stored"
        );
        Ok(())
    }

    async fn find_crawl(&self, id: i32) -> Result<Option<Crawl>, RepositoryError> {
        let model = crawl_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(|m| Crawl {
            id: m.id,
            begin: m.begin,
            end: m.end,
        }))
    }

    async fn find_records(&self, crawl_id: i32) -> Result<Vec<HotRecord>, RepositoryError> {
        let models = record_entity::Entity::find()
            .filter(record_entity::Column::CrawlId.eq(crawl_id))
            .order_by_asc(record_entity::Column::Ranking)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_hot_record).collect())
    }
}

fn to_hot_record(m: record_entity::Model) -> HotRecord {
    HotRecord {
        crawl_id: m.crawl_id,
        ranking: m.ranking,
        entry: BoardEntry {
            title: m.title,
            heat: m.heat,
            excerpt: m.excerpt,
            url: m.url.unwrap_or_default(),
            qid: m.qid.and_then(|q| u64::try_from(q).ok()),
        },
        detail: QuestionDetail {
            created: m.created,
            visit_count: m.visit_count,
            follower_count: m.follower_count,
            answer_count: m.answer_count,
            raw: m.raw,
            hit_at: m.hit_at,
        },
    }
}

#[cfg(test)]
#[path = "crawl_repo_impl_test.rs"]
mod tests;
