// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::Crawl;
use crate::domain::models::hot_record::HotRecord;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 数据无法写入目标列
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// 抓取轮次仓库特质
///
/// 每个方法都是一次独立的写入或查询，不跨条目聚合事务。
#[async_trait]
pub trait CrawlRepository: Send + Sync {
    /// 开始一轮抓取
    ///
    /// # 参数
    ///
    /// * `begin` - 开始时间（Unix 秒）
    ///
    /// # 返回值
    ///
    /// * `Ok(i32)` - 存储分配的轮次ID
    /// * `Err(RepositoryError)` - 写入失败
    async fn begin_crawl(&self, begin: f64) -> Result<i32, RepositoryError>;

    /// 结束一轮抓取，写入结束时间
    ///
    /// 轮次不存在时返回 `RepositoryError::NotFound`
    async fn end_crawl(&self, id: i32, end: f64) -> Result<(), RepositoryError>;

    /// 写入一条热榜记录
    async fn add_record(&self, record: &HotRecord) -> Result<(), RepositoryError>;

    /// 根据ID查找轮次
    async fn find_crawl(&self, id: i32) -> Result<Option<Crawl>, RepositoryError>;

    /// 按排名顺序列出某轮的全部记录
    async fn find_records(&self, crawl_id: i32) -> Result<Vec<HotRecord>, RepositoryError>;
}
