// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CrawlerSettings;
use crate::domain::models::board_entry::BoardEntry;
use crate::domain::models::crawl::now_timestamp;
use crate::domain::models::hot_record::HotRecord;
use crate::domain::models::question_detail::QuestionDetail;
use crate::domain::repositories::crawl_repository::{CrawlRepository, RepositoryError};
use crate::domain::sources::hot_source::{HotSource, SourceError};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, Instant};
use tracing::{error, info, warn};

/// 一轮抓取中可能中止整轮的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStage {
    /// 写入轮次开始记录
    OpenCrawl,
    /// 抓取热榜
    FetchBoard,
    /// 写入轮次结束时间
    CloseCrawl,
}

impl fmt::Display for CycleStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CycleStage::OpenCrawl => write!(f, "open_crawl"),
            CycleStage::FetchBoard => write!(f, "fetch_board"),
            CycleStage::CloseCrawl => write!(f, "close_crawl"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CycleFailure {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 中止一轮抓取的错误
#[derive(Debug, Error)]
#[error("crawl {crawl_id:?} stopped at {stage}: {source}")]
pub struct CycleError {
    pub stage: CycleStage,
    /// 轮次开始记录写入失败时为空
    pub crawl_id: Option<i32>,
    #[source]
    pub source: CycleFailure,
}

impl CycleError {
    fn new(stage: CycleStage, crawl_id: Option<i32>, source: impl Into<CycleFailure>) -> Self {
        Self {
            stage,
            crawl_id,
            source: source.into(),
        }
    }
}

/// 单个条目的详情获取结果
#[derive(Debug)]
pub enum DetailStatus {
    Fetched,
    /// 条目没有问题编号
    MissingId,
    Failed(SourceError),
}

/// 单个条目的处理结果
#[derive(Debug)]
pub enum ItemOutcome {
    Stored { detail: DetailStatus },
    Dropped {
        detail: DetailStatus,
        error: RepositoryError,
    },
}

/// 一轮完整抓取的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub crawl_id: i32,
    /// 截断后处理的条目数
    pub entries: usize,
    pub stored: usize,
    pub missing_id: usize,
    pub detail_failures: usize,
    pub dropped: usize,
}

impl CycleReport {
    fn new(crawl_id: i32, entries: usize) -> Self {
        Self {
            crawl_id,
            entries,
            ..Default::default()
        }
    }

    fn record(&mut self, outcome: &ItemOutcome) {
        let detail = match outcome {
            ItemOutcome::Stored { detail } => {
                self.stored += 1;
                detail
            }
            ItemOutcome::Dropped { detail, .. } => {
                self.dropped += 1;
                detail
            }
        };
        match detail {
            DetailStatus::Fetched => {}
            DetailStatus::MissingId => self.missing_id += 1,
            DetailStatus::Failed(_) => self.detail_failures += 1,
        }
    }
}

/// 距下一轮开始还需等待的时间
///
/// 节奏以本轮开始时间为基准：耗时超过目标间隔时不再等待。
pub fn next_cycle_delay(target: Duration, elapsed: Duration) -> Duration {
    target.saturating_sub(elapsed)
}

/// 热榜抓取工作器
///
/// 顺序执行：开始轮次 → 抓取热榜 → 逐条抓取详情并写入 → 结束轮次 → 等待下一轮。
pub struct CrawlWorker<R, S>
where
    R: CrawlRepository + 'static,
    S: HotSource + 'static,
{
    repository: Arc<R>,
    source: Arc<S>,
    settings: CrawlerSettings,
}

impl<R, S> CrawlWorker<R, S>
where
    R: CrawlRepository + 'static,
    S: HotSource + 'static,
{
    pub fn new(repository: Arc<R>, source: Arc<S>, settings: CrawlerSettings) -> Self {
        Self {
            repository,
            source,
            settings,
        }
    }

    /// 运行工作器，永不返回
    pub async fn run(&self) {
        info!(
            source = self.source.name(),
            top = ?self.settings.top,
            "Crawl worker started"
        );

        loop {
            // Outcome is already logged inside tick
            let _ = self.tick().await;
        }
    }

    /// 执行一轮抓取，然后等待到下一轮开始时间
    pub async fn tick(&self) -> Result<CycleReport, CycleError> {
        let started = Instant::now();
        info!("Begin crawling ...");

        let outcome = self.run_cycle().await;
        match &outcome {
            Ok(report) => info!(
                crawl_id = report.crawl_id,
                entries = report.entries,
                stored = report.stored,
                missing_id = report.missing_id,
                detail_failures = report.detail_failures,
                dropped = report.dropped,
                "Crawl finished"
            ),
            Err(e) => error!(
                crawl_id = ?e.crawl_id,
                stage = %e.stage,
                "Crawl {:?} encountered an error, this crawl stopped: {}",
                e.crawl_id,
                e
            ),
        }

        let delay = next_cycle_delay(self.settings.interval_between_board(), started.elapsed());
        info!("Sleep {:.3} second(s) before next crawl", delay.as_secs_f64());
        sleep(delay).await;

        outcome
    }

    /// 执行一轮抓取（不含轮次之间的等待）
    ///
    /// 热榜抓取失败时轮次保持未结束状态。
    pub async fn run_cycle(&self) -> Result<CycleReport, CycleError> {
        let crawl_id = self
            .repository
            .begin_crawl(now_timestamp())
            .await
            .map_err(|e| CycleError::new(CycleStage::OpenCrawl, None, e))?;

        let mut entries = match self.source.fetch_board().await {
            Ok(entries) => entries,
            Err(e) => {
                error!(crawl_id, status = ?e.status(), "Hot list request failed: {}", e);
                return Err(CycleError::new(CycleStage::FetchBoard, Some(crawl_id), e));
            }
        };

        info!(
            crawl_id,
            "Get {} items: {}",
            entries.len(),
            entries
                .iter()
                .map(|e| e.title.chars().take(20).collect::<String>())
                .collect::<Vec<_>>()
                .join(",")
        );

        if let Some(top) = self.settings.top {
            entries.truncate(top);
        }

        let mut report = CycleReport::new(crawl_id, entries.len());
        for (idx, entry) in entries.into_iter().enumerate() {
            let outcome = self.process_entry(crawl_id, idx, entry).await;
            report.record(&outcome);
        }

        self.repository
            .end_crawl(crawl_id, now_timestamp())
            .await
            .map_err(|e| CycleError::new(CycleStage::CloseCrawl, Some(crawl_id), e))?;

        Ok(report)
    }

    /// 处理热榜中的一个条目
    ///
    /// 详情失败时以空详情写入；写入失败时该条目被丢弃，不影响本轮其他条目。
    pub async fn process_entry(&self, crawl_id: i32, idx: usize, entry: BoardEntry) -> ItemOutcome {
        let interval = self.settings.interval_between_question();
        info!("Sleep {:.3} second(s)", interval.as_secs_f64());
        sleep(interval).await;

        let (detail, status) = self.fetch_detail(crawl_id, idx, &entry).await;

        let ranking = match i32::try_from(idx) {
            Ok(ranking) => ranking,
            Err(_) => {
                let error = RepositoryError::InvalidData(format!("ranking {} out of range", idx));
                error!(crawl_id, ranking = idx, "Exception when adding entry: {}", error);
                return ItemOutcome::Dropped {
                    detail: status,
                    error,
                };
            }
        };

        let record = HotRecord::new(crawl_id, ranking, entry, detail);
        match self.repository.add_record(&record).await {
            Ok(()) => ItemOutcome::Stored { detail: status },
            Err(error) => {
                error!(crawl_id, ranking, "Exception when adding entry: {}", error);
                ItemOutcome::Dropped {
                    detail: status,
                    error,
                }
            }
        }
    }

    async fn fetch_detail(
        &self,
        crawl_id: i32,
        idx: usize,
        entry: &BoardEntry,
    ) -> (QuestionDetail, DetailStatus) {
        let Some(qid) = entry.qid else {
            warn!(
                "Unparsed URL @ {} ranking {} in crawl {}.",
                entry.url, idx, crawl_id
            );
            return (QuestionDetail::default(), DetailStatus::MissingId);
        };

        match self.source.fetch_question(qid).await {
            Ok(detail) => {
                info!(
                    "Get question detail for {}: raw detail length {}",
                    entry.title,
                    detail.raw_len()
                );
                (detail, DetailStatus::Fetched)
            }
            Err(e) => {
                error!(
                    crawl_id,
                    qid,
                    status = ?e.status(),
                    "Failed to fetch question detail: {}",
                    e
                );
                (QuestionDetail::default(), DetailStatus::Failed(e))
            }
        }
    }
}

#[cfg(test)]
#[path = "crawl_worker_test.rs"]
mod tests;
