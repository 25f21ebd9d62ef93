// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::board_entry::BoardEntry;
use crate::domain::models::question_detail::QuestionDetail;
use async_trait::async_trait;
use thiserror::Error;

/// 数据源错误类型
#[derive(Debug, Error)]
pub enum SourceError {
    /// 网络请求失败（连接失败、超时等）
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 远端返回非成功状态码
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    /// 页面结构与预期不符
    #[error("Parse error: {0}")]
    Parse(String),
}

impl SourceError {
    pub fn parse(message: impl Into<String>) -> Self {
        SourceError::Parse(message.into())
    }

    /// 远端返回的状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Request(e) => e.status().map(|s| s.as_u16()),
            SourceError::Status { status, .. } => Some(*status),
            SourceError::Parse(_) => None,
        }
    }
}

/// 热榜数据源特质
#[async_trait]
pub trait HotSource: Send + Sync {
    /// 抓取当前热榜，按排名从高到低返回
    async fn fetch_board(&self) -> Result<Vec<BoardEntry>, SourceError>;

    /// 根据问题编号抓取问题详情
    async fn fetch_question(&self, qid: u64) -> Result<QuestionDetail, SourceError>;

    /// 数据源名称
    fn name(&self) -> &'static str;
}
