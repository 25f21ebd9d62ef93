// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::board_parser::BoardParser;
use super::question_parser::QuestionParser;
use crate::config::settings::SourceSettings;
use crate::domain::models::board_entry::BoardEntry;
use crate::domain::models::crawl::now_timestamp;
use crate::domain::models::question_detail::QuestionDetail;
use crate::domain::sources::hot_source::{HotSource, SourceError};
use crate::engines::reqwest_engine::ReqwestEngine;
use async_trait::async_trait;

/// 知乎热榜数据源
pub struct ZhihuSource {
    engine: ReqwestEngine,
    settings: SourceSettings,
    board_parser: BoardParser,
    question_parser: QuestionParser,
}

impl ZhihuSource {
    pub fn new(engine: ReqwestEngine, settings: SourceSettings) -> Result<Self, SourceError> {
        let board_parser = BoardParser::new(&settings.heat_suffix)?;
        Ok(Self {
            engine,
            settings,
            board_parser,
            question_parser: QuestionParser::new()?,
        })
    }
}

#[async_trait]
impl HotSource for ZhihuSource {
    async fn fetch_board(&self) -> Result<Vec<BoardEntry>, SourceError> {
        let html = self.engine.get_success(&self.settings.board_url).await?;
        Ok(self.board_parser.parse(&html))
    }

    async fn fetch_question(&self, qid: u64) -> Result<QuestionDetail, SourceError> {
        let url = self.settings.question_url_for(qid);
        let html = self.engine.get_success(&url).await?;
        self.question_parser.parse(&html, qid, now_timestamp())
    }

    fn name(&self) -> &'static str {
        "zhihu"
    }
}
