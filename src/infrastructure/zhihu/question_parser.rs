// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::question_detail::QuestionDetail;
use crate::domain::sources::hot_source::SourceError;
use scraper::{Html, Selector};
use serde::Deserialize;

/// 问题在初始数据中的结构，只保留需要的字段
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionPayload {
    created: Option<i64>,
    visit_count: Option<i64>,
    follower_count: Option<i64>,
    answer_count: Option<i64>,
    detail: Option<String>,
}

/// 问题页面解析器
///
/// 问题页面把全部数据放在 `<script id="js-initialData">` 的 JSON 中，
/// 问题本身位于 `initialState.entities.questions.<qid>`。
pub struct QuestionParser {
    script_selector: Selector,
}

impl QuestionParser {
    pub fn new() -> Result<Self, SourceError> {
        let script_selector = Selector::parse("script#js-initialData")
            .map_err(|e| SourceError::parse(e.to_string()))?;
        Ok(Self { script_selector })
    }

    /// 解析问题页面
    ///
    /// # 参数
    ///
    /// * `html` - 问题页面
    /// * `qid` - 问题编号
    /// * `hit_at` - 请求时间（Unix 秒）
    pub fn parse(&self, html: &str, qid: u64, hit_at: f64) -> Result<QuestionDetail, SourceError> {
        let document = Html::parse_document(html);
        let script = document
            .select(&self.script_selector)
            .next()
            .ok_or_else(|| SourceError::parse("js-initialData script not found"))?;
        let text = script.text().collect::<String>();

        let data: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| SourceError::parse(format!("invalid initial data: {}", e)))?;

        let pointer = format!("/initialState/entities/questions/{}", qid);
        let question = data
            .pointer(&pointer)
            .ok_or_else(|| SourceError::parse(format!("question {} missing from initial data", qid)))?;

        let payload: QuestionPayload = serde_json::from_value(question.clone())
            .map_err(|e| SourceError::parse(format!("unexpected question shape: {}", e)))?;

        Ok(QuestionDetail {
            created: payload.created,
            visit_count: payload.visit_count,
            follower_count: payload.follower_count,
            answer_count: payload.answer_count,
            raw: payload.detail,
            hit_at: Some(hit_at),
        })
    }
}
