// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::board_entry::BoardEntry;
use crate::domain::sources::hot_source::SourceError;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// 热榜页面解析器
///
/// 选择器和正则在构造时编译一次，之后每轮复用。
pub struct BoardParser {
    item_selector: Selector,
    link_selector: Selector,
    title_selector: Selector,
    excerpt_selector: Selector,
    metrics_selector: Selector,
    qid_regex: Regex,
    heat_regex: Regex,
}

impl BoardParser {
    /// # 参数
    ///
    /// * `heat_suffix` - 热度文本的结尾标记，例如 `热度`
    pub fn new(heat_suffix: &str) -> Result<Self, SourceError> {
        Ok(Self {
            item_selector: selector("section.HotItem")?,
            link_selector: selector("a")?,
            title_selector: selector(".HotItem-title")?,
            excerpt_selector: selector("p.HotItem-excerpt")?,
            metrics_selector: selector("div.HotItem-metrics")?,
            qid_regex: Regex::new(r"question/(\d+)")
                .map_err(|e| SourceError::parse(e.to_string()))?,
            heat_regex: Regex::new(&format!(".+{}", regex::escape(heat_suffix)))
                .map_err(|e| SourceError::parse(e.to_string()))?,
        })
    }

    /// 解析热榜页面
    ///
    /// 没有链接或标题的条目不是热榜问题，直接跳过；
    /// 链接中没有问题编号的条目保留，`qid` 为空。
    pub fn parse(&self, html: &str) -> Vec<BoardEntry> {
        let document = Html::parse_document(html);
        let mut entries = Vec::new();

        for (position, item) in document.select(&self.item_selector).enumerate() {
            match self.parse_item(item) {
                Some(entry) => entries.push(entry),
                None => debug!(position, "Skipping hot item without link or title"),
            }
        }

        entries
    }

    fn parse_item(&self, item: ElementRef<'_>) -> Option<BoardEntry> {
        let link = item.select(&self.link_selector).next()?;
        let url = link.value().attr("href")?.trim().to_string();

        let title = link
            .value()
            .attr("title")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| {
                item.select(&self.title_selector)
                    .next()
                    .map(element_text)
                    .filter(|t| !t.is_empty())
            })?;

        let excerpt = item
            .select(&self.excerpt_selector)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty());

        let heat = item
            .select(&self.metrics_selector)
            .next()
            .map(|metrics| self.extract_heat(&element_text(metrics)))
            .unwrap_or_default();

        Some(BoardEntry {
            qid: self.extract_qid(&url),
            title,
            heat,
            excerpt,
            url,
        })
    }

    /// 从链接中提取问题编号
    pub fn extract_qid(&self, url: &str) -> Option<u64> {
        self.qid_regex
            .captures(url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// 提取以热度标记结尾的文本，匹配不到时退回整段文本
    pub fn extract_heat(&self, metrics: &str) -> String {
        self.heat_regex
            .find(metrics)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| metrics.trim().to_string())
    }
}

fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::parse(format!("invalid selector {}: {}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
#[path = "board_parser_test.rs"]
mod tests;
