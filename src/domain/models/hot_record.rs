// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::board_entry::BoardEntry;
use super::question_detail::QuestionDetail;
use serde::{Deserialize, Serialize};

/// 热榜记录
///
/// 一轮抓取中一个排名位置对应的一行：轮次ID + 0 起始排名 + 条目 + 详情。
/// 排名显式保存，不依赖存储顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotRecord {
    /// 所属轮次
    pub crawl_id: i32,
    /// 在热榜中的位置，从 0 开始
    pub ranking: i32,
    pub entry: BoardEntry,
    pub detail: QuestionDetail,
}

impl HotRecord {
    pub fn new(crawl_id: i32, ranking: i32, entry: BoardEntry, detail: QuestionDetail) -> Self {
        Self {
            crawl_id,
            ranking,
            entry,
            detail,
        }
    }
}
