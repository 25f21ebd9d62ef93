// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 热榜条目
///
/// 每轮从热榜页面重新解析得到，顺序即展示排名。
/// 链接中无法解析出问题编号时 `qid` 为空，但条目仍会被保留。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEntry {
    /// 问题标题
    pub title: String,
    /// 热度文本，例如 `76万热度`
    pub heat: String,
    /// 问题摘要
    pub excerpt: Option<String>,
    /// 问题链接
    pub url: String,
    /// 问题编号
    pub qid: Option<u64>,
}
