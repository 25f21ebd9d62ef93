// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 问题详情
///
/// 从问题页面内嵌的初始数据中提取。没有问题编号或请求失败时使用
/// `QuestionDetail::default()`，即所有字段为空。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionDetail {
    /// 问题创建时间（Unix 秒）
    pub created: Option<i64>,
    /// 浏览次数
    pub visit_count: Option<i64>,
    /// 关注人数
    pub follower_count: Option<i64>,
    /// 回答数量
    pub answer_count: Option<i64>,
    /// 问题描述原文（HTML）
    pub raw: Option<String>,
    /// 请求时间（Unix 秒，含小数）
    pub hit_at: Option<f64>,
}

impl QuestionDetail {
    /// 所有字段都为空
    pub fn is_absent(&self) -> bool {
        *self == Self::default()
    }

    pub fn raw_len(&self) -> usize {
        self.raw.as_ref().map_or(0, |raw| raw.chars().count())
    }
}
