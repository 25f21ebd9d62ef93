// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 抓取轮次实体
///
/// 每轮热榜抓取开始时创建，结束时写入 `end`。
/// 中途失败的轮次保持 `end` 为空，不做补偿。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crawl {
    /// 存储分配的自增ID
    pub id: i32,
    /// 开始时间（Unix 秒，含小数）
    pub begin: f64,
    /// 结束时间，轮次未正常结束时为空
    pub end: Option<f64>,
}

impl Crawl {
    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }
}

/// 将时间点转换为带毫秒精度的 Unix 秒
pub fn unix_timestamp(at: DateTime<Utc>) -> f64 {
    at.timestamp_millis() as f64 / 1000.0
}

/// 当前时间的 Unix 秒
pub fn now_timestamp() -> f64 {
    unix_timestamp(Utc::now())
}
