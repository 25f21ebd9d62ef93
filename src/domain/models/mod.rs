// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 抓取轮次（crawl）：一次完整热榜抓取的开始与结束时间
/// - 热榜条目（board_entry）：热榜页面上的一条排名记录
/// - 问题详情（question_detail）：问题页面补充的统计信息
/// - 热榜记录（hot_record）：条目、详情、排名与轮次的组合，即持久化的一行
pub mod board_entry;
pub mod crawl;
pub mod hot_record;
pub mod question_detail;
