// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务概念，包括：
/// - 领域模型（models）：抓取轮次、热榜条目、问题详情和持久化记录
/// - 仓库接口（repositories）：轮次与记录的持久化抽象
/// - 数据源接口（sources）：热榜与问题详情的远端抓取抽象
pub mod models;
pub mod repositories;
pub mod sources;
