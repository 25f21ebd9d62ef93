// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供外部服务集成：数据库持久化与知乎页面抓取
pub mod database;
pub mod repositories;
pub mod zhihu;
