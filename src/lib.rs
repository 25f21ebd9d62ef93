// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体、仓库接口和数据源接口
pub mod domain;

/// 引擎模块
///
/// 封装 HTTP 请求
pub mod engines;

/// 基础设施模块
///
/// 提供数据库和知乎页面解析等外部集成
pub mod infrastructure;

/// 工具模块
pub mod utils;

/// 工作器模块
///
/// 实现常驻的热榜抓取循环
pub mod workers;
