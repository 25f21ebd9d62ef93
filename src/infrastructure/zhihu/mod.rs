// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 知乎数据源
///
/// 热榜页面与问题页面的解析，以及基于 reqwest 引擎的 `HotSource` 实现
pub mod board_parser;
pub mod question_parser;
pub mod zhihu_source;
