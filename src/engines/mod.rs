// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取引擎模块
///
/// 基于 reqwest 的 HTTP 请求封装，统一超时与请求头
pub mod reqwest_engine;
