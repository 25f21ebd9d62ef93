// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 迁移命令行入口
///
/// 用于在守护进程之外手动创建或回滚 crawl / record 表
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
