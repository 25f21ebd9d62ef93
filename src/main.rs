// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use hotwatch::config::settings::Settings;
use hotwatch::engines::reqwest_engine::ReqwestEngine;
use hotwatch::infrastructure::database::connection;
use hotwatch::infrastructure::repositories::crawl_repo_impl::CrawlRepositoryImpl;
use hotwatch::infrastructure::zhihu::zhihu_source::ZhihuSource;
use hotwatch::utils::telemetry;
use hotwatch::workers::crawl_worker::CrawlWorker;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing::info;

/// 知乎热榜定时抓取
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// 调试用：每轮只处理热榜前 N 条
    #[arg(long, env = "HOTWATCH_TOP")]
    top: Option<usize>,
}

/// 主函数
///
/// 加载配置、初始化日志和数据库，然后进入永不结束的抓取循环。
/// 只有启动阶段的错误会让进程退出。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    // 1. Load configuration
    let mut settings = Settings::new()?;
    settings.apply_top(opts.top);

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging)?;
    info!("Settings loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Create crawl / record tables if missing
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let repository = Arc::new(CrawlRepositoryImpl::new(db.clone()));
    let engine = ReqwestEngine::new(&settings.headers, settings.crawler.request_timeout())?;
    let source = Arc::new(ZhihuSource::new(engine, settings.source.clone())?);

    // 5. Run the crawl loop
    let worker = CrawlWorker::new(repository, source, settings.crawler.clone());
    worker.run().await;

    Ok(())
}
