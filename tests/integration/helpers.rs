// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hotwatch::config::settings::{CrawlerSettings, SourceSettings};
use hotwatch::engines::reqwest_engine::ReqwestEngine;
use hotwatch::infrastructure::zhihu::zhihu_source::ZhihuSource;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub const HOT_PAGE: &str = r#"
<html><body><div class="HotList-list">
  <section class="HotItem">
    <div class="HotItem-content">
      <a href="https://www.zhihu.com/question/541600869" title="A">
        <h2 class="HotItem-title">A</h2>
        <p class="HotItem-excerpt">摘要</p>
      </a>
      <div class="HotItem-metrics">76万热度</div>
    </div>
  </section>
  <section class="HotItem">
    <div class="HotItem-content">
      <a href="/something-unparseable" title="B"></a>
      <div class="HotItem-metrics">10万热度</div>
    </div>
  </section>
</div></body></html>
"#;

pub fn question_page(qid: u64) -> String {
    format!(
        r#"<html><body><script id="js-initialData" type="text/json">{{"initialState":{{"entities":{{"questions":{{"{qid}":{{"title":"A","created":1657248657,"followerCount":5980,"visitCount":2139067,"answerCount":2512,"detail":"<p>...</p>"}}}}}}}}}}</script></body></html>"#,
        qid = qid
    )
}

pub fn source_settings(base_url: &str) -> SourceSettings {
    SourceSettings {
        board_url: format!("{}/hot", base_url),
        question_url: format!("{}/question/{{qid}}", base_url),
        heat_suffix: "热度".to_string(),
    }
}

pub fn zhihu_source(server: &MockServer) -> ZhihuSource {
    zhihu_source_at(&server.uri())
}

pub fn zhihu_source_at(base_url: &str) -> ZhihuSource {
    let mut headers = HashMap::new();
    headers.insert("cookie".to_string(), "z_c0=token".to_string());
    let engine = ReqwestEngine::new(&headers, Duration::from_secs(5)).unwrap();
    ZhihuSource::new(engine, source_settings(base_url)).unwrap()
}

/// 一个当前没有任何进程监听的本地地址
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn crawler_settings(top: Option<usize>) -> CrawlerSettings {
    CrawlerSettings {
        interval_between_question_secs: 0.0,
        interval_between_board_secs: 0.0,
        top,
        request_timeout_secs: 5,
    }
}

pub async fn setup_db() -> Arc<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let db = Arc::new(db);
    Migrator::up(db.as_ref(), None).await.unwrap();
    db
}
