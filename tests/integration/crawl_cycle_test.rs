// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    crawler_settings, question_page, setup_db, unreachable_base_url, zhihu_source,
    zhihu_source_at, HOT_PAGE,
};
use hotwatch::domain::repositories::crawl_repository::CrawlRepository;
use hotwatch::domain::sources::hot_source::SourceError;
use hotwatch::infrastructure::repositories::crawl_repo_impl::CrawlRepositoryImpl;
use hotwatch::workers::crawl_worker::{CycleFailure, CrawlWorker, CycleStage};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_hot_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOT_PAGE))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_cycle_stores_board_with_detail_into_database() {
    let server = MockServer::start().await;
    mount_hot_page(&server).await;
    Mock::given(method("GET"))
        .and(path("/question/541600869"))
        .respond_with(ResponseTemplate::new(200).set_body_string(question_page(541600869)))
        .expect(1)
        .mount(&server)
        .await;

    let repository = Arc::new(CrawlRepositoryImpl::new(setup_db().await));
    let worker = CrawlWorker::new(
        repository.clone(),
        Arc::new(zhihu_source(&server)),
        crawler_settings(None),
    );

    let report = worker.run_cycle().await.unwrap();
    assert_eq!(report.entries, 2);
    assert_eq!(report.stored, 2);

    let records = repository.find_records(report.crawl_id).await.unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].ranking, 0);
    assert_eq!(records[0].entry.qid, Some(541600869));
    assert_eq!(records[0].entry.title, "A");
    assert_eq!(records[0].entry.heat, "76万热度");
    assert_eq!(records[0].detail.created, Some(1657248657));
    assert_eq!(records[0].detail.follower_count, Some(5980));
    assert_eq!(records[0].detail.visit_count, Some(2139067));
    assert_eq!(records[0].detail.answer_count, Some(2512));
    assert_eq!(records[0].detail.raw.as_deref(), Some("<p>...</p>"));

    assert_eq!(records[1].ranking, 1);
    assert_eq!(records[1].entry.title, "B");
    assert_eq!(records[1].entry.heat, "10万热度");
    assert!(records[1].detail.is_absent());

    let crawl = repository.find_crawl(report.crawl_id).await.unwrap().unwrap();
    assert!(crawl.end.unwrap() >= crawl.begin);
}

#[tokio::test]
async fn test_detail_error_still_stores_row() {
    let server = MockServer::start().await;
    mount_hot_page(&server).await;
    Mock::given(method("GET"))
        .and(path("/question/541600869"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let repository = Arc::new(CrawlRepositoryImpl::new(setup_db().await));
    let worker = CrawlWorker::new(
        repository.clone(),
        Arc::new(zhihu_source(&server)),
        crawler_settings(None),
    );

    let report = worker.run_cycle().await.unwrap();
    assert_eq!(report.detail_failures, 1);

    let records = repository.find_records(report.crawl_id).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].detail.is_absent());
    assert_eq!(records[0].entry.qid, Some(541600869));
}

#[tokio::test]
async fn test_board_error_leaves_crawl_open() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let repository = Arc::new(CrawlRepositoryImpl::new(setup_db().await));
    let worker = CrawlWorker::new(
        repository.clone(),
        Arc::new(zhihu_source(&server)),
        crawler_settings(None),
    );

    let error = worker.run_cycle().await.unwrap_err();
    assert_eq!(error.stage, CycleStage::FetchBoard);

    let crawl_id = error.crawl_id.unwrap();
    let crawl = repository.find_crawl(crawl_id).await.unwrap().unwrap();
    assert_eq!(crawl.end, None);
    assert!(repository.find_records(crawl_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_board_connection_refused_leaves_crawl_open() {
    let repository = Arc::new(CrawlRepositoryImpl::new(setup_db().await));
    let worker = CrawlWorker::new(
        repository.clone(),
        Arc::new(zhihu_source_at(&unreachable_base_url())),
        crawler_settings(None),
    );

    let error = worker.run_cycle().await.unwrap_err();
    assert_eq!(error.stage, CycleStage::FetchBoard);
    assert!(matches!(
        error.source,
        CycleFailure::Source(SourceError::Request(_))
    ));

    let crawl_id = error.crawl_id.unwrap();
    let crawl = repository.find_crawl(crawl_id).await.unwrap().unwrap();
    assert_eq!(crawl.end, None);
    assert!(repository.find_records(crawl_id).await.unwrap().is_empty());

    // 下一轮仍然开启新的轮次
    let next = worker.run_cycle().await.unwrap_err();
    assert_ne!(next.crawl_id, Some(crawl_id));
}

#[tokio::test]
async fn test_repeated_cycles_do_not_deduplicate() {
    let server = MockServer::start().await;
    mount_hot_page(&server).await;
    Mock::given(method("GET"))
        .and(path("/question/541600869"))
        .respond_with(ResponseTemplate::new(200).set_body_string(question_page(541600869)))
        .mount(&server)
        .await;

    let repository = Arc::new(CrawlRepositoryImpl::new(setup_db().await));
    let worker = CrawlWorker::new(
        repository.clone(),
        Arc::new(zhihu_source(&server)),
        crawler_settings(Some(1)),
    );

    let first = worker.tick().await.unwrap();
    let second = worker.tick().await.unwrap();

    assert_ne!(first.crawl_id, second.crawl_id);
    assert_eq!(repository.find_records(first.crawl_id).await.unwrap().len(), 1);
    assert_eq!(repository.find_records(second.crawl_id).await.unwrap().len(), 1);
}
