// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{question_page, zhihu_source, HOT_PAGE};
use hotwatch::domain::sources::hot_source::{HotSource, SourceError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_board_parses_hot_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hot"))
        .and(header("cookie", "z_c0=token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOT_PAGE))
        .mount(&server)
        .await;

    let source = zhihu_source(&server);
    let entries = source.fetch_board().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].qid, Some(541600869));
    assert_eq!(entries[0].heat, "76万热度");
    assert_eq!(entries[0].excerpt.as_deref(), Some("摘要"));
    assert_eq!(entries[1].qid, None);
    assert_eq!(entries[1].url, "/something-unparseable");
}

#[tokio::test]
async fn test_fetch_board_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(ResponseTemplate::new(401).set_body_string("请先登录"))
        .mount(&server)
        .await;

    let source = zhihu_source(&server);
    let error = source.fetch_board().await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert!(matches!(error, SourceError::Status { .. }));
}

#[tokio::test]
async fn test_fetch_question_reads_initial_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/question/541600869"))
        .respond_with(ResponseTemplate::new(200).set_body_string(question_page(541600869)))
        .mount(&server)
        .await;

    let source = zhihu_source(&server);
    let detail = source.fetch_question(541600869).await.unwrap();

    assert_eq!(detail.created, Some(1657248657));
    assert_eq!(detail.follower_count, Some(5980));
    assert_eq!(detail.visit_count, Some(2139067));
    assert_eq!(detail.answer_count, Some(2512));
    assert_eq!(detail.raw.as_deref(), Some("<p>...</p>"));
    assert!(detail.hit_at.is_some());
}

#[tokio::test]
async fn test_fetch_question_without_payload_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/question/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let source = zhihu_source(&server);
    let error = source.fetch_question(1).await.unwrap_err();

    assert!(matches!(error, SourceError::Parse(_)));
    assert_eq!(error.status(), None);
}
