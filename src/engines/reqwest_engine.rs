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

use crate::domain::sources::hot_source::SourceError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";

/// 错误响应体写入日志时的最大字符数
const MAX_ERROR_BODY_CHARS: usize = 512;

/// 抓取响应
#[derive(Debug)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub content: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取引擎。客户端只构建一次，
/// 所有请求共享配置的请求头和超时时间。
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建抓取引擎
    ///
    /// # 参数
    ///
    /// * `headers` - 每个请求都会携带的请求头，无效的名称或值会被跳过
    /// * `timeout` - 单次请求超时时间
    pub fn new(headers: &HashMap<String, String>, timeout: Duration) -> Result<Self, SourceError> {
        let mut default_headers = HeaderMap::new();
        for (k, v) in headers {
            match (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                (Ok(k), Ok(v)) => {
                    default_headers.insert(k, v);
                }
                _ => warn!("Skipping invalid request header {}", k),
            }
        }

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(default_headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// 执行GET请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 任意状态码的响应
    /// * `Err(SourceError::Request)` - 连接失败或超时
    pub async fn get(&self, url: &str) -> Result<FetchResponse, SourceError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status_code = response.status().as_u16();
        let content = response.text().await?;
        let response_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            url,
            status_code,
            response_time_ms,
            bytes = content.len(),
            "Fetched page"
        );

        Ok(FetchResponse {
            status_code,
            content,
            response_time_ms,
        })
    }

    /// 执行GET请求并要求成功状态码
    ///
    /// 非 2xx 响应转换为 `SourceError::Status`，附带截断后的响应体
    pub async fn get_success(&self, url: &str) -> Result<String, SourceError> {
        let response = self.get(url).await?;
        if (200..300).contains(&response.status_code) {
            Ok(response.content)
        } else {
            Err(SourceError::Status {
                status: response.status_code,
                body: response.content.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            })
        }
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
