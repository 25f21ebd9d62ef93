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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含数据库、抓取节奏、远端数据源、请求头和日志等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 抓取循环配置
    pub crawler: CrawlerSettings,
    /// 远端数据源配置
    pub source: SourceSettings,
    /// 请求头（包括详情页所需的 Cookie）
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 抓取循环配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// 每个问题详情请求之前的休眠时间（秒）
    pub interval_between_question_secs: f64,
    /// 两轮热榜抓取之间的目标间隔（秒），以本轮开始时间为基准
    pub interval_between_board_secs: f64,
    /// 调试用：每轮只处理前 `top` 条
    pub top: Option<usize>,
    /// 单次远端请求超时时间（秒）
    pub request_timeout_secs: u64,
}

impl CrawlerSettings {
    pub fn interval_between_question(&self) -> Duration {
        secs_to_duration(self.interval_between_question_secs)
    }

    pub fn interval_between_board(&self) -> Duration {
        secs_to_duration(self.interval_between_board_secs)
    }

    /// 校验休眠间隔：必须是有限的非负秒数
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, secs) in [
            (
                "crawler.interval_between_question_secs",
                self.interval_between_question_secs,
            ),
            (
                "crawler.interval_between_board_secs",
                self.interval_between_board_secs,
            ),
        ] {
            if Duration::try_from_secs_f64(secs).is_err() {
                return Err(ConfigError::Message(format!(
                    "{} must be a finite, non-negative number of seconds, got {}",
                    key, secs
                )));
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 远端数据源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 热榜页面地址
    pub board_url: String,
    /// 问题页面地址模板，`{qid}` 会被替换为问题编号
    pub question_url: String,
    /// 热度文本的结尾标记
    pub heat_suffix: String,
}

impl SourceSettings {
    pub fn question_url_for(&self, qid: u64) -> String {
        self.question_url.replace("{qid}", &qid.to_string())
    }
}

/// 日志配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// 追加写入的日志文件，为空时只输出到控制台
    pub file: Option<String>,
    /// 默认过滤规则，`RUST_LOG` 优先
    pub filter: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次从默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `HOTWATCH__` 前缀的环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败或取值非法
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::layered("config", &env, Self::environment())
    }

    /// 仅从默认值和指定文件加载配置
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Self::builder()?
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()?;
        settings.crawler.validate()?;
        Ok(settings)
    }

    /// 命令行参数覆盖 `crawler.top`，未给出时保留配置值
    pub fn apply_top(&mut self, top: Option<usize>) {
        if top.is_some() {
            self.crawler.top = top;
        }
    }

    fn environment() -> Environment {
        Environment::with_prefix("HOTWATCH")
            .separator("__")
            .try_parsing(true)
    }

    fn layered(dir: &str, env: &str, environment: Environment) -> Result<Self, ConfigError> {
        let settings: Settings = Self::builder()?
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", dir, env)).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        settings.crawler.validate()?;
        Ok(settings)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Default DB pool settings
            .set_default("database.url", "sqlite://hotwatch.db?mode=rwc")?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default crawl cadence
            .set_default("crawler.interval_between_question_secs", 3.0)?
            .set_default("crawler.interval_between_board_secs", 600.0)?
            .set_default("crawler.request_timeout_secs", 30)?
            // Default source endpoints
            .set_default("source.board_url", "https://www.zhihu.com/hot")?
            .set_default("source.question_url", "https://www.zhihu.com/question/{qid}")?
            .set_default("source.heat_suffix", "热度")
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    // 加载时已校验；直接构造的配置中负数或 NaN 视为 0，溢出视为最大值
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
