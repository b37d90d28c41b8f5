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

/// 应用程序配置设置
///
/// 包含仪表盘、代理和名册等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 仪表盘配置
    pub dashboard: DashboardSettings,
    /// 代理配置
    pub proxy: ProxySettings,
    /// 名册配置
    pub roster: RosterSettings,
}

/// 仪表盘配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    /// 仪表盘URL
    pub url: String,
    /// 抓取缓存TTL（分钟），0为禁用缓存
    pub cache_ttl_minutes: u64,
    /// IANA时区标识符
    pub timezone: String,
    /// 到期阈值（天）
    pub threshold_days: i64,
}

impl DashboardSettings {
    /// 解析配置的IANA时区
    pub fn timezone(&self) -> Result<chrono_tz::Tz, ConfigError> {
        self.timezone
            .parse()
            .map_err(|_| ConfigError::Message(format!("invalid timezone: {}", self.timezone)))
    }
}

/// 代理配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ProxySettings {
    /// 是否启用代理发现
    pub enabled: bool,
    /// 静态代理URL；设置后跳过代理发现
    pub static_url: Option<String>,
    /// 候选列表来源URL
    pub source_url: String,
    /// 单个候选的验证超时（秒）
    pub verify_timeout_secs: u64,
    /// 并发验证数，1为顺序验证
    pub race_limit: usize,
}

/// 名册配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    /// 名册YAML文件路径
    pub path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default dashboard settings
            .set_default("dashboard.url", "https://skillsboard.example.org/overview")?
            .set_default("dashboard.cache_ttl_minutes", 10)?
            .set_default("dashboard.timezone", "Europe/London")?
            .set_default("dashboard.threshold_days", 30)?
            // Default proxy settings
            .set_default("proxy.enabled", false)?
            .set_default(
                "proxy.source_url",
                "https://api.proxyscrape.com/v2/?request=displayproxies&protocol=http&timeout=5000&country=GB",
            )?
            .set_default("proxy.verify_timeout_secs", 5)?
            .set_default("proxy.race_limit", 1)?
            // Default roster settings
            .set_default("roster.path", "config/roster.yaml")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("TRACKRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
