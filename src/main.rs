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

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use trackrs::config::roster;
use trackrs::config::settings::Settings;
use trackrs::domain::services::matcher::SkillMatcher;
use trackrs::domain::services::scrape_service::SkillScraper;
use trackrs::engines::dashboard_engine::DashboardEngine;
use trackrs::infrastructure::cache::snapshot_cache::{SnapshotCache, SystemClock};
use trackrs::infrastructure::proxy::pool::{ProxyPool, ProxyPoolConfig};
use trackrs::utils::telemetry;

/// 主函数
///
/// 应用程序入口点：加载配置和名册，按需发现代理，
/// 执行一轮抓取和匹配，将到期技能列表输出给下游
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting trackrs...");

    // 2. Load configuration and roster
    let settings = Settings::new()?;
    let tz = settings.dashboard.timezone()?;
    let roster = roster::load_roster(Path::new(&settings.roster.path))?;

    // 3. Resolve the outbound proxy, if any
    let proxy = if let Some(static_url) = &settings.proxy.static_url {
        info!("Using static proxy {}", static_url);
        Some(static_url.clone())
    } else if settings.proxy.enabled {
        let pool = ProxyPool::new(ProxyPoolConfig {
            source_url: settings.proxy.source_url.clone(),
            target_url: settings.dashboard.url.clone(),
            verify_timeout: Duration::from_secs(settings.proxy.verify_timeout_secs),
            race_limit: settings.proxy.race_limit,
        });
        let found = pool.find_working_proxy().await;
        if found.is_none() {
            warn!("No working proxy found; attempting direct access");
        }
        found
    } else {
        None
    };

    // 4. Scrape and classify
    let scraper = SkillScraper::new(
        Arc::new(DashboardEngine),
        SnapshotCache::new(Arc::new(SystemClock)),
        settings.dashboard.clone(),
    );

    let records = scraper.scrape(proxy.as_deref()).await?;
    info!("Scraped {} raw skill row(s)", records.len());

    let expiring = SkillMatcher::classify(
        &roster.members,
        &roster.skills,
        &records,
        settings.dashboard.threshold_days,
        tz,
    );
    info!(
        "{} skill record(s) due within {} day(s)",
        expiring.len(),
        settings.dashboard.threshold_days
    );

    // 5. Hand the classified list to the downstream consumer
    println!("{}", serde_json::to_string_pretty(&expiring)?);

    Ok(())
}
