use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::settings::DashboardSettings;
use crate::domain::models::skill::RawSkillRecord;
use crate::engines::extractor;
use crate::engines::traits::{FetchEngine, FetchError, FetchRequest};
use crate::infrastructure::cache::snapshot_cache::SnapshotCache;

/// 仪表盘抓取超时
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// 技能抓取服务
///
/// 组合缓存检查、引擎抓取、表格行提取和缓存更新。
/// 进程内跨调用的唯一持久状态是缓存槽
pub struct SkillScraper {
    engine: Arc<dyn FetchEngine>,
    cache: SnapshotCache,
    settings: DashboardSettings,
}

impl SkillScraper {
    pub fn new(
        engine: Arc<dyn FetchEngine>,
        cache: SnapshotCache,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            engine,
            cache,
            settings,
        }
    }

    /// 执行一次抓取
    ///
    /// 缓存仍在TTL内时直接返回缓存载荷，不发起网络请求。
    /// 成功提取到至少一行时整体替换缓存；提取到零行
    /// （登录/跳转页的征兆）返回空列表但保留缓存；
    /// 网络错误原样上抛，缓存不动
    pub async fn scrape(&self, proxy: Option<&str>) -> Result<Vec<RawSkillRecord>, FetchError> {
        if let Some(cached) = self.cache.get_fresh(self.settings.cache_ttl_minutes).await {
            debug!("Returning {} cached dashboard rows", cached.len());
            return Ok(cached);
        }

        let request = FetchRequest {
            url: self.settings.url.clone(),
            timeout: FETCH_TIMEOUT,
            proxy: proxy.map(str::to_string),
            // The dashboard serves a self-signed certificate
            skip_tls_verification: true,
        };

        let response = self.engine.fetch(&request).await?;
        debug!(
            "Dashboard responded with status {} ({} bytes)",
            response.status_code,
            response.body.len()
        );

        let outcome = extractor::extract_skill_rows(&response.body);
        if outcome.malformed_rows > 0 {
            warn!("Skipped {} malformed dashboard rows", outcome.malformed_rows);
        }

        if outcome.records.is_empty() {
            warn!("Dashboard returned no skill rows; keeping last known payload");
            return Ok(Vec::new());
        }

        self.cache.store(outcome.records.clone()).await;
        Ok(outcome.records)
    }

    /// 最近一次成功抓取的载荷（忽略TTL）
    pub async fn last_known_good(&self) -> Option<Vec<RawSkillRecord>> {
        self.cache.peek().await
    }
}
