// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::stream::{self, StreamExt};
use std::time::Duration;
use tracing::{debug, info, warn};

/// 代理池配置
#[derive(Debug, Clone)]
pub struct ProxyPoolConfig {
    /// 候选列表来源URL（换行分隔的host:port）
    pub source_url: String,
    /// 验证目标URL（仪表盘本身）
    pub target_url: String,
    /// 单个候选的验证超时
    pub verify_timeout: Duration,
    /// 并发验证数；1为严格顺序验证
    pub race_limit: usize,
}

/// 出站代理池
///
/// 从公共代理列表拉取候选并逐个对仪表盘做验证请求。
/// 验证结果不跨调用保留，每次调用都从新拉取的列表开始
pub struct ProxyPool {
    config: ProxyPoolConfig,
}

impl ProxyPool {
    pub fn new(config: ProxyPoolConfig) -> Self {
        Self { config }
    }

    /// 寻找一个可用代理
    ///
    /// 默认按列表顺序逐个验证，返回首个验证通过的候选，
    /// 包装为`http://host:port`。列表为空、来源不可达或全部
    /// 候选失败时返回`None`；调用方据此决定直连或放弃，
    /// `None`本身不是错误
    pub async fn find_working_proxy(&self) -> Option<String> {
        let candidates = match self.fetch_candidates().await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("Proxy source fetch failed: {}", e);
                return None;
            }
        };

        if candidates.is_empty() {
            warn!("Proxy source returned no usable candidates");
            return None;
        }

        debug!("Verifying {} proxy candidates", candidates.len());

        if self.config.race_limit > 1 {
            self.race_candidates(candidates).await
        } else {
            self.try_candidates_in_order(candidates).await
        }
    }

    /// 顺序验证，无提前取消：每个失败候选都完整消耗其超时，
    /// 最坏总延迟为 候选数 × 超时
    async fn try_candidates_in_order(&self, candidates: Vec<String>) -> Option<String> {
        for candidate in candidates {
            if self.verify(&candidate).await {
                let proxy_url = format!("http://{}", candidate);
                info!("Proxy verified: {}", proxy_url);
                return Some(proxy_url);
            }
            debug!("Proxy candidate failed verification: {}", candidate);
        }

        warn!("All proxy candidates failed verification");
        None
    }

    /// 并发赛跑验证，最多race_limit个在途；取首个成功者，
    /// 丢弃流即取消剩余在途验证
    async fn race_candidates(&self, candidates: Vec<String>) -> Option<String> {
        let mut verifications = stream::iter(candidates)
            .map(|candidate| async move {
                let ok = self.verify(&candidate).await;
                (ok, candidate)
            })
            .buffer_unordered(self.config.race_limit);

        while let Some((ok, candidate)) = verifications.next().await {
            if ok {
                let proxy_url = format!("http://{}", candidate);
                info!("Proxy verified: {}", proxy_url);
                return Some(proxy_url);
            }
            debug!("Proxy candidate failed verification: {}", candidate);
        }

        warn!("All proxy candidates failed verification");
        None
    }

    /// 拉取并整理候选列表
    ///
    /// 空行和不含`:`的行被丢弃
    async fn fetch_candidates(&self) -> Result<Vec<String>, reqwest::Error> {
        let body = reqwest::get(&self.config.source_url)
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && line.contains(':'))
            .map(str::to_string)
            .collect())
    }

    /// 通过候选代理向仪表盘发起一次短验证请求
    ///
    /// 任何错误（包括TLS、连接、超时）都算验证失败
    async fn verify(&self, candidate: &str) -> bool {
        let proxy = match reqwest::Proxy::all(format!("http://{}", candidate)) {
            Ok(proxy) => proxy,
            Err(_) => return false,
        };

        let client = match reqwest::Client::builder()
            .proxy(proxy)
            .timeout(self.config.verify_timeout)
            .danger_accept_invalid_certs(true)
            .build()
        {
            Ok(client) => client,
            Err(_) => return false,
        };

        client.get(&self.config.target_url).send().await.is_ok()
    }
}

#[cfg(test)]
#[path = "pool_test.rs"]
mod tests;
