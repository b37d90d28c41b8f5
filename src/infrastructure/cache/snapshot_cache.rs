// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::models::skill::RawSkillRecord;

/// 时钟特质
///
/// 缓存通过注入的时钟取当前时刻，测试中可用假时钟确定性推进
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 系统时钟
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CacheSlot {
    payload: Vec<RawSkillRecord>,
    captured_at: DateTime<Utc>,
}

/// 单槽快照缓存
///
/// 整个进程对一个仪表盘URL只保留一份载荷。成功的抓取整体替换槽位；
/// 失败或空结果从不触碰槽位。读写不在同一把锁下进行，
/// 抓取进行中的并发读者可能看到旧数据，对周期性刷新的软快照无害
pub struct SnapshotCache {
    slot: RwLock<Option<CacheSlot>>,
    clock: Arc<dyn Clock>,
}

impl SnapshotCache {
    /// 创建新的缓存实例
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            clock,
        }
    }

    /// 读取仍在TTL内的载荷
    ///
    /// `ttl_minutes == 0` 表示禁用缓存，始终返回`None`
    pub async fn get_fresh(&self, ttl_minutes: u64) -> Option<Vec<RawSkillRecord>> {
        if ttl_minutes == 0 {
            return None;
        }

        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(entry)
                if self.clock.now() - entry.captured_at
                    < Duration::minutes(ttl_minutes as i64) =>
            {
                Some(entry.payload.clone())
            }
            _ => None,
        }
    }

    /// 整体替换槽位并重置时间戳
    pub async fn store(&self, payload: Vec<RawSkillRecord>) {
        debug!("Caching {} dashboard rows", payload.len());
        let mut slot = self.slot.write().await;
        *slot = Some(CacheSlot {
            payload,
            captured_at: self.clock.now(),
        });
    }

    /// 最近一次成功载荷，忽略TTL
    pub async fn peek(&self) -> Option<Vec<RawSkillRecord>> {
        self.slot.read().await.as_ref().map(|e| e.payload.clone())
    }
}
