// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

use trackrs::config::settings::DashboardSettings;
use trackrs::infrastructure::cache::snapshot_cache::Clock;

/// 可手动推进的假时钟
pub struct FakeClock {
    now: Mutex<DateTime<Utc>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc::now()),
        }
    }

    pub fn advance_minutes(&self, minutes: i64) {
        let mut now = self.now.lock().unwrap();
        *now += Duration::minutes(minutes);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn dashboard_settings(url: &str, cache_ttl_minutes: u64) -> DashboardSettings {
    DashboardSettings {
        url: url.to_string(),
        cache_ttl_minutes,
        timezone: "Europe/London".to_string(),
        threshold_days: 30,
    }
}

/// 构造仪表盘风格的技能表格页面
pub fn skill_table(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(person, skill, due)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                person, skill, due
            )
        })
        .collect();
    format!(
        "<html><body><table><tbody><tr><th>Name</th><th>Skill</th><th>Due</th></tr>{}</tbody></table></body></html>",
        body
    )
}

/// 不含表格的登录页（抓取异常信号）
pub fn login_page() -> String {
    "<html><body><form><h1>Sign in</h1></form></body></html>".to_string()
}
