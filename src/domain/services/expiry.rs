use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::domain::services::date_parser;

/// 配置时区下的"今天"
///
/// 当前时刻先换算到配置时区再截断为日历日期，
/// 判定结果与宿主机时区无关
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// 判断记录是否已过期
///
/// 无法解析的文本返回false（静默跳过，不抛错）
pub fn is_expired(due_date_text: &str, tz: Tz) -> bool {
    is_expired_on(due_date_text, today_in(tz))
}

/// 判断记录是否即将到期
///
/// 边界日期（今天+threshold_days）含在内，过去日期也含在内；
/// 无法解析的文本返回false
pub fn is_expiring(due_date_text: &str, threshold_days: i64, tz: Tz) -> bool {
    is_expiring_on(due_date_text, threshold_days, today_in(tz))
}

pub(crate) fn is_expired_on(due_date_text: &str, today: NaiveDate) -> bool {
    match date_parser::parse_due_date(due_date_text) {
        Some(date) => date < today,
        None => false,
    }
}

pub(crate) fn is_expiring_on(due_date_text: &str, threshold_days: i64, today: NaiveDate) -> bool {
    match date_parser::parse_due_date(due_date_text) {
        Some(date) => date <= today + Duration::days(threshold_days),
        None => false,
    }
}
