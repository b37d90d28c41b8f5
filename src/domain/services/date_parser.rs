use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// 日/月/年模式，分隔符为`/`或`-`，年份2位或4位
static DMY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4}|\d{2})\b").expect("valid date pattern")
});

/// 备用的区域无关日期格式
const FALLBACK_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%d %b %Y", "%B %d, %Y", "%b %d, %Y"];

/// 解析仪表盘中的到期日期文本
///
/// 文本来源不受控，格式不一致。依次尝试：
/// 1. 含"expired"字样的文本返回固定的远过去哨兵日期（恒为已过期）
/// 2. 日/月/年数字模式，两位年份按2000年代处理；无效的组件组合
///    （如2月31日）直接落空到下一策略
/// 3. 一组区域无关的格式串
///
/// 全部失败返回`None`，调用方须将其视为"无法判定"而不是错误
pub fn parse_due_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();

    if trimmed.to_lowercase().contains("expired") {
        return NaiveDate::from_ymd_opt(1900, 1, 1);
    }

    if let Some(caps) = DMY_PATTERN.captures(trimmed) {
        // Captures are all-digit by construction, parse cannot fail
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let mut year: i32 = caps[3].parse().ok()?;
        if caps[3].len() == 2 {
            year += 2000;
        }
        // from_ymd_opt rejects impossible component combinations
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    for format in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}
