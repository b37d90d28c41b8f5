/// 名称匹配键
///
/// 抓取文本与名册/技能配置之间的连接身份。`raw`保留原始显示文本，
/// `key`是修剪并小写化后的匹配键；所有连接都通过`key`进行，
/// 输出始终使用`raw`。
#[derive(Debug, Clone)]
pub struct NameKey {
    raw: String,
    key: String,
}

impl NameKey {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            key: raw.trim().to_lowercase(),
        }
    }

    /// 原始显示文本
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 规范化匹配键
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl From<&str> for NameKey {
    fn from(raw: &str) -> Self {
        NameKey::new(raw)
    }
}

impl PartialEq for NameKey {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for NameKey {}

impl std::hash::Hash for NameKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
