use serde::{Deserialize, Serialize};

/// 联系渠道
///
/// 通知投递由外部协作方负责，这些字段只随输出透传
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactChannels {
    /// 电子邮件地址
    #[serde(default)]
    pub email: Option<String>,
    /// WhatsApp号码
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// 被跟踪的成员
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// 成员姓名，须与仪表盘行中的人名对应
    pub name: String,
    /// 联系渠道
    #[serde(default)]
    pub contact: ContactChannels,
    /// 是否启用跟踪
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}
