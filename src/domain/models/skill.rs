use serde::{Deserialize, Serialize};

/// 技能定义
///
/// 名册中被跟踪的一项能力记录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinition {
    /// 技能名称，须与仪表盘行中的技能列对应
    pub name: String,
    /// 是否关键技能
    #[serde(default)]
    pub critical: bool,
    /// 续期表单URL
    #[serde(default)]
    pub form_url: String,
    /// 是否启用跟踪
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// 原始技能行
///
/// 从仪表盘表格一行的前三个单元格中逐字提取的文本，
/// 除提取顺序外没有任何身份标识
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSkillRecord {
    pub person_name: String,
    pub skill_name: String,
    pub due_date_text: String,
}

/// 到期技能记录
///
/// 匹配到技能定义并被判定为即将到期/已到期后的输出行，
/// 每次匹配调用重新派生，从不存储
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiringSkill {
    /// 成员姓名（名册中的显示文本）
    pub member: String,
    /// 技能名称（技能定义中的显示文本）
    pub skill: String,
    /// 到期日期原始文本
    pub due_date: String,
    /// 是否关键技能
    pub critical: bool,
    /// 续期表单URL
    pub url: String,
}
