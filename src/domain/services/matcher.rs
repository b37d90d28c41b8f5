use std::collections::HashMap;

use chrono_tz::Tz;
use tracing::debug;

use crate::domain::models::member::Member;
use crate::domain::models::name_key::NameKey;
use crate::domain::models::skill::{ExpiringSkill, RawSkillRecord, SkillDefinition};
use crate::domain::services::expiry;

/// 技能匹配服务
///
/// 将抓取到的原始行与成员名册和技能定义连接，
/// 产出最终的到期技能列表。纯函数，不持有状态
pub struct SkillMatcher;

impl SkillMatcher {
    /// 执行匹配和到期判定
    ///
    /// 按名册顺序遍历启用的成员；未启用的技能定义和无定义的
    /// 技能行被丢弃。输出中的姓名/技能/日期均为原始显示文本
    pub fn classify(
        members: &[Member],
        skill_defs: &[SkillDefinition],
        raw_records: &[RawSkillRecord],
        threshold_days: i64,
        tz: Tz,
    ) -> Vec<ExpiringSkill> {
        let defs: HashMap<NameKey, &SkillDefinition> = skill_defs
            .iter()
            .filter(|d| d.enabled)
            .map(|d| (NameKey::new(&d.name), d))
            .collect();

        let mut output = Vec::new();

        for member in members.iter().filter(|m| m.enabled) {
            let member_key = NameKey::new(&member.name);

            for record in raw_records
                .iter()
                .filter(|r| NameKey::new(&r.person_name) == member_key)
            {
                let def = match defs.get(&NameKey::new(&record.skill_name)) {
                    Some(def) => def,
                    None => {
                        debug!(
                            "Skipping untracked skill '{}' for '{}'",
                            record.skill_name, member.name
                        );
                        continue;
                    }
                };

                // Both predicates are checked on purpose even though is_expiring
                // already covers past dates
                if expiry::is_expiring(&record.due_date_text, threshold_days, tz)
                    || expiry::is_expired(&record.due_date_text, tz)
                {
                    output.push(ExpiringSkill {
                        member: member.name.clone(),
                        skill: def.name.clone(),
                        due_date: record.due_date_text.clone(),
                        critical: def.critical,
                        url: def.form_url.clone(),
                    });
                }
            }
        }

        output
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
