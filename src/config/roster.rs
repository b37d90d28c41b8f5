// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::domain::models::member::Member;
use crate::domain::models::skill::SkillDefinition;

/// 人员名册
///
/// 成员列表和技能定义列表，由外部维护的YAML文件提供。
/// 本核心不负责其持久化
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub skills: Vec<SkillDefinition>,
}

/// 从YAML文件加载名册
pub fn load_roster(path: &Path) -> Result<Roster> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster file {}", path.display()))?;
    let roster: Roster = serde_yaml::from_str(&raw)
        .with_context(|| format!("parsing roster file {}", path.display()))?;

    info!(
        "Loaded {} member(s) and {} skill definition(s) from {}",
        roster.members.len(),
        roster.skills.len(),
        path.display()
    );
    Ok(roster)
}
