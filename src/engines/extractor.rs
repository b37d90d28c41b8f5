use scraper::{Html, Selector};

use crate::domain::models::skill::RawSkillRecord;

/// 提取结果
///
/// 记录列表连同被跳过的畸形行计数，供调用方记录警告
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub records: Vec<RawSkillRecord>,
    pub malformed_rows: usize,
}

/// 从仪表盘HTML中提取技能行
///
/// 遍历所有`<tbody>`的`<tr>`子行，按文档顺序收集每个`<td>`的文本。
/// 单元格数≥3的行取前三格作为（人名、技能、到期日期）；
/// 1-2格的行计为畸形并跳过；0格的行（表头、占位）静默忽略
pub fn extract_skill_rows(html: &str) -> ExtractionOutcome {
    let mut outcome = ExtractionOutcome::default();

    let (tbody_sel, row_sel, cell_sel) = match (
        Selector::parse("tbody"),
        Selector::parse("tr"),
        Selector::parse("td"),
    ) {
        (Ok(t), Ok(r), Ok(c)) => (t, r, c),
        // Static selectors; parse failure cannot happen at runtime
        _ => return outcome,
    };

    let document = Html::parse_document(html);

    for tbody in document.select(&tbody_sel) {
        for row in tbody.select(&row_sel) {
            let cells: Vec<String> = row
                .select(&cell_sel)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();

            match cells.len() {
                0 => {}
                1 | 2 => outcome.malformed_rows += 1,
                _ => outcome.records.push(RawSkillRecord {
                    person_name: cells[0].clone(),
                    skill_name: cells[1].clone(),
                    due_date_text: cells[2].clone(),
                }),
            }
        }
    }

    outcome
}
