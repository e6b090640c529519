use crate::domain::model::{ComparisonResult, ComparisonTable};
use crate::utils::error::{CompareError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

pub const IDENTICAL_MESSAGE: &str = "Both the selected roles have similar permissions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub comparison: &'a ComparisonResult,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn render(result: &ComparisonResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Csv => render_csv(result),
        OutputFormat::Json => render_json(result),
    }
}

/// Plain-text table with one sub-header line per module.
pub fn render_table(result: &ComparisonResult) -> String {
    let table = match result {
        ComparisonResult::Identical { .. } => return format!("{}\n", IDENTICAL_MESSAGE),
        ComparisonResult::Differences(table) => table,
    };

    let headers = [
        "Module",
        "Permission",
        table.role1.label.as_str(),
        table.role2.label.as_str(),
    ];
    let widths = column_widths(table, &headers);

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for group in table.groups() {
        for (i, row) in group.rows.iter().enumerate() {
            // 模組名稱只在群組第一列顯示
            let module = if i == 0 { group.module_name } else { "" };
            push_line(
                &mut out,
                &[
                    module,
                    row.title.as_str(),
                    yes_no(row.role1_has),
                    yes_no(row.role2_has),
                ],
                &widths,
            );
        }
    }

    out
}

fn column_widths(table: &ComparisonTable, headers: &[&str; 4]) -> [usize; 4] {
    let mut widths: [usize; 4] = std::array::from_fn(|i| headers[i].chars().count());
    for row in &table.rows {
        widths[0] = widths[0].max(row.module_name.chars().count());
        widths[1] = widths[1].max(row.title.chars().count());
    }
    widths[2] = widths[2].max(3);
    widths[3] = widths[3].max(3);
    widths
}

fn push_line(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

pub fn render_csv(result: &ComparisonResult) -> Result<String> {
    let table = match result {
        ComparisonResult::Identical { .. } => return Ok(format!("{}\n", IDENTICAL_MESSAGE)),
        ComparisonResult::Differences(table) => table,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Module",
        "Permission",
        table.role1.label.as_str(),
        table.role2.label.as_str(),
    ])?;

    for row in &table.rows {
        writer.write_record([
            row.module_name.as_str(),
            row.title.as_str(),
            yes_no(row.role1_has),
            yes_no(row.role2_has),
        ])?;
    }

    let data = writer.into_inner().map_err(|e| CompareError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| CompareError::ValidationError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn render_json(result: &ComparisonResult) -> Result<String> {
    let report = Report {
        generated_at: Utc::now(),
        comparison: result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DiffRow, RoleColumn};

    fn differences() -> ComparisonResult {
        ComparisonResult::Differences(ComparisonTable {
            role1: RoleColumn::new("editor", "Editor"),
            role2: RoleColumn::new("viewer", "Viewer"),
            rows: vec![
                DiffRow {
                    permission: "create article content".to_string(),
                    module: "node".to_string(),
                    module_name: "Node".to_string(),
                    title: "Article: Create new content".to_string(),
                    role1_has: true,
                    role2_has: false,
                },
                DiffRow {
                    permission: "delete any article content".to_string(),
                    module: "node".to_string(),
                    module_name: "Node".to_string(),
                    title: "Article: Delete any content".to_string(),
                    role1_has: true,
                    role2_has: false,
                },
                DiffRow {
                    permission: "access user profiles".to_string(),
                    module: "user".to_string(),
                    module_name: "User".to_string(),
                    title: "View user information".to_string(),
                    role1_has: false,
                    role2_has: true,
                },
            ],
        })
    }

    fn identical() -> ComparisonResult {
        ComparisonResult::Identical {
            role1: RoleColumn::new("editor", "Editor"),
            role2: RoleColumn::new("editor", "Editor"),
        }
    }

    #[test]
    fn test_table_groups_modules() {
        let out = render_table(&differences());
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("Module"));
        assert!(lines[0].contains("Editor"));
        assert!(lines[0].ends_with("Viewer"));
        assert!(lines[2].starts_with("Node"));
        // second node row has an empty module cell
        assert!(lines[3].starts_with(' '));
        assert!(lines[3].contains("Article: Delete any content"));
        assert!(lines[4].starts_with("User"));
        assert!(lines[4].contains("No"));
        assert!(lines[4].ends_with("Yes"));
    }

    #[test]
    fn test_identical_message() {
        assert_eq!(render_table(&identical()), format!("{}\n", IDENTICAL_MESSAGE));
        assert_eq!(render_csv(&identical()).unwrap(), format!("{}\n", IDENTICAL_MESSAGE));
    }

    #[test]
    fn test_csv_output() {
        let out = render_csv(&differences()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Module,Permission,Editor,Viewer");
        assert_eq!(lines[1], "Node,Article: Create new content,Yes,No");
        assert_eq!(lines[3], "User,View user information,No,Yes");
    }

    #[test]
    fn test_json_report() {
        let out = render(&differences(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert!(value["generated_at"].is_string());
        assert_eq!(value["comparison"]["outcome"], "differences");
        assert_eq!(value["comparison"]["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["comparison"]["role1"]["label"], "Editor");
    }

    #[test]
    fn test_json_identical() {
        let out = render_json(&identical()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["comparison"]["outcome"], "identical");
    }
}
