use std::collections::HashMap;

/// Exam name whose sheets group Botany and Zoology under Biology.
pub const NEET_EXAM: &str = "NEET";

/// Built-in sheet name → exam name table.
pub const DEFAULT_EXAM_ALIASES: &[(&str, &str)] =
    &[("MHTCET", "CET"), ("JEE", "JEE"), ("NEET", NEET_EXAM)];

/// Resolves spreadsheet tab names to the exam names used as document keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamAliases {
    aliases: HashMap<String, String>,
}

impl Default for ExamAliases {
    fn default() -> Self {
        let aliases = DEFAULT_EXAM_ALIASES
            .iter()
            .map(|(sheet, exam)| (sheet.to_string(), exam.to_string()))
            .collect();
        Self { aliases }
    }
}

impl ExamAliases {
    /// Layers `overrides` on top of the built-in table.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.aliases.extend(overrides);
        self
    }

    /// Exam name for `sheet_name`; unknown sheets keep their own name.
    pub fn resolve<'a>(&'a self, sheet_name: &'a str) -> &'a str {
        self.aliases
            .get(sheet_name)
            .map(String::as_str)
            .unwrap_or(sheet_name)
    }
}
