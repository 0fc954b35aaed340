//! Output formatting

use serde_json::{Map, Value};

/// Collects a command result and prints it as text or as a JSON object
pub struct Output {
    json_mode: bool,
    fields: Map<String, Value>,
    lines: Vec<String>,
}

impl Output {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            fields: Map::new(),
            lines: Vec::new(),
        }
    }

    /// Add a field to the JSON object
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Add a line to the text rendering
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Render without printing
    pub fn render(&self) -> String {
        if self.json_mode {
            serde_json::to_string_pretty(&self.fields).unwrap_or_default()
        } else {
            self.lines.join("\n")
        }
    }

    pub fn print(self) {
        let rendered = self.render();
        if !rendered.is_empty() {
            println!("{rendered}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_mode_prints_lines() {
        let out = Output::new(false)
            .field("selector", "70a08231")
            .line("70a08231")
            .line("balanceOf(address)");
        assert_eq!(out.render(), "70a08231\nbalanceOf(address)");
    }

    #[test]
    fn test_json_mode_prints_fields() {
        let out = Output::new(true)
            .field("selector", "70a08231")
            .field("inputs", 1u64)
            .line("ignored");
        let parsed: Value = serde_json::from_str(&out.render()).unwrap();
        assert_eq!(parsed["selector"], "70a08231");
        assert_eq!(parsed["inputs"], 1);
    }
}
