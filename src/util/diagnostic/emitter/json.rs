//! JSON 诊断渲染器

use serde::Serialize;

use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::span::Position;

/// 单条诊断的 JSON 形式
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDiagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    pub rendered: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            severity: diagnostic.severity,
            code: diagnostic.code,
            message: diagnostic.message.clone(),
            rendered: diagnostic.to_string(),
            position: diagnostic.position,
        }
    }
}

/// JSON 诊断渲染器
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

impl JsonEmitter {
    pub fn new() -> Self {
        Self
    }

    /// 转换为可序列化的诊断列表
    pub fn convert<'a>(
        &self,
        diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    ) -> Vec<JsonDiagnostic> {
        diagnostics.into_iter().map(JsonDiagnostic::from).collect()
    }

    /// 渲染为 JSON 数组
    pub fn render_all<'a>(
        &self,
        diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    ) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.convert(diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::diagnostic::codes::MISSING_THEN;

    #[test]
    fn test_json_shape() {
        let diagnostics = vec![MISSING_THEN.builder().at(Position::new(1, 10)).build()];
        let json = JsonEmitter::new().render_all(&diagnostics).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["code"], "E1002");
        assert_eq!(value[0]["severity"], "error");
        assert_eq!(value[0]["message"], "Missing THEN");
        assert_eq!(value[0]["position"]["line"], 1);
        assert_eq!(value[0]["position"]["column"], 10);
    }

    #[test]
    fn test_position_omitted_when_unknown() {
        let diagnostics = vec![MISSING_THEN.builder().build()];
        let json = JsonEmitter::new().render_all(&diagnostics).unwrap();
        assert!(!json.contains("position"));
    }
}
