use std::collections::HashMap;

use crate::domain::naming::EntityName;

/// Context for template rendering.
///
/// A value object holding every variable a template may reference. Built once
/// per generation request; `with_variable` returns a new context.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `TYPE_NAME` | "UserProfile" | Entity type form |
/// | `FILE_NAME` | "user_profile" | Entity file form |
/// | `PACKAGE_NAME` | "demo_app" | `pubspec.yaml` |
///
/// Selection adds `STATE_DIR` and `STATE_IMPORTS` for screens.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(name: &EntityName, package_name: impl Into<String>) -> Self {
        let mut vars = HashMap::new();
        vars.insert("TYPE_NAME".to_string(), name.type_form().to_string());
        vars.insert("FILE_NAME".to_string(), name.file_form().to_string());
        vars.insert("PACKAGE_NAME".to_string(), package_name.into());

        Self { variables: vars }
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// Unknown placeholders are left untouched; see [`unresolved_placeholders`].
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

/// Names of `{{VARIABLE}}` placeholders still present in `text`.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else { break };
        let candidate = &after[..end];
        if !candidate.is_empty()
            && candidate
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_')
        {
            found.push(candidate.to_string());
        }
        rest = &after[end + 2..];
    }

    found
}
