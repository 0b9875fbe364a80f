//! Placeholder substitution for auxiliary file contents.

use std::collections::BTreeMap;

/// Context for rendering `{{VARIABLE}}` placeholders.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "edge-platform" | User input |
/// | `PROJECT_NAME_SNAKE` | "edge_platform" | Computed |
/// | `PROJECT_NAME_KEBAB` | "edge-platform" | Computed |
/// | `PROJECT_NAME_PASCAL` | "EdgePlatform" | Computed |
///
/// Nothing time- or environment-dependent is exposed; rendering the same
/// input twice must give the same bytes.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut variables = BTreeMap::new();

        variables.insert("PROJECT_NAME_SNAKE", to_snake_case(&name));
        variables.insert("PROJECT_NAME_KEBAB", to_kebab_case(&name));
        variables.insert("PROJECT_NAME_PASCAL", to_pascal_case(&name));
        variables.insert("PROJECT_NAME", name);

        Self { variables }
    }

    /// Replace every `{{KEY}}` with its value in a single left-to-right
    /// pass. Substituted values are never scanned again.
    ///
    /// Unknown placeholders stay as literal text.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            match after.find("}}") {
                Some(close) => match self.variables.get(&after[..close]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[close + 2..];
                    }
                    None => {
                        out.push_str("{{");
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn words(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
        .collect()
}

fn to_snake_case(s: &str) -> String {
    words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
