//! Structured attribute selectors.
//!
//! Only the attribute conventions PageKit relies on are expressible, which keeps
//! the in-memory matcher and the CSS rendering in lockstep.

use serde::{Deserialize, Serialize};

/// An attribute query over elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selector {
    /// `[name="value"]`
    AttrEquals { name: String, value: String },
    /// `[name]`
    HasAttr { name: String },
    /// Matches when any alternative matches. An empty list matches nothing.
    Any { of: Vec<Selector> },
}

impl Selector {
    pub fn attr_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Selector::AttrEquals {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn has_attr(name: impl Into<String>) -> Self {
        Selector::HasAttr { name: name.into() }
    }

    pub fn any(of: impl IntoIterator<Item = Selector>) -> Self {
        Selector::Any {
            of: of.into_iter().collect(),
        }
    }

    /// Whether the selector can match anything at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Selector::Any { of } => of.iter().all(Selector::is_empty),
            _ => false,
        }
    }

    /// Evaluate against an element's attribute list.
    pub fn matches(&self, attributes: &[(String, String)]) -> bool {
        match self {
            Selector::AttrEquals { name, value } => attributes
                .iter()
                .any(|(n, v)| n == name && v == value),
            Selector::HasAttr { name } => attributes.iter().any(|(n, _)| n == name),
            Selector::Any { of } => of.iter().any(|s| s.matches(attributes)),
        }
    }

    /// Render as a CSS selector list for `querySelectorAll`.
    pub fn to_css(&self) -> String {
        match self {
            Selector::AttrEquals { name, value } => {
                format!("[{}=\"{}\"]", name, escape_css_string(value))
            }
            Selector::HasAttr { name } => format!("[{}]", name),
            Selector::Any { of } => of
                .iter()
                .filter(|s| !s.is_empty())
                .map(Selector::to_css)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
