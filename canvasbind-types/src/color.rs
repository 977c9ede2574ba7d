//! Color values as reported by the host.
//!
//! A color is either a raw CSS color string or a reference to a named color
//! style carrying a light and an optional dark variant. Both collection
//! color fields and frame backgrounds use this shape.

use serde::{Deserialize, Serialize};

/// A named color style defined in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub light: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

impl ColorStyle {
    pub fn new(name: impl Into<String>, light: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            light: light.into(),
            dark: None,
        }
    }

    /// Sets the dark-mode variant.
    #[must_use]
    pub fn with_dark(mut self, dark: impl Into<String>) -> Self {
        self.dark = Some(dark.into());
        self
    }
}

/// Either a plain color string or a named color style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Style(ColorStyle),
    Plain(String),
}

impl ColorValue {
    /// The color to display: the light variant of a style, or the plain string.
    pub fn light(&self) -> &str {
        match self {
            Self::Style(style) => &style.light,
            Self::Plain(color) => color,
        }
    }

    /// Name of the color style, if this color is a style reference.
    pub fn style_name(&self) -> Option<&str> {
        match self {
            Self::Style(style) => Some(&style.name),
            Self::Plain(_) => None,
        }
    }

    /// True if this is a style whose name equals `name`.
    pub fn is_style_named(&self, name: &str) -> bool {
        self.style_name() == Some(name)
    }
}

impl From<&str> for ColorValue {
    fn from(color: &str) -> Self {
        Self::Plain(color.to_owned())
    }
}

impl From<ColorStyle> for ColorValue {
    fn from(style: ColorStyle) -> Self {
        Self::Style(style)
    }
}
