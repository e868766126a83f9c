use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// The tool the shell is currently showing.
///
/// Closed on purpose: anything that is not one of these four values cannot be
/// represented, so dispatch over it is an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Chatbot,
    Image,
    Complex,
    Formula,
}

/// Text and glyph shown on a navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLabel {
    pub icon: &'static str,
    pub full: &'static str,
    pub short: &'static str,
}

impl NavLabel {
    /// Label text for the given layout.
    pub fn text(&self, compact: bool) -> &'static str {
        if compact { self.short } else { self.full }
    }
}

impl Mode {
    /// Every mode, in navigation bar order.
    pub const ALL: [Mode; 4] = [Mode::Chatbot, Mode::Image, Mode::Complex, Mode::Formula];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Chatbot => "chatbot",
            Self::Image => "image",
            Self::Complex => "complex",
            Self::Formula => "formula",
        }
    }

    pub fn from_tag(tag: &str) -> ShellResult<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.tag() == tag)
            .ok_or_else(|| ShellError::UnknownMode(tag.to_owned()))
    }

    pub fn label(self) -> NavLabel {
        match self {
            Self::Chatbot => NavLabel {
                icon: "💬",
                full: "AI Chat Tutor",
                short: "Chat",
            },
            Self::Image => NavLabel {
                icon: "🖼",
                full: "Image Problem Solver",
                short: "Image",
            },
            Self::Complex => NavLabel {
                icon: "💡",
                full: "Complex Query Mode",
                short: "Complex",
            },
            Self::Formula => NavLabel {
                icon: "∑",
                full: "Formula Sheets",
                short: "Formulas",
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mode {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back() {
        for mode in Mode::ALL {
            assert_eq!(mode.tag().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = Mode::from_tag("Chatbot").unwrap_err();
        assert!(matches!(err, ShellError::UnknownMode(tag) if tag == "Chatbot"));
    }

    #[test]
    fn serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Mode::Formula).unwrap(), "\"formula\"");
        let mode: Mode = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(mode, Mode::Image);
    }

    #[test]
    fn compact_label_is_short() {
        let label = Mode::Formula.label();
        assert_eq!(label.text(true), "Formulas");
        assert_eq!(label.text(false), "Formula Sheets");
    }
}
