//! Style rules and stylesheet loading.
//!
//! A [`Style`] is one visual attribute change; a [`Stylesheet`] is an
//! ordered list of class-keyed rules loaded from TOML or JSON. Matching is
//! exact class equality; anything richer (selectors, cascading priority)
//! belongs to the style pipeline above this crate.

use glint_types::{Color, Font, Result};
use serde::Deserialize;

use crate::content::{ContentAlign, Padding};
use crate::element::Element;

/// One style rule value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Style {
    /// Content-box paint color.
    Color(Color),
    /// Content alignment.
    Align(ContentAlign),
    /// Four-sided content inset.
    Padding(Padding),
    /// Text font; only text elements consume this kind.
    Font(Font),
}

/// Styles to apply to every element with a matching class tag.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleRule {
    /// Class tag this rule matches, e.g. `"text"` or `"box"`.
    pub class: String,
    /// Styles applied in order.
    pub styles: Vec<Style>,
}

/// An ordered collection of style rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stylesheet {
    #[serde(default, rename = "rule", alias = "rules")]
    pub rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Parse a stylesheet from TOML.
    ///
    /// ```toml
    /// [[rule]]
    /// class = "text"
    /// styles = [
    ///     { kind = "font", value = "large" },
    ///     { kind = "color", value = 5 },
    /// ]
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let sheet: Self = toml::from_str(src)?;
        log::debug!("loaded stylesheet: {} rules", sheet.rules.len());
        Ok(sheet)
    }

    /// Parse a stylesheet from JSON.
    pub fn from_json_str(src: &str) -> Result<Self> {
        let sheet: Self = serde_json::from_str(src)?;
        log::debug!("loaded stylesheet: {} rules", sheet.rules.len());
        Ok(sheet)
    }

    /// Rules whose class matches `class` exactly, in sheet order.
    pub fn rules_for<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a StyleRule> {
        self.rules.iter().filter(move |r| r.class == class)
    }

    /// Apply every matching rule to `element`, in sheet order.
    ///
    /// Elements without a class tag match nothing.
    pub fn apply_to(&self, element: &mut dyn Element) {
        let Some(class) = element.common().class.clone() else {
            return;
        };
        for rule in self.rules_for(&class) {
            for style in &rule.styles {
                element.apply_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let sheet = Stylesheet::from_toml_str(
            r#"
            [[rule]]
            class = "text"
            styles = [
                { kind = "font", value = "large" },
                { kind = "color", value = 5 },
            ]

            [[rule]]
            class = "box"
            styles = [{ kind = "padding", value = { top = 1, left = 2 } }]
            "#,
        )
        .unwrap();
        assert_eq!(sheet.rules.len(), 2);
        assert_eq!(
            sheet.rules[0].styles,
            vec![Style::Font(Font::Large), Style::Color(Color(5))]
        );
        assert_eq!(
            sheet.rules[1].styles,
            vec![Style::Padding(Padding::new(1, 0, 0, 2))]
        );
    }

    #[test]
    fn json_round_trip() {
        let sheet = Stylesheet::from_json_str(
            r#"{"rules": [{"class": "box", "styles": [{"kind": "align", "value": "center"}]}]}"#,
        )
        .unwrap();
        assert_eq!(sheet.rules.len(), 1);
        assert_eq!(sheet.rules[0].styles, vec![Style::Align(ContentAlign::Center)]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Stylesheet::from_toml_str("[[rule]]\nclass = 3").is_err());
    }

    #[test]
    fn rules_for_filters_by_class() {
        let sheet = Stylesheet::from_toml_str(
            r#"
            [[rule]]
            class = "a"
            styles = [{ kind = "color", value = 1 }]

            [[rule]]
            class = "b"
            styles = [{ kind = "color", value = 2 }]

            [[rule]]
            class = "a"
            styles = [{ kind = "color", value = 3 }]
            "#,
        )
        .unwrap();
        let matched: Vec<_> = sheet.rules_for("a").collect();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[1].styles, vec![Style::Color(Color(3))]);
    }
}
