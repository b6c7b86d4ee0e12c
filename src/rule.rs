use crate::icon::IconEntry;
use crate::theme::ThemeLookup;
use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt::Write;
use std::ops::Index;

/// Everything outside the `encodeURIComponent` unreserved set is escaped.
///
/// `'` is escaped as well: the URI ends up inside a single-quoted `url('…')`. This makes the
/// output differ from plain `encodeURIComponent`, which leaves `'` as is.
const DATA_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Turns SVG markup into an inline `data:` URI, dropping all line breaks first.
pub fn svg_data_uri(svg: &str) -> String {
    let svg = svg.replace(['\r', '\n'], "");

    format!(
        "data:image/svg+xml;utf8,{}",
        utf8_percent_encode(&svg, DATA_URI)
    )
}

/// An ordered list of CSS declarations, `property -> value`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DeclarationBlock {
    pub declarations: IndexMap<String, String>,
}

impl DeclarationBlock {
    /// The declaration block for one icon, given the icon's SVG source.
    ///
    /// If `theme` doesn't know the icon's size token, `width` and `height` are left out.
    pub fn for_icon<T>(entry: &IconEntry, svg: &str, theme: &T) -> Self
    where
        T: ThemeLookup + ?Sized,
    {
        let property = entry.custom_property();
        let mask = format!("var({property})");

        let mut block = DeclarationBlock::default();
        block.push(&property, format!("url('{}')", svg_data_uri(svg)));
        block.push("-webkit-mask", mask.clone());
        block.push("mask", mask);
        block.push("mask-repeat", "no-repeat");
        block.push("background-color", "currentColor");
        block.push("vertical-align", "middle");
        block.push("display", "inline-block");

        let key = entry.size.theme_key();
        match theme.theme(key) {
            Some(size) => {
                block.push("width", size.clone());
                block.push("height", size);
            }
            None => {
                #[cfg(feature = "log")]
                log::warn!("theme has no value for `{key}`, {} is left unsized", entry.name);
            }
        }

        block
    }

    pub fn push(&mut self, property: &str, value: impl Into<String>) {
        self.declarations.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }
}

/// Generated utility rules, keyed by class name (`hero-home`), in discovery order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RuleSet {
    pub rules: IndexMap<String, DeclarationBlock>,
}

impl RuleSet {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, class_name: &str) -> Option<&DeclarationBlock> {
        self.rules.get(class_name)
    }

    /// Renders every rule as a class selector, in order.
    ///
    /// ```
    /// use heroclass::{DeclarationBlock, RuleSet};
    ///
    /// let mut block = DeclarationBlock::default();
    /// block.push("display", "inline-block");
    ///
    /// let mut rules = RuleSet::default();
    /// rules.rules.insert("hero-home".into(), block);
    ///
    /// assert_eq!(rules.to_css(), ".hero-home {\n  display: inline-block;\n}\n");
    /// ```
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for (index, (class_name, block)) in self.rules.iter().enumerate() {
            if index > 0 {
                css.push('\n');
            }

            // writing into a String cannot fail
            let _ = writeln!(css, ".{class_name} {{");
            for (property, value) in &block.declarations {
                let _ = writeln!(css, "  {property}: {value};");
            }
            css.push_str("}\n");
        }

        css
    }
}

impl Index<&str> for RuleSet {
    type Output = DeclarationBlock;

    fn index(&self, class_name: &str) -> &DeclarationBlock {
        &self.rules[class_name]
    }
}
