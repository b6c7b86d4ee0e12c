use std::collections::HashMap;

/// Resolves theme keys such as `"spacing.6"` to CSS values.
///
/// Implemented for [Theme] and for any `Fn(&str) -> Option<String>`, so a host build tool can
/// forward its own theme lookup.
pub trait ThemeLookup {
    fn theme(&self, key: &str) -> Option<String>;
}

impl<F> ThemeLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn theme(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// A spacing theme following the default utility-framework scale, where `spacing.N` is
/// `N * 0.25rem`.
///
/// Individual keys may be overridden with [Theme::with].
///
/// # Example
///
/// ```
/// use heroclass::{Theme, ThemeLookup};
///
/// let theme = Theme::default().with("spacing.6", "24px");
///
/// assert_eq!(theme.theme("spacing.5").as_deref(), Some("1.25rem"));
/// assert_eq!(theme.theme("spacing.6").as_deref(), Some("24px"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    overrides: HashMap<String, String>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }
}

impl ThemeLookup for Theme {
    fn theme(&self, key: &str) -> Option<String> {
        if let Some(value) = self.overrides.get(key) {
            return Some(value.clone());
        }

        default_spacing(key.strip_prefix("spacing.")?)
    }
}

fn default_spacing(step: &str) -> Option<String> {
    match step {
        "px" => return Some("1px".into()),
        "0" => return Some("0px".into()),
        _ => {}
    }

    // fractional steps like `0.5` and `2.5` are part of the scale too
    let step: f64 = step.parse().ok()?;
    if !step.is_finite() || step < 0.0 {
        return None;
    }

    Some(format!("{}rem", step / 4.0))
}
