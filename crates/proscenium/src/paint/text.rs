use std::borrow::Cow;
use std::fmt;

/// Font token handed to the host's text setter.
///
/// The scene treats the name as opaque; resolving it to glyphs is the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font(Cow<'static, str>);

impl Font {
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Font {
    fn default() -> Self {
        Self(Cow::Borrowed("sans-serif"))
    }
}

impl From<&'static str> for Font {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for Font {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Horizontal anchoring of text relative to its position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text relative to its position.
///
/// `Baseline` is the host default and is only reachable through `Style::default`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
    #[default]
    Baseline,
}
