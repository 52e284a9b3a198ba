//! Named icon glyphs.

/// A named icon glyph shown inside the switch track.
///
/// Purely descriptive: the host shell decides how to draw it (glyph font,
/// SVG lookup by name, plain text). The codepoint gives text-only shells a
/// reasonable rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    name: String,
    codepoint: char,
}

impl Glyph {
    /// Create a glyph with a symbolic name and a fallback codepoint.
    pub fn new(name: impl Into<String>, codepoint: char) -> Self {
        Self {
            name: name.into(),
            codepoint,
        }
    }

    /// The symbolic icon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fallback codepoint.
    pub fn codepoint(&self) -> char {
        self.codepoint
    }

    /// The sun glyph used by light/dark demos.
    pub fn sun() -> Self {
        Self::new("sun", '\u{2600}')
    }

    /// The moon glyph used by light/dark demos.
    pub fn moon() -> Self {
        Self::new("moon", '\u{263E}')
    }
}
