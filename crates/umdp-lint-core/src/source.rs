//! Source unit types: the in-memory representation of one file under check.

/// Language of a source unit, used by callers to select the applicable
/// rule tables. The core never auto-detects language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Free-form Fortran source (`.f90` / `.F90`).
    Fortran,
    /// C source or header (`.c` / `.h`).
    C,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fortran => write!(f, "fortran"),
            Self::C => write!(f, "c"),
        }
    }
}

/// An ordered, immutable sequence of text lines belonging to one file.
///
/// Lines carry no trailing newline. The unit is owned by the caller and
/// never mutated by any rule; construction is the only place content is
/// decided. Whether the original buffer ended with a final newline is
/// captured separately because the line split discards it and the C
/// final-newline rule needs it.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    kind: UnitKind,
    lines: Vec<String>,
    has_final_newline: bool,
}

impl SourceUnit {
    /// Creates a unit from pre-split lines.
    ///
    /// The final newline is assumed present; use [`Self::with_final_newline`]
    /// to override when the information is known.
    #[must_use]
    pub fn new(kind: UnitKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            lines,
            has_final_newline: true,
        }
    }

    /// Creates a unit by splitting a full text buffer into lines.
    ///
    /// Records whether the buffer ended with a newline.
    #[must_use]
    pub fn from_text(kind: UnitKind, text: &str) -> Self {
        let has_final_newline = text.is_empty() || text.ends_with('\n');
        let lines = text.lines().map(str::to_owned).collect();
        Self {
            kind,
            lines,
            has_final_newline,
        }
    }

    /// Overrides the final-newline flag.
    #[must_use]
    pub fn with_final_newline(mut self, present: bool) -> Self {
        self.has_final_newline = present;
        self
    }

    /// Returns the language of this unit.
    #[must_use]
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the lines of this unit in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns true when the unit contains no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the original buffer ended with a newline.
    #[must_use]
    pub fn has_final_newline(&self) -> bool {
        self.has_final_newline
    }

    /// Iterates over the lines as `&str`.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
