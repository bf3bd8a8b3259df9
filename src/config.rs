const DEFAULT_PER_LINE: usize = 7;
const DEFAULT_INDENT: &str = "    ";

/// Layout of a generated C table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub name: String,
    pub per_line: usize, // entries (gradient) or pixel rows (palette) per source line
    pub indent: String,
}

impl TableConfig {
    pub fn gradient() -> Self {
        Self::named("gradient")
    }

    pub fn palette() -> Self {
        Self::named("palette")
    }

    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            per_line: DEFAULT_PER_LINE,
            indent: DEFAULT_INDENT.to_string(),
        }
    }

    /// True when `count` entries fill the last line exactly
    pub fn fills_lines(&self, count: usize) -> bool {
        self.per_line != 0 && count % self.per_line == 0
    }
}
