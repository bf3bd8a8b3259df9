use crate::colors;
use crate::config::TableConfig;
use image::DynamicImage;
use palette::Srgb;
use std::fmt;

/// Why an image can't be turned into a gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotRgb,
    NotOnePixelWide,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotRgb => write!(f, "Image must be RGB"),
            Rejection::NotOnePixelWide => write!(f, "Image must be 1px wide"),
        }
    }
}

/// Check a gradient source. The channel check runs before the width check.
pub fn check_source(image: &DynamicImage) -> Result<(), Rejection> {
    if colors::channel_count(image) != 3 {
        return Err(Rejection::NotRgb);
    }

    let (width, _) = colors::dimensions(image);
    if width != 1 {
        return Err(Rejection::NotOnePixelWide);
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    pub colors: Vec<Srgb<u8>>,
}

impl GradientTable {
    pub fn new(colors: Vec<Srgb<u8>>) -> Self {
        Self { colors }
    }

    /// Validate `image` and read one entry per row
    pub fn from_image(image: &DynamicImage) -> Result<Self, Rejection> {
        check_source(image)?;
        Ok(Self::new(colors::column_colors(image)))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries packed as 0x00RRGGBB
    pub fn packed(&self) -> Vec<u32> {
        self.colors.iter().copied().map(pack).collect()
    }

    /// Render as a C `uint32_t` initializer, without a trailing newline
    pub fn render(&self, config: &TableConfig) -> String {
        let count = self.len();
        let mut output = String::with_capacity(
            count * "0xFFFFFF, ".len()
                // wrapped lines
                + (count / config.per_line.max(1) + 1) * (config.indent.len() + 1)
                + config.name.len()
                + 32,
        );

        output.push_str(&format!(
            "uint32_t {}[{count}] = {{\n{}",
            config.name, config.indent
        ));
        for (y, packed) in self.packed().into_iter().enumerate() {
            output.push_str(&format!("0x{packed:06X}"));

            if y + 1 != count {
                output.push_str(", ");
            }
            if config.fills_lines(y + 1) {
                output.push('\n');
                output.push_str(&config.indent);
            }
        }
        output.push_str("\n};");

        output
    }
}

fn pack(color: Srgb<u8>) -> u32 {
    (color.red as u32) << 16 | (color.green as u32) << 8 | color.blue as u32
}
