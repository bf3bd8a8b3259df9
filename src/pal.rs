use crate::colors;
use crate::config::TableConfig;
use image::DynamicImage;
use palette::Srgb;

/// RGB lookup table, three raw bytes per entry
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteTable {
    pub colors: Vec<Srgb<u8>>,
}

impl PaletteTable {
    pub fn new(colors: Vec<Srgb<u8>>) -> Self {
        Self { colors }
    }

    /// One entry per row, read from column 0. No shape checks.
    pub fn from_image(image: &DynamicImage) -> Self {
        Self::new(colors::column_colors(image))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Render as a C `char` initializer built from adjacent string literals,
    /// without a trailing newline
    pub fn render(&self, config: &TableConfig) -> String {
        let count = self.len();
        let mut output = String::with_capacity(
            count * r"\xFF\xFF\xFF".len()
                + (count / config.per_line.max(1) + 1) * (config.indent.len() + 3)
                + config.name.len()
                + 32,
        );

        output.push_str(&format!(
            "char {}[{count}*3] = {{\n{}\"",
            config.name, config.indent
        ));
        for (i, color) in self.colors.iter().enumerate() {
            output.push_str(&format!(
                "\\x{:02x}\\x{:02x}\\x{:02x}",
                color.red, color.green, color.blue
            ));

            if config.fills_lines(i + 1) {
                output.push_str("\"\n");
                output.push_str(&config.indent);
                output.push('"');
            }
        }
        output.push_str("\"\n};");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::tests::create_column_image;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_render_three_rows() {
        let img = create_column_image(&[(0x12, 0x34, 0x56), (0xAB, 0xCD, 0xEF), (0, 0, 0)]);
        let table = PaletteTable::from_image(&img);

        assert_eq!(
            table.render(&TableConfig::palette()),
            r#"char palette[3*3] = {
    "\x12\x34\x56\xab\xcd\xef\x00\x00\x00"
};"#
        );
    }

    #[test]
    fn test_render_wraps_after_seven_rows() {
        let rows: Vec<_> = (0..9u8).map(|i| (i, 0x10 + i, 0xF0 + i)).collect();
        let table = PaletteTable::from_image(&create_column_image(&rows));

        assert_eq!(
            table.render(&TableConfig::palette()),
            r#"char palette[9*3] = {
    "\x00\x10\xf0\x01\x11\xf1\x02\x12\xf2\x03\x13\xf3\x04\x14\xf4\x05\x15\xf5\x06\x16\xf6"
    "\x07\x17\xf7\x08\x18\xf8"
};"#
        );
    }

    #[test]
    fn test_render_exact_multiple_of_seven() {
        // A full last line still opens a new, empty literal
        let rows = vec![(0xAA, 0xBB, 0xCC); 14];
        let rendered = PaletteTable::from_image(&create_column_image(&rows))
            .render(&TableConfig::palette());

        let line = format!("    \"{}\"", r"\xaa\xbb\xcc".repeat(7));
        let expected = format!("char palette[14*3] = {{\n{line}\n{line}\n    \"\"\n}};");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_reads_only_first_column() {
        let mut img = RgbImage::from_pixel(4, 2, Rgb([0xFF, 0xFF, 0xFF]));
        img.put_pixel(0, 0, Rgb([1, 2, 3]));
        img.put_pixel(0, 1, Rgb([4, 5, 6]));
        let table = PaletteTable::from_image(&DynamicImage::ImageRgb8(img));

        assert_eq!(
            table.render(&TableConfig::palette()),
            r#"char palette[2*3] = {
    "\x01\x02\x03\x04\x05\x06"
};"#
        );
    }

    #[test]
    fn test_empty_table() {
        let table = PaletteTable::new(Vec::new());

        assert!(table.is_empty());
        assert_eq!(
            table.render(&TableConfig::palette()),
            "char palette[0*3] = {\n    \"\"\n};"
        );
    }
}
