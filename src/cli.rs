//! Entry points shared by the `img2gradient` and `img2pal` binaries.
//!
//! Usage text, rejections and tables go to `out`; warnings go to stderr.
use anyhow::Result;
use std::io::Write;

use crate::colors;
use crate::config::TableConfig;
use crate::gradient::GradientTable;
use crate::pal::PaletteTable;

/// Usage line shared by both converters
pub fn usage(program: &str) -> String {
    format!("Usage: {program} filename.png")
}

/// Run the gradient exporter. `args` includes the program name.
pub fn run_gradient(mut args: impl Iterator<Item = String>, out: &mut impl Write) -> Result<()> {
    let program = args.next().unwrap_or_else(|| "img2gradient".to_string());

    let Some(path) = args.next() else {
        writeln!(out, "{}", usage(&program))?;
        return Ok(());
    };

    let image = colors::load_image(&path)?;

    // Rejections are reported on stdout and are not failures
    let table = match GradientTable::from_image(&image) {
        Ok(table) => table,
        Err(rejection) => {
            writeln!(out, "{rejection}")?;
            return Ok(());
        }
    };

    writeln!(out, "{}", table.render(&TableConfig::gradient()))?;
    Ok(())
}

/// Run the palette exporter. `args` includes the program name.
pub fn run_palette(mut args: impl Iterator<Item = String>, out: &mut impl Write) -> Result<()> {
    let program = args.next().unwrap_or_else(|| "img2pal".to_string());

    let Some(path) = args.next() else {
        writeln!(out, "{}", usage(&program))?;
        return Ok(());
    };

    let image = colors::load_image(&path)?;
    let table = PaletteTable::from_image(&image);
    let config = TableConfig::palette();

    if config.per_line != 0 && !config.fills_lines(table.len()) {
        eprintln!(
            "Warning: palette height {} is not a multiple of {}, the last line will be short",
            table.len(),
            config.per_line
        );
    }

    writeln!(out, "{}", table.render(&config))?;
    Ok(())
}
