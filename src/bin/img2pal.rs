//! Convert an RGB PNG into a `char` palette table for aptdec.
use anyhow::Result;

fn main() -> Result<()> {
    aptdec_tables::cli::run_palette(std::env::args(), &mut std::io::stdout().lock())
}
