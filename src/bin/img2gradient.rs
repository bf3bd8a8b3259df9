//! Convert a 1px wide RGB PNG into a `uint32_t` gradient table for aptdec.
use anyhow::Result;

fn main() -> Result<()> {
    aptdec_tables::cli::run_gradient(std::env::args(), &mut std::io::stdout().lock())
}
