pub mod cli;
pub mod colors;
pub mod config;
pub mod gradient;
pub mod pal;
