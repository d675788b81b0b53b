//! Theme for the Notespace shell.

mod colors;
mod styles;

#[allow(unused_imports)]
pub use colors::*;
pub use styles::GLOBAL_STYLES;
