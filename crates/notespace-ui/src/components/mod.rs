//! Reusable presentational components.

mod breadcrumb;
mod button;
mod image_indicator;
mod input;

pub use breadcrumb::*;
pub use button::*;
pub use image_indicator::*;
pub use input::*;
