mod color;
mod naming;
mod palette;
mod parse;
mod shades;

pub use color::*;
pub use naming::*;
pub use palette::*;
pub use parse::*;
pub use shades::*;
