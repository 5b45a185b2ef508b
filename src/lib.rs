pub mod primitives;

pub mod extensions;

pub mod components;

pub mod theme;

pub mod typography;

pub mod config;

mod utils;
pub use utils::{ElementIdExt, PositionalParentElement, RgbaExt, rgb_a};

mod assets;
pub use assets::*;

mod init;
pub use init::*;

pub use gpui_mosaic_primitives;
