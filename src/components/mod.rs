mod avatar;
pub use avatar::*;

mod button;
pub use button::*;

mod checkbox;
pub use checkbox::*;

mod dropdown;
pub use dropdown::*;

mod field;
pub use field::{FieldState, FieldStyle, FieldVariant};

mod icon;
pub use icon::*;

pub mod menu;

mod popover;
pub use popover::*;

pub mod select;
pub use select::{Select, SelectError};

mod slider;
pub use slider::*;

mod switch;
pub use switch::*;

mod text;
pub use text::*;

mod toast;
pub use toast::*;
