mod colors;
pub use colors::*;

mod element;
pub use element::*;

mod element_id;
pub use element_id::*;

mod squircle;
pub use squircle::*;

mod text;
pub use text::*;

mod transitions;
pub use transitions::*;
