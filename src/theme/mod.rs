//! Theme system providing the color palette, spacing, radii and shadows.
//!
//! The built-in theme lives in `themes/default.json`. Custom themes are
//! partial JSON objects deep-merged over it with [`Theme::create`].

mod schema;
pub use schema::*;

pub(crate) mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
