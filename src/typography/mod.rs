//! Named text styles shared by every component that renders text.

mod schema;
pub use schema::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
