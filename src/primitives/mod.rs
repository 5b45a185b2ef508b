mod focus_ring;
pub use focus_ring::*;

mod overlay;
pub use overlay::*;

mod press_state;
pub use press_state::*;

mod value_store;
pub use value_store::*;
