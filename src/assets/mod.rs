mod provider;
pub use provider::*;

mod icons;
pub use icons::*;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        mod mosaic_assets;
        pub use mosaic_assets::*;
    }
);
