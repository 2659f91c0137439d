mod assets;
pub use assets::*;

mod icons;
pub use icons::*;

use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod folio_assets;
        pub use folio_assets::*;
    }
);
