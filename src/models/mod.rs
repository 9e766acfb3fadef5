pub mod ec_blocks;
pub mod ec_level;
pub mod version;

pub use ec_blocks::{BlockShape, ECBlockGroup, ECBlockSpec};
pub use ec_level::ECLevel;
pub use version::{MAX_DIMENSION, MIN_DIMENSION, Version};
