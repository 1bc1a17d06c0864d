pub mod cursor;
pub mod magnet;
pub mod plugin;
pub mod setup;
pub mod surface;
