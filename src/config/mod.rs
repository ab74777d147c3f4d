//! Configuration and path management for motorlot

pub mod paths;
pub mod settings;

pub use paths::MotorlotPaths;
pub use settings::Settings;
