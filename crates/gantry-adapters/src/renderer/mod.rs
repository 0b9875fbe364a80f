//! Component renderers.

mod cargo;

pub use cargo::{CargoRenderer, package_name};
