//! Writing finished packages to disk.

pub mod package;

pub use package::PackageWriter;
