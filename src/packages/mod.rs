//! # Package installation
//!
//! [`PackageManager`] owns the backend selected for this host and drives it
//! through a [`CommandRunner`](crate::traits::CommandRunner):
//!
//! - `install_all()` - resolve and install a list of package specs
//! - `update()` - refresh the package index
//! - `upgrade()` - upgrade installed packages
//! - `bootstrap()` - install the package manager itself
//!
//! Install requires the backend's install command; the others treat a
//! missing command as nothing to do.

pub mod manager;

pub use manager::PackageManager;
