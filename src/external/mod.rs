//! External process integration
//!
//! Shell-outs to package managers. All invocations are blocking; the pipeline
//! is strictly sequential by design so failure reports stay unambiguous.

mod package_managers;

pub use package_managers::{PackageManager, detect_package_manager};
