//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `index` owns the navigation shell and mounts exactly one of the top-level
//! views (`dashboard`, `issues`). Views delegate rendering details to
//! `components`.

pub mod dashboard;
pub mod index;
pub mod issues;
