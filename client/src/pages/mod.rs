//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages only lay out components; state lives in the components themselves.

pub mod home;
