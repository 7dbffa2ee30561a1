//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data with update methods; components wrap them in
//! signals and provide them through context.

pub mod chat;
