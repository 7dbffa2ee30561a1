//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure text helpers live here so state and network code can share them
//! without pulling in browser APIs.

pub mod normalize;
