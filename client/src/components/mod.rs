//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns the conversation state and the network exchange;
//! `brand_mark` is purely presentational.

pub mod brand_mark;
pub mod chat_widget;
