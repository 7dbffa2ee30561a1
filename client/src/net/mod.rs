//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` encodes and decodes bodies, and
//! `transport` performs the HTTP round trip.

pub mod api;
pub mod transport;
pub mod types;
