//! Networking modules for the authentication HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the requests and mirrors outcomes to callers; `types`
//! defines the wire schema.

pub mod api;
pub mod types;
