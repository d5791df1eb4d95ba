//! Leave Entitlement Engine
//!
//! This crate computes leave day counts and end dates, validates leave
//! requests, and assembles submission payloads for ordinary leave and for
//! statutory Philippine maternity (RA 11210) and paternity (RA 8187) leave.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
