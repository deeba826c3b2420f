//! Timeclock Engine for Multi-Tenant Time and Attendance
//!
//! This crate provides functionality for resolving pay periods under tenant
//! settings and computing worked hours from punch streams, including punch
//! pairing, auto-lunch deduction, and the regular/overtime/doubletime split.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod sources;
