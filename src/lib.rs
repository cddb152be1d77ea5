//! AIM Config Library
//!
//! Shared constants and velocity lookup tables for the intersection
//! management simulator.

pub mod config;
