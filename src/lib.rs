//! Dinner Jury - Group Dining Decision Engine
//!
//! This crate helps a group pick a restaurant by sequential unanimous
//! voting: select who is going, filter restaurants by cuisine, then
//! accept or reject candidates one diner at a time until everyone
//! agrees on one place or the candidates run out.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
