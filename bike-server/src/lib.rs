//! Bike-share redistribution planning server.
//!
//! Tracks station occupancy and answers: "which stations are running out
//! of bikes, and where should the bikes come from?" For every low-stock
//! station it ranks nearby surplus stations ("donors") by great-circle
//! distance and attaches an estimated transfer route and duration from an
//! external routing service.

pub mod cache;
pub mod domain;
pub mod planner;
pub mod routing;
pub mod snapshot;
pub mod web;
