//! CanvasLens - Quality scoring and fit analysis for strategy canvases
//!
//! This crate scores Osterwalder Value Proposition and Business Model
//! Canvases against structural quality criteria, classifies canvas fit,
//! and generates prioritized improvement recommendations. The analysis
//! core is pure and deterministic; the HTTP layer exposes it as a REST
//! API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
