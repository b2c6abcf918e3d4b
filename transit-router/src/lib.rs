//! Multi-line rail route finder.
//!
//! Answers: "given my boarding line and station and my destination line
//! and station, which lines do I ride and where do I change?"

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
