//! Mock Interview - AI-assisted interview practice backend
//!
//! Generates interview questions for a job profile, scores recorded answers
//! and aggregates feedback. Every model reply is read through
//! [`domain::extraction`], which isolates and validates the JSON embedded in
//! free-form text.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use app::{AppError, InterviewApp};
