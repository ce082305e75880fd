//! Core domain logic for the terminal walkthrough.
//!
//! This module contains the data models and stateful services that drive the
//! guide, independent of the terminal backend and of configuration concerns.

pub mod models;
pub mod services;
