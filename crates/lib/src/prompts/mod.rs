//! # Prompt Template Modules
//!
//! This module organizes the prompt templates sent to the text-generation
//! provider.

pub mod questions;
