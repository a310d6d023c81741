//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-facing pieces: configuration on disk and the
//! HTTP backend.

pub mod app_config;
pub mod http;
