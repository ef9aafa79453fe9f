//! Consolidated test utilities and helpers for the cable modem scraper.
//!
//! This module provides a centralized location for test fixtures, page
//! builders and mock implementations used throughout the codebase.

#![cfg(test)]

pub mod fixtures;
pub mod html;
