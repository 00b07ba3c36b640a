//! # Driver Test Suite
//!
//! Tests for the `tides` binary: argument handling and date parsing in
//! [`crate::cli`], and end-to-end predictions the way the driver makes them.

mod cli_tests;
