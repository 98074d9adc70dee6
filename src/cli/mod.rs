// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Command implementations for the `steganos` binary.
//!
//! Each subcommand is a plain function taking paths and options and returning
//! a result for `main` to print. All failures propagate as [`StegoError`]
//! (carrier I/O failures are wrapped), so the binary has a single error path.

pub mod decode;
pub mod encode;

pub use decode::*;
pub use encode::*;
