// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

//! Channel selection policy.
//!
//! The codec rewrites exactly one channel per visited pixel and leaves the
//! other three untouched. Which channel carries the message is a protocol
//! parameter, not a hard-coded constant: encoder and decoder must agree on
//! it the same way they agree on the visiting order. The default is red.

use core::fmt;
use std::str::FromStr;

/// The pixel channel that carries message bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    A,
    #[default]
    R,
    G,
    B,
}

impl Channel {
    /// Index of this channel within the buffer's A, R, G, B sample layout.
    pub const fn sample_index(self) -> usize {
        match self {
            Self::A => 0,
            Self::R => 1,
            Self::G => 2,
            Self::B => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "alpha",
            Self::R => "red",
            Self::G => "green",
            Self::B => "blue",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Ok(Self::A),
            "r" | "red" => Ok(Self::R),
            "g" | "green" => Ok(Self::G),
            "b" | "blue" => Ok(Self::B),
            other => Err(format!("unknown channel '{other}' (expected a, r, g or b)")),
        }
    }
}
