//! HTTP gateway for Morse translation.
//!
//! Exposes `text-to-morse` and `morse-to-text` over plain-text POST routes
//! backed by a shared, read-only [`morse_core::MorseTable`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
