//! Shared test drivers for digest implementations.
#![no_std]

pub mod hash;
