#![doc = include_str!("../README.md")]

pub mod client;
mod error;
pub use client::{Client, ClientSettings, EmailProvider};
pub use error::ApiError;
