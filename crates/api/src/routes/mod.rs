//! HTTP Routes

pub mod features;
