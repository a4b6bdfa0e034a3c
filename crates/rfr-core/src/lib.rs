//! Core library for rfr: resolves the download URL of an OpenWrt
//! root-filesystem archive for a branch/target pair.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod manifest;
pub mod resolver;
pub mod url_model;
