#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map screen orchestration.
//!
//! Drives one full-screen map with a heatmap overlay: applies the map
//! configuration when the surface becomes ready, handles the location
//! permission round-trip, and runs the fetch→decode→build pipeline in a
//! structured background task whose result is attached to the surface.
//!
//! The map SDK, the permission dialog, and the transient user
//! notification are external collaborators reached only through the
//! traits in [`surface`].

pub mod config;
pub mod controller;
pub mod surface;
