//! Hypercube4D - rotating hypercube wireframes
//!
//! Library half of the `hypercube4d` binary: layered configuration and the
//! frame driver that animates a [`hypercube_core::ShapeWorld`].

pub mod config;
pub mod systems;
