//! VPNGate: multi-provider VPN gateway core
//!
//! A library for reconciling layered, partially-specified configuration
//! fragments into one validated runtime configuration, and for resolving a
//! user's abstract connection intent into one concrete network endpoint.

pub mod config;
pub mod provider;
pub mod settings;
