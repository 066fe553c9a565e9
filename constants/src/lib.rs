//! Shared constants for the cluster plot engine.
//!
//! Holds the cluster colour palette and the default render tunables so the
//! viewer and its tests agree on one source of truth.

/// Cluster-id colour palette with cyclic hue buckets.
pub mod cluster;

/// Default asset paths for point data and optional settings overrides.
pub mod path;

/// Default render tunables: point size, coordinate scale, interaction radius.
pub mod render_settings;
