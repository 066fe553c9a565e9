//! Data and configuration resources for the plot.

/// Shared mesh and material handles reused across strategies.
pub mod plot_assets;

/// Parsed point records and the ordered dataset container.
pub mod plot_dataset;

/// Viewer configuration resource with serde defaults.
pub mod plot_settings;
