//! Settings and dataset loading for the plot viewer.
//!
//! Settings arrive through the asset server (JSON, optional); the CSV point
//! data is then read synchronously so the first rendered frame already has
//! the full dataset.

/// Headered CSV parsing into the point dataset, with skip-and-log row policy.
pub mod csv_loader;

/// Synchronous dataset creation and camera framing once settings are ready.
pub mod dataset_creator;

/// Loading progress flags driving the app state transition.
pub mod progress;

/// Settings asset request and handle polling.
pub mod settings_loader;
