/// Point data CSV, relative to the engine crate root. The loader falls back
/// to the crate manifest directory when running from the workspace root.
pub const RELATIVE_CSV_PATH: &str = "assets/data/pca_clusters.csv";

/// Optional settings override, resolved through the asset server.
pub const RELATIVE_SETTINGS_PATH: &str = "plot_settings.json";
