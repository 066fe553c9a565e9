use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub settings_loaded: bool,
    pub dataset_loaded: bool,
    /// Set once after a failed data load so the error is reported exactly
    /// once and the plot subsystem stays inert.
    pub load_failed: bool,
}
