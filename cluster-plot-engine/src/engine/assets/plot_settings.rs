use bevy::prelude::*;
use serde::Deserialize;

use crate::engine::systems::render_mode::PlotMode;
use constants::{path, render_settings};

/// Viewer configuration, optionally overridden by a `plot_settings.json`
/// asset. Every field falls back to the shared defaults, so a partial file
/// (or none at all) is fine.
#[derive(Resource, Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Visual diameter of one plotted point.
    pub point_size: f32,
    /// World-space magnification of raw coordinates.
    pub scale: f32,
    /// Maximum rows consumed from the input file.
    pub limit_plots: usize,
    /// Strategy active when the app starts.
    pub start_mode: PlotMode,
    /// Proximity radius promoting points to individual overrides.
    pub interact_distance: f32,
    /// Instances per billboard draw batch.
    pub instance_batch_capacity: usize,
    /// Name of the key that advances the render mode.
    pub toggle_key: String,
    /// Point data file, relative to the crate root.
    pub csv_path: String,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            point_size: render_settings::DEFAULT_POINT_SIZE,
            scale: render_settings::DEFAULT_COORDINATE_SCALE,
            limit_plots: render_settings::DEFAULT_LIMIT_PLOTS,
            start_mode: PlotMode::default(),
            interact_distance: render_settings::DEFAULT_INTERACT_DISTANCE,
            instance_batch_capacity: render_settings::DEFAULT_INSTANCE_BATCH_CAPACITY,
            toggle_key: "Tab".to_string(),
            csv_path: path::RELATIVE_CSV_PATH.to_string(),
        }
    }
}

impl PlotSettings {
    /// Key that advances the render mode. Unknown names fall back to Tab.
    pub fn toggle_key_code(&self) -> KeyCode {
        parse_key_name(&self.toggle_key).unwrap_or(KeyCode::Tab)
    }

    /// Batch capacity clamped away from zero so partitioning always advances.
    pub fn batch_capacity(&self) -> usize {
        self.instance_batch_capacity.max(1)
    }
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name {
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Space),
        "Enter" => Some(KeyCode::Enter),
        "M" | "KeyM" => Some(KeyCode::KeyM),
        "T" | "KeyT" => Some(KeyCode::KeyT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shared_constants() {
        let settings = PlotSettings::default();
        assert_eq!(settings.point_size, render_settings::DEFAULT_POINT_SIZE);
        assert_eq!(settings.scale, render_settings::DEFAULT_COORDINATE_SCALE);
        assert_eq!(settings.instance_batch_capacity, 1023);
        assert_eq!(settings.toggle_key_code(), KeyCode::Tab);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let settings: PlotSettings =
            serde_json::from_str(r#"{ "scale": 2.0, "start_mode": "InstancedBillboards" }"#)
                .unwrap();
        assert_eq!(settings.scale, 2.0);
        assert_eq!(settings.start_mode, PlotMode::InstancedBillboards);
        assert_eq!(settings.point_size, render_settings::DEFAULT_POINT_SIZE);
        assert_eq!(settings.limit_plots, render_settings::DEFAULT_LIMIT_PLOTS);
    }

    #[test]
    fn unknown_toggle_key_falls_back_to_tab() {
        let settings = PlotSettings {
            toggle_key: "NotAKey".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.toggle_key_code(), KeyCode::Tab);

        let settings = PlotSettings {
            toggle_key: "Space".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.toggle_key_code(), KeyCode::Space);
    }

    #[test]
    fn zero_batch_capacity_is_clamped() {
        let settings = PlotSettings {
            instance_batch_capacity: 0,
            ..Default::default()
        };
        assert_eq!(settings.batch_capacity(), 1);
    }
}
