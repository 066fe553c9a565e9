use bevy::prelude::*;
use serde::Deserialize;

use crate::engine::assets::plot_settings::PlotSettings;

/// Presentation strategy for the loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PlotMode {
    /// One independent sphere entity per point.
    #[default]
    DiscreteSpheres,
    /// Single static sprite batch, no per-point identity.
    ParticleCloud,
    /// Instanced quads in bounded draw batches with proximity overrides.
    InstancedBillboards,
}

impl PlotMode {
    /// Advance to the next mode, wrapping after the last.
    pub fn next(self) -> Self {
        match self {
            PlotMode::DiscreteSpheres => PlotMode::ParticleCloud,
            PlotMode::ParticleCloud => PlotMode::InstancedBillboards,
            PlotMode::InstancedBillboards => PlotMode::DiscreteSpheres,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlotMode::DiscreteSpheres => "discrete spheres",
            PlotMode::ParticleCloud => "particle cloud",
            PlotMode::InstancedBillboards => "instanced billboards",
        }
    }
}

/// Requested presentation mode. The starting value is replaced with the
/// configured `start_mode` once settings are loaded.
#[derive(Resource, Default)]
pub struct RenderModeState {
    pub current: PlotMode,
}

/// Advance the render mode on the configured toggle key.
pub fn render_mode_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<PlotSettings>,
    mut state: ResMut<RenderModeState>,
) {
    if keyboard.just_pressed(settings.toggle_key_code()) {
        state.current = state.current.next();
        info!("Render mode: {}", state.current.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_three_times_returns_to_start() {
        for start in [
            PlotMode::DiscreteSpheres,
            PlotMode::ParticleCloud,
            PlotMode::InstancedBillboards,
        ] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn cycle_visits_every_mode() {
        let first = PlotMode::DiscreteSpheres;
        let second = first.next();
        let third = second.next();
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }

    #[test]
    fn mode_names_deserialize() {
        let mode: PlotMode = serde_json::from_str(r#""ParticleCloud""#).unwrap();
        assert_eq!(mode, PlotMode::ParticleCloud);
    }
}
