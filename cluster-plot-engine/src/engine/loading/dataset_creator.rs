use bevy::prelude::*;

use crate::engine::assets::plot_settings::PlotSettings;
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::loading::csv_loader::load_plot_csv;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::systems::render_mode::RenderModeState;

/// Read the CSV synchronously once settings are available, frame the camera
/// on the scaled cloud, and arm the configured start mode.
pub fn create_dataset_when_ready(
    mut progress: ResMut<LoadingProgress>,
    settings: Option<Res<PlotSettings>>,
    mut mode_state: ResMut<RenderModeState>,
    mut commands: Commands,
) {
    if progress.dataset_loaded || progress.load_failed {
        return;
    }
    let Some(settings) = settings else {
        return;
    };

    let (dataset, stats) = match load_plot_csv(&settings.csv_path, settings.limit_plots) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("Point data unavailable: {err}");
            progress.load_failed = true;
            return;
        }
    };

    if stats.total() > 0 {
        warn!(
            "Skipped {} malformed rows ({} short, {} with unparsable numbers)",
            stats.total(),
            stats.short_rows,
            stats.bad_numbers
        );
    }

    info!("Loaded {} plot points from {}", dataset.len(), settings.csv_path);
    for (row, point) in dataset.iter().take(5).enumerate() {
        info!(
            "  row {row}: ({:.3}, {:.3}, {:.3}) cluster {}",
            point.x, point.y, point.z, point.cluster
        );
    }

    let center = dataset.scaled_center(settings.scale);
    let extent = dataset.scaled_extent(settings.scale);
    commands.insert_resource(ViewportCamera::framing(center, extent));

    mode_state.current = settings.start_mode;
    commands.insert_resource(dataset);
    progress.dataset_loaded = true;
}
