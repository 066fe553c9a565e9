use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::plot_settings::PlotSettings;
use crate::engine::loading::progress::LoadingProgress;
use constants::path::RELATIVE_SETTINGS_PATH;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<PlotSettings>>,
}

/// Request the optional settings override through the asset server.
pub fn start_loading(mut loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(RELATIVE_SETTINGS_PATH));
}

/// Insert the settings resource once the asset resolves. A missing or broken
/// settings file is not an error: the defaults apply.
pub fn load_settings_system(
    mut progress: ResMut<LoadingProgress>,
    loader: Res<SettingsLoader>,
    mut commands: Commands,
    settings_assets: Res<Assets<PlotSettings>>,
    asset_server: Res<AssetServer>,
) {
    if progress.settings_loaded {
        return;
    }
    let Some(ref handle) = loader.handle else {
        return;
    };

    if let Some(settings) = settings_assets.get(handle) {
        info!("Plot settings loaded from {RELATIVE_SETTINGS_PATH}");
        commands.insert_resource(settings.clone());
        progress.settings_loaded = true;
    } else if matches!(
        asset_server.get_load_state(handle),
        Some(LoadState::Failed(_))
    ) {
        info!("No settings override found, using defaults");
        commands.insert_resource(PlotSettings::default());
        progress.settings_loaded = true;
    }
}
