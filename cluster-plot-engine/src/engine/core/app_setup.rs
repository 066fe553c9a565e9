use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::plot_assets::init_plot_assets;
use crate::engine::assets::plot_settings::PlotSettings;
use crate::engine::camera::viewport_camera::{ViewportCamera, camera_controller};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::dataset_creator::create_dataset_when_ready;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings_loader::{SettingsLoader, load_settings_system, start_loading};
use crate::engine::render::billboard_render_plugin::BillboardRenderPlugin;
use crate::engine::scene::target_gizmo::{spawn_target_marker, update_target_marker};
use crate::engine::shaders::ParticleCloudMaterial;
use crate::engine::systems::fps_tracking::fps_text_update_system;
use crate::engine::systems::mode_switch::{ActivePlot, apply_render_mode};
use crate::engine::systems::proximity::{
    BillboardState, ProximityOverrides, rebuild_billboard_batches, update_proximity_overrides,
};
use crate::engine::systems::render_mode::{RenderModeState, render_mode_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<ParticleCloudMaterial>::default())
        .add_plugins(BillboardRenderPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<PlotSettings>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<RenderModeState>()
        .init_resource::<ActivePlot>()
        .init_resource::<ProximityOverrides>()
        .init_resource::<BillboardState>()
        .init_resource::<ViewportCamera>();

    // Loading phase: settings asset first, then the synchronous CSV read.
    app.add_systems(Startup, (setup, init_plot_assets, start_loading).chain())
        .add_systems(
            Update,
            (
                load_settings_system,
                create_dataset_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Runtime systems, ordered so a mode switch, the proximity pass, and the
    // conditional batch rebuild all settle within one frame.
    app.add_systems(
        Update,
        (
            camera_controller,
            update_target_marker,
            render_mode_system,
            apply_render_mode,
            update_proximity_overrides,
            rebuild_billboard_batches,
            fps_text_update_system,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Startup system for everything that needs no loaded data: lighting, the
/// viewport camera, the FPS overlay, and the proximity target marker.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("=== CLUSTER PLOT RENDER ENGINE ===");

    spawn_lighting(&mut commands);
    spawn_viewport_camera(&mut commands);
    spawn_fps_overlay(&mut commands);
    spawn_target_marker(&mut commands, &mut meshes, &mut materials);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-2.5, 4.5, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_fps_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}
