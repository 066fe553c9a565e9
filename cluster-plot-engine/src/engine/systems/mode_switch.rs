use bevy::prelude::*;

use crate::engine::assets::plot_assets::PlotAssets;
use crate::engine::assets::plot_dataset::PlotDataset;
use crate::engine::assets::plot_settings::PlotSettings;
use crate::engine::scene::billboards::{BillboardBatch, spawn_billboard_batches};
use crate::engine::scene::discrete_spheres::{PlotContainer, spawn_discrete_spheres};
use crate::engine::scene::particle_cloud::{ParticleCloud, spawn_particle_cloud};
use crate::engine::shaders::ParticleCloudMaterial;
use crate::engine::systems::proximity::{BillboardState, ProximityOverrides};
use crate::engine::systems::render_mode::{PlotMode, RenderModeState};

/// Which strategy is currently built in the scene, if any. `None` until the
/// first activation after the dataset loads.
#[derive(Resource, Default)]
pub struct ActivePlot {
    pub current: Option<PlotMode>,
}

/// Tear down the built strategy and activate the requested one whenever they
/// differ. Teardown is type-specific: the sphere container goes as one unit,
/// the particle cloud is a single entity, and the billboard path also drops
/// its override objects and visibility set.
pub fn apply_render_mode(
    mut commands: Commands,
    mode: Res<RenderModeState>,
    mut active: ResMut<ActivePlot>,
    settings: Res<PlotSettings>,
    dataset: Res<PlotDataset>,
    assets: Res<PlotAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut cloud_materials: ResMut<Assets<ParticleCloudMaterial>>,
    mut overrides: ResMut<ProximityOverrides>,
    mut billboards: ResMut<BillboardState>,
    containers: Query<Entity, With<PlotContainer>>,
    clouds: Query<Entity, With<ParticleCloud>>,
    batches: Query<Entity, With<BillboardBatch>>,
) {
    if active.current == Some(mode.current) {
        return;
    }

    match active.current {
        Some(PlotMode::DiscreteSpheres) => {
            for entity in &containers {
                commands.entity(entity).despawn();
            }
        }
        Some(PlotMode::ParticleCloud) => {
            for entity in &clouds {
                commands.entity(entity).despawn();
            }
        }
        Some(PlotMode::InstancedBillboards) => {
            for entity in &batches {
                commands.entity(entity).despawn();
            }
            overrides.clear(&mut commands);
            billboards.dirty = false;
        }
        None => {}
    }

    match mode.current {
        PlotMode::DiscreteSpheres => {
            spawn_discrete_spheres(&mut commands, &dataset, &settings, &assets);
        }
        PlotMode::ParticleCloud => {
            spawn_particle_cloud(
                &mut commands,
                &dataset,
                &settings,
                &mut meshes,
                &mut cloud_materials,
            );
        }
        PlotMode::InstancedBillboards => {
            spawn_billboard_batches(
                &mut commands,
                &dataset,
                &overrides.hidden,
                &settings,
                &assets,
            );
        }
    }

    active.current = Some(mode.current);
}
