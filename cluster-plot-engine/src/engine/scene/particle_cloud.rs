use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::engine::assets::plot_dataset::PlotDataset;
use crate::engine::assets::plot_settings::PlotSettings;
use crate::engine::mesh::particle_mesh::build_particle_mesh;
use crate::engine::shaders::ParticleCloudMaterial;

#[derive(Component)]
pub struct ParticleCloud;

/// Spawn the whole dataset as one static sprite batch. Cheaper than discrete
/// spheres, at the cost of per-point identity: no transform, no collider.
pub fn spawn_particle_cloud(
    commands: &mut Commands,
    dataset: &PlotDataset,
    settings: &PlotSettings,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ParticleCloudMaterial>,
) {
    let mesh = build_particle_mesh(dataset, settings.scale);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(ParticleCloudMaterial {
            point_size: settings.point_size,
        })),
        Transform::default(),
        NoFrustumCulling,
        ParticleCloud,
    ));

    info!("Particle cloud ready with {} sprites", dataset.len());
}
