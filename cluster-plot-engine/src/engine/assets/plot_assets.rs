use bevy::prelude::*;

use constants::cluster;

/// Shared handles reused by every strategy: one unit sphere, one unit quad,
/// and a cached material per hue bucket so 5000 spheres don't allocate 5000
/// materials.
#[derive(Resource)]
pub struct PlotAssets {
    pub sphere_mesh: Handle<Mesh>,
    pub billboard_quad: Handle<Mesh>,
    pub cluster_materials: Vec<Handle<StandardMaterial>>,
}

impl PlotAssets {
    /// Cached material for a cluster id.
    pub fn material_for(&self, cluster: i32) -> Handle<StandardMaterial> {
        self.cluster_materials[cluster::cluster_bucket(cluster)].clone()
    }
}

pub fn init_plot_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cluster_materials = (0..cluster::HUE_BUCKETS)
        .map(|bucket| {
            materials.add(StandardMaterial {
                base_color: cluster::cluster_color(bucket),
                perceptual_roughness: 0.6,
                ..default()
            })
        })
        .collect();

    commands.insert_resource(PlotAssets {
        sphere_mesh: meshes.add(Sphere::new(0.5)),
        billboard_quad: meshes.add(Rectangle::new(1.0, 1.0)),
        cluster_materials,
    });
}
