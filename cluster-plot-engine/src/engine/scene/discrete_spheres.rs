use bevy::prelude::*;

use crate::engine::assets::plot_assets::PlotAssets;
use crate::engine::assets::plot_dataset::{PlotDataset, PlotPoint};
use crate::engine::assets::plot_settings::PlotSettings;

/// Container entity for the per-point sphere hierarchy. Despawning it takes
/// every child sphere with it.
#[derive(Component)]
pub struct PlotContainer;

/// One sphere entity per dataset point, parented to a single container.
pub fn spawn_discrete_spheres(
    commands: &mut Commands,
    dataset: &PlotDataset,
    settings: &PlotSettings,
    assets: &PlotAssets,
) {
    commands
        .spawn((
            Name::new("ClusterPlotPoints"),
            Transform::default(),
            Visibility::default(),
            PlotContainer,
        ))
        .with_children(|parent| {
            for point in dataset.iter() {
                parent.spawn(point_sphere(point, settings, assets));
            }
        });

    info!("Spawned {} point spheres", dataset.len());
}

/// Bundle for one individually rendered point, shared with the proximity
/// override path so both look identical.
pub fn point_sphere(
    point: &PlotPoint,
    settings: &PlotSettings,
    assets: &PlotAssets,
) -> impl Bundle {
    (
        Mesh3d(assets.sphere_mesh.clone()),
        MeshMaterial3d(assets.material_for(point.cluster)),
        Transform::from_translation(point.scaled_position(settings.scale))
            .with_scale(Vec3::splat(settings.point_size)),
    )
}
