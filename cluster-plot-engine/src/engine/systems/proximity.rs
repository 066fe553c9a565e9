use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::engine::assets::plot_assets::PlotAssets;
use crate::engine::assets::plot_dataset::PlotDataset;
use crate::engine::assets::plot_settings::PlotSettings;
use crate::engine::scene::billboards::{BillboardBatch, spawn_billboard_batches};
use crate::engine::scene::discrete_spheres::point_sphere;
use crate::engine::systems::mode_switch::ActivePlot;
use crate::engine::systems::render_mode::PlotMode;

/// Marker for the entity whose transform drives proximity interaction.
#[derive(Component)]
pub struct ProximityTarget;

/// Marker for a point promoted out of the batched draw path.
#[derive(Component)]
pub struct OverrideSphere;

/// Point indices currently under individual control, plus the override
/// entities backing them. The hidden set is recomputed from scratch every
/// frame; only the entity map is maintained incrementally.
#[derive(Resource, Default)]
pub struct ProximityOverrides {
    pub hidden: HashSet<usize>,
    objects: HashMap<usize, Entity>,
}

impl ProximityOverrides {
    /// Despawn every override object and forget the hidden set.
    pub fn clear(&mut self, commands: &mut Commands) {
        for (_, entity) in self.objects.drain() {
            commands.entity(entity).despawn();
        }
        self.hidden.clear();
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

/// Set when the visible point set shifted and the batches must be rebuilt.
#[derive(Resource, Default)]
pub struct BillboardState {
    pub dirty: bool,
}

/// Indices whose scaled position lies strictly inside the interaction radius.
pub fn overridden_indices(
    dataset: &PlotDataset,
    scale: f32,
    target: Vec3,
    interact_distance: f32,
) -> HashSet<usize> {
    dataset
        .iter()
        .enumerate()
        .filter(|(_, point)| point.scaled_position(scale).distance(target) < interact_distance)
        .map(|(index, _)| index)
        .collect()
}

/// Indices entering and leaving the hidden set between two evaluations.
pub fn visibility_transitions(
    previous: &HashSet<usize>,
    next: &HashSet<usize>,
) -> (Vec<usize>, Vec<usize>) {
    let entered = next.difference(previous).copied().collect();
    let exited = previous.difference(next).copied().collect();
    (entered, exited)
}

/// Full O(n) proximity pass. Promotes points inside the interaction radius to
/// individual spheres, restores those that left, and flags a batch rebuild
/// when the hidden set's size changed against the prior frame.
pub fn update_proximity_overrides(
    mut commands: Commands,
    settings: Res<PlotSettings>,
    dataset: Res<PlotDataset>,
    active: Res<ActivePlot>,
    target_query: Query<&GlobalTransform, With<ProximityTarget>>,
    mut overrides: ResMut<ProximityOverrides>,
    mut billboards: ResMut<BillboardState>,
    assets: Res<PlotAssets>,
) {
    if active.current != Some(PlotMode::InstancedBillboards) {
        return;
    }
    let Ok(target) = target_query.single() else {
        return;
    };

    let next = overridden_indices(
        &dataset,
        settings.scale,
        target.translation(),
        settings.interact_distance,
    );
    let (entered, exited) = visibility_transitions(&overrides.hidden, &next);

    for index in entered {
        let entity = commands
            .spawn((
                point_sphere(&dataset.points()[index], &settings, &assets),
                OverrideSphere,
            ))
            .id();
        overrides.objects.insert(index, entity);
    }
    for index in exited {
        if let Some(entity) = overrides.objects.remove(&index) {
            commands.entity(entity).despawn();
        }
    }

    if next.len() != overrides.hidden.len() {
        billboards.dirty = true;
    }
    overrides.hidden = next;
}

/// Replace every batch entity with a fresh partition of the visible set.
pub fn rebuild_billboard_batches(
    mut commands: Commands,
    mut billboards: ResMut<BillboardState>,
    settings: Res<PlotSettings>,
    dataset: Res<PlotDataset>,
    overrides: Res<ProximityOverrides>,
    assets: Res<PlotAssets>,
    active: Res<ActivePlot>,
    existing: Query<Entity, With<BillboardBatch>>,
) {
    if !billboards.dirty || active.current != Some(PlotMode::InstancedBillboards) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    spawn_billboard_batches(&mut commands, &dataset, &overrides.hidden, &settings, &assets);
    billboards.dirty = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::plot_dataset::PlotPoint;

    fn dataset() -> PlotDataset {
        PlotDataset::from_points(vec![
            PlotPoint { x: 0.0, y: 0.0, z: 1.5, cluster: 0 },
            PlotPoint { x: 0.0, y: 0.0, z: 5.0, cluster: 1 },
            PlotPoint { x: 2.0, y: 0.0, z: 0.0, cluster: 2 },
        ])
    }

    #[test]
    fn points_inside_the_radius_are_overridden() {
        let hidden = overridden_indices(&dataset(), 1.0, Vec3::ZERO, 2.0);
        assert_eq!(hidden, [0].into_iter().collect());
    }

    #[test]
    fn boundary_distance_is_not_overridden() {
        // Point 2 sits exactly at the threshold distance.
        let hidden = overridden_indices(&dataset(), 1.0, Vec3::ZERO, 2.0);
        assert!(!hidden.contains(&2));

        let hidden = overridden_indices(&dataset(), 1.0, Vec3::ZERO, 2.001);
        assert!(hidden.contains(&2));
    }

    #[test]
    fn scale_is_applied_before_the_distance_check() {
        // Scaled by 2, the nearest point moves out to z = 3.
        let hidden = overridden_indices(&dataset(), 2.0, Vec3::ZERO, 2.0);
        assert!(hidden.is_empty());

        let hidden = overridden_indices(&dataset(), 2.0, Vec3::ZERO, 3.5);
        assert_eq!(hidden, [0].into_iter().collect());
    }

    #[test]
    fn moving_the_target_away_restores_the_point() {
        let data = dataset();
        let near = overridden_indices(&data, 1.0, Vec3::ZERO, 2.0);
        let far = overridden_indices(&data, 1.0, Vec3::new(100.0, 0.0, 0.0), 2.0);
        let (entered, exited) = visibility_transitions(&near, &far);
        assert!(entered.is_empty());
        assert_eq!(exited, vec![0]);
    }

    #[test]
    fn transitions_split_enter_and_exit() {
        let previous: HashSet<usize> = [1, 2].into_iter().collect();
        let next: HashSet<usize> = [2, 3].into_iter().collect();
        let (mut entered, mut exited) = visibility_transitions(&previous, &next);
        entered.sort_unstable();
        exited.sort_unstable();
        assert_eq!(entered, vec![3]);
        assert_eq!(exited, vec![1]);
    }

    #[test]
    fn recompute_is_idempotent_for_a_static_target() {
        let data = dataset();
        let first = overridden_indices(&data, 1.0, Vec3::ZERO, 2.0);
        let second = overridden_indices(&data, 1.0, Vec3::ZERO, 2.0);
        assert_eq!(first, second);
        let (entered, exited) = visibility_transitions(&first, &second);
        assert!(entered.is_empty() && exited.is_empty());
    }
}
