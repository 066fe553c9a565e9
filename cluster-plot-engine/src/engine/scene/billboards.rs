use std::collections::HashSet;

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::engine::assets::plot_assets::PlotAssets;
use crate::engine::assets::plot_dataset::PlotDataset;
use crate::engine::assets::plot_settings::PlotSettings;
use crate::engine::render::billboard_render_plugin::{BillboardInstanceData, InstanceData};
use constants::cluster::cluster_color;

#[derive(Component)]
pub struct BillboardBatch;

/// Partition the visible points (dataset minus the hidden set) into instance
/// batches of at most `capacity`. Batch membership is positional, so the
/// whole partition is rebuilt whenever the hidden set shifts.
pub fn build_instance_batches(
    dataset: &PlotDataset,
    hidden: &HashSet<usize>,
    scale: f32,
    point_size: f32,
    capacity: usize,
) -> Vec<Vec<InstanceData>> {
    let capacity = capacity.max(1);
    let mut batches = Vec::new();
    let mut current: Vec<InstanceData> = Vec::with_capacity(capacity);

    for (index, point) in dataset.iter().enumerate() {
        if hidden.contains(&index) {
            continue;
        }
        if current.len() == capacity {
            batches.push(std::mem::replace(&mut current, Vec::with_capacity(capacity)));
        }
        current.push(InstanceData::new(
            point.scaled_position(scale),
            point_size,
            cluster_color(point.cluster),
        ));
    }

    if !current.is_empty() {
        batches.push(current);
    }
    batches
}

/// Spawn one batch entity per partition, each carrying the shared quad mesh
/// and its own instance buffer.
pub fn spawn_billboard_batches(
    commands: &mut Commands,
    dataset: &PlotDataset,
    hidden: &HashSet<usize>,
    settings: &PlotSettings,
    assets: &PlotAssets,
) {
    let batches = build_instance_batches(
        dataset,
        hidden,
        settings.scale,
        settings.point_size,
        settings.batch_capacity(),
    );
    let batch_count = batches.len();

    for batch in batches {
        commands.spawn((
            Mesh3d(assets.billboard_quad.clone()),
            BillboardInstanceData(batch),
            Transform::default(),
            NoFrustumCulling,
            BillboardBatch,
        ));
    }

    info!(
        "Built {batch_count} billboard batches covering {} points",
        dataset.len() - hidden.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::plot_dataset::PlotPoint;

    fn dataset(n: usize) -> PlotDataset {
        PlotDataset::from_points(
            (0..n)
                .map(|i| PlotPoint {
                    x: i as f32,
                    y: 0.0,
                    z: 0.0,
                    cluster: i as i32,
                })
                .collect(),
        )
    }

    #[test]
    fn batches_respect_the_capacity_limit() {
        let batches = build_instance_batches(&dataset(2500), &HashSet::new(), 1.0, 0.2, 1023);
        let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1023, 1023, 454]);
    }

    #[test]
    fn batch_sizes_sum_to_visible_count() {
        let hidden: HashSet<usize> = [0, 10, 99].into_iter().collect();
        let batches = build_instance_batches(&dataset(100), &hidden, 1.0, 0.2, 16);
        let total: usize = batches.iter().map(Vec::len).sum();
        assert_eq!(total, 97);
        assert!(batches.iter().all(|batch| batch.len() <= 16));
    }

    #[test]
    fn hidden_points_are_excluded() {
        let hidden: HashSet<usize> = [1].into_iter().collect();
        let batches = build_instance_batches(&dataset(3), &hidden, 2.0, 0.2, 1023);
        assert_eq!(batches.len(), 1);
        let positions: Vec<[f32; 3]> = batches[0].iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![[0.0, 0.0, 0.0], [4.0, 0.0, 0.0]]);
    }

    #[test]
    fn empty_visible_set_yields_no_batches() {
        let hidden: HashSet<usize> = (0..4).collect();
        let batches = build_instance_batches(&dataset(4), &hidden, 1.0, 0.2, 1023);
        assert!(batches.is_empty());
    }

    #[test]
    fn instances_carry_size_and_cluster_colour() {
        let batches = build_instance_batches(&dataset(2), &HashSet::new(), 1.0, 0.5, 1023);
        let instance = &batches[0][1];
        assert_eq!(instance.size, 0.5);
        assert_eq!(
            instance.color,
            cluster_color(1).to_linear().to_f32_array()
        );
    }

    #[test]
    fn rebuild_is_deterministic() {
        let data = dataset(50);
        let hidden: HashSet<usize> = [3, 7].into_iter().collect();
        let a = build_instance_batches(&data, &hidden, 1.5, 0.2, 8);
        let b = build_instance_batches(&data, &hidden, 1.5, 0.2, 8);
        assert_eq!(a.len(), b.len());
        for (left, right) in a.iter().zip(&b) {
            let lp: Vec<[f32; 3]> = left.iter().map(|i| i.position).collect();
            let rp: Vec<[f32; 3]> = right.iter().map(|i| i.position).collect();
            assert_eq!(lp, rp);
        }
    }
}
