use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::systems::proximity::ProximityTarget;
use constants::render_settings::TARGET_MARKER_RADIUS;

pub fn spawn_target_marker(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(TARGET_MARKER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Visibility::Hidden,
        ProximityTarget,
    ));
}

/// Keep the proximity target on the cursor's ground-plane intersection,
/// hiding the marker while the cursor is outside the window or the ray
/// misses the plane.
pub fn update_target_marker(
    mut target_query: Query<(&mut Transform, &mut Visibility), With<ProximityTarget>>,
    camera_query: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if let (Ok((mut transform, mut visibility)), Ok((camera_transform, camera))) =
        (target_query.single_mut(), camera_query.single())
    {
        let Ok(window) = windows.single() else {
            return;
        };

        if let Some(cursor_pos) = window.cursor_position() {
            if let Some(intersection) =
                ViewportCamera::mouse_to_ground_plane(cursor_pos, camera, camera_transform)
            {
                transform.translation = intersection;
                *visibility = Visibility::Visible;
                return;
            }
        }
        *visibility = Visibility::Hidden;
    }
}
