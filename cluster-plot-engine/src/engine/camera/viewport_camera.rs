use bevy::input::mouse::MouseScrollUnit;
use bevy::math::EulerRot;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

#[derive(Resource)]
pub struct ViewportCamera {
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub move_speed: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 4.0, 12.0),
            pitch: -0.3,
            yaw: 0.0,
            move_speed: 10.0,
        }
    }
}

impl ViewportCamera {
    /// Frame the camera on the scaled dataset bounds, looking slightly down
    /// at the cloud centre from outside it.
    pub fn framing(center: Vec3, extent: Vec3) -> Self {
        let distance = extent.length().max(4.0);
        Self {
            position: center + Vec3::new(0.0, distance * 0.35, distance),
            pitch: -0.3,
            yaw: 0.0,
            move_speed: (distance * 0.5).clamp(4.0, 100.0),
        }
    }

    /// Cursor ray intersection with the ground plane `y = 0`.
    pub fn mouse_to_ground_plane(
        cursor_pos: Vec2,
        camera: &Camera,
        camera_transform: &GlobalTransform,
    ) -> Option<Vec3> {
        let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;
        if ray.direction.y.abs() < 0.001 {
            return None;
        }
        let t = -ray.origin.y / ray.direction.y;
        if t > 0.0 {
            Some(ray.origin + ray.direction * t)
        } else {
            None
        }
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut viewport: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Right-drag look around.
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        viewport.yaw -= mouse_delta.x * 0.0035;
        viewport.pitch = (viewport.pitch - mouse_delta.y * 0.003).clamp(-1.55, 1.55);
    }

    let view_rot = Quat::from_euler(EulerRot::YXZ, viewport.yaw, viewport.pitch, 0.0);
    let forward = view_rot * -Vec3::Z;

    // Scroll dollies along the view direction.
    let mut scroll = 0.0;
    for ev in scroll_events.read() {
        scroll += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll.abs() > f32::EPSILON {
        let dolly = viewport.move_speed * 0.5;
        viewport.position += forward * scroll * dolly;
    }

    // Keyboard fly movement, shift = faster, ctrl = slower.
    let mut input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyQ) {
        input.y -= 1.0;
    }

    if input != Vec3::ZERO {
        let right = view_rot * Vec3::X;
        let mut speed = viewport.move_speed;
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            speed *= 3.5;
        }
        if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) {
            speed *= 0.25;
        }
        let delta = right * input.x + Vec3::Y * input.y + forward * input.z;
        viewport.position += delta.normalize() * speed * time.delta_secs();
    }

    let lerp = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(viewport.position, lerp);
    camera_transform.rotation = camera_transform.rotation.slerp(view_rot, lerp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing_looks_at_cloud_from_outside() {
        let camera = ViewportCamera::framing(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(10.0));
        assert!(camera.position.z > 3.0);
        assert!(camera.position.y > 2.0);
        assert!(camera.move_speed >= 4.0);
    }

    #[test]
    fn framing_tiny_extent_keeps_minimum_distance() {
        let camera = ViewportCamera::framing(Vec3::ZERO, Vec3::ZERO);
        assert!(camera.position.length() >= 4.0);
    }
}
