use bevy::camera::ScalingMode;
use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, update_camera_resource);
    }
}

/// Visible board area in world units, kept in sync with the window aspect
#[derive(Resource, Debug)]
pub struct GameCamera {
    pub scale: f32,
    pub aspect_ratio: f32,
    pub bounds: CameraBounds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for GameCamera {
    fn default() -> Self {
        let scale = 8.0;
        let aspect_ratio = 16.0 / 9.0;

        Self {
            scale,
            aspect_ratio,
            bounds: CameraBounds::from_scale_and_aspect(scale, aspect_ratio),
        }
    }
}

impl CameraBounds {
    pub fn from_scale_and_aspect(scale: f32, aspect_ratio: f32) -> Self {
        let half_height = scale * 0.5;
        let half_width = half_height * aspect_ratio;

        Self {
            left: -half_width,
            right: half_width,
            bottom: -half_height,
            top: half_height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Board position (y = 0) at a fraction of the visible area
    ///
    /// `horizontal` 0.0 = left, 1.0 = right; `vertical` 0.0 = bottom, 1.0 = top.
    /// `padding` insets from every edge as a fraction of width/height.
    pub fn position_with_padding(&self, horizontal: f32, vertical: f32, padding: f32) -> Vec3 {
        let padded_left = self.left + self.width() * padding;
        let padded_right = self.right - self.width() * padding;
        let padded_bottom = self.bottom + self.height() * padding;
        let padded_top = self.top - self.height() * padding;

        let x = padded_left + (padded_right - padded_left) * horizontal;
        let z = padded_bottom + (padded_top - padded_bottom) * vertical;

        Vec3::new(x, 0.0, z)
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Project a viewport point onto the horizontal plane at `height`
pub fn viewport_to_board(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    viewport: Vec2,
    height: f32,
) -> Option<Vec3> {
    let ray = camera.viewport_to_world(camera_transform, viewport).ok()?;
    if ray.direction.y.abs() < f32::EPSILON {
        return None;
    }
    let t = (height - ray.origin.y) / ray.direction.y;
    Some(ray.origin + ray.direction * t)
}

/// Top-down orthographic camera over the XZ plane, +Z up on screen
fn setup_camera(mut commands: Commands, game_camera: Res<GameCamera>) {
    let projection = Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::FixedVertical {
            viewport_height: game_camera.scale,
        },
        near: 0.0,
        far: 1000.0,
        ..OrthographicProjection::default_3d()
    });
    commands.spawn((
        Camera3d::default(),
        projection,
        Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
        MainCamera,
    ));
}

fn update_camera_resource(mut game_camera: ResMut<GameCamera>, windows: Query<&Window>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let new_aspect = window.width() / window.height();

    if (new_aspect - game_camera.aspect_ratio).abs() > 0.01 {
        game_camera.aspect_ratio = new_aspect;
        game_camera.bounds =
            CameraBounds::from_scale_and_aspect(game_camera.scale, game_camera.aspect_ratio);
        debug!("Camera bounds updated: {:?}", game_camera.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_scale() {
        let bounds = CameraBounds::from_scale_and_aspect(8.0, 2.0);
        assert_eq!(bounds.height(), 8.0);
        assert_eq!(bounds.width(), 16.0);
        assert_eq!(bounds.left, -8.0);
        assert_eq!(bounds.top, 4.0);
    }

    #[test]
    fn test_position_with_padding() {
        let bounds = CameraBounds::from_scale_and_aspect(10.0, 1.0);

        assert_eq!(bounds.position_with_padding(0.5, 0.5, 0.0), Vec3::ZERO);
        assert_eq!(
            bounds.position_with_padding(0.0, 1.0, 0.0),
            Vec3::new(-5.0, 0.0, 5.0)
        );
        assert_eq!(
            bounds.position_with_padding(1.0, 0.0, 0.1),
            Vec3::new(4.0, 0.0, -4.0)
        );
    }
}
