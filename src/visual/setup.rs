use bevy::prelude::*;

use crate::{
    attraction::CursorFollower,
    camera::GameCamera,
    config::{MagnetConfig, TargetSpec},
    visual::{
        cursor::{CursorMarker, CursorOverlay},
        magnet::{MagnetAnchor, Magnetic},
    },
};

const CURSOR_RADIUS: f32 = 0.08;

/// A placeholder interactive element and where it sits in the view
#[derive(Component, Debug, Clone)]
pub struct DemoTarget {
    pub label: String,
    pub h: f32,
    pub v: f32,
    pub magnetic: Magnetic,
}

impl DemoTarget {
    fn from_spec(spec: &TargetSpec) -> Self {
        Self {
            label: spec.label.clone(),
            h: spec.h,
            v: spec.v,
            magnetic: Magnetic {
                strength: spec.strength,
                radius: spec.radius,
            },
        }
    }

    fn layout_position(&self, game_camera: &GameCamera, padding: f32) -> Vec3 {
        game_camera.bounds.position_with_padding(self.h, self.v, padding)
    }
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    game_camera: Res<GameCamera>,
    config: Res<MagnetConfig>,
) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    for spec in &config.targets {
        let target = DemoTarget::from_spec(spec);
        let position = target.layout_position(&game_camera, config.padding);
        let [r, g, b] = spec.color;
        debug!("Target '{}' at {:?}", target.label, position);

        commands.spawn((
            Name::new(spec.label.clone()),
            Mesh3d(meshes.add(Sphere::new(spec.size))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(r, g, b),
                emissive: LinearRgba::rgb(r, g, b) * 0.2,
                metallic: 0.8,
                perceptual_roughness: 0.2,
                ..default()
            })),
            Transform::from_translation(position),
            MagnetAnchor(position),
            target.magnetic,
            target,
        ));
    }

    info!("Spawned {} magnetic targets", config.targets.len());

    commands.insert_resource(CursorOverlay(CursorFollower::with_smoothing(
        config.cursor_smoothing,
    )));
    commands.spawn((
        CursorMarker,
        Mesh3d(meshes.add(Sphere::new(CURSOR_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Visibility::Hidden,
    ));
}

/// System: Space toggles the magnetic effect on every target (mount/unmount)
pub fn toggle_magnets(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    targets: Query<(Entity, &DemoTarget, Has<Magnetic>)>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }

    for (entity, target, is_magnetic) in &targets {
        if is_magnetic {
            commands.entity(entity).remove::<Magnetic>();
        } else {
            commands.entity(entity).insert(target.magnetic);
        }
    }
    info!("Toggled magnetic hover on {} targets", targets.iter().count());
}

/// System: move layout anchors when the visible area changes
pub fn relayout_targets(
    game_camera: Res<GameCamera>,
    config: Res<MagnetConfig>,
    mut targets: Query<(&DemoTarget, &mut MagnetAnchor, &mut Transform, Has<Magnetic>)>,
) {
    if !game_camera.is_changed() {
        return;
    }

    for (target, mut anchor, mut transform, is_magnetic) in &mut targets {
        anchor.0 = target.layout_position(&game_camera, config.padding);
        // Magnetic targets are placed by the animator on its next frame
        if !is_magnetic {
            transform.translation = anchor.0;
        }
    }
}
