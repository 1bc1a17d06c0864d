use std::collections::HashMap;

use bevy::prelude::*;

use crate::{
    attraction::{AnimatorState, AttractionHandle, FrameReport, MagneticField},
    camera::MainCamera,
    config::MagnetConfig,
    input::{PointerInputSet, PointerMoved},
    visual::surface::CameraSurface,
};

/// Opt-in marker: present = attracted toward the pointer
///
/// Unset fields fall back to `MagnetConfig::defaults`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Magnetic {
    pub strength: Option<f32>,
    pub radius: Option<f32>,
}

/// Layout (rest) position of a magnetic element in world space
///
/// Other systems may move it; the animator re-reads it every frame and
/// renders the element at anchor + attraction offset.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MagnetAnchor(pub Vec3);

/// Layout anchors and the transforms the animator writes
pub type MagnetTargets<'w, 's> = Query<'w, 's, (&'static MagnetAnchor, &'static mut Transform)>;

/// The app's single attraction service
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct MagnetField(pub MagneticField<Entity>);

/// Outcome of the latest attraction frame
#[derive(Resource, Debug, Default, Deref)]
pub struct MagnetFrameReport(pub FrameReport);

/// Which registration belongs to which entity
#[derive(Resource, Debug, Default)]
pub struct MagnetBindings(pub HashMap<Entity, AttractionHandle>);

pub struct MagnetPlugin;

impl Plugin for MagnetPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<MagnetConfig>() {
            app.insert_resource(MagnetConfig::load());
        }

        app.init_resource::<MagnetField>()
            .init_resource::<MagnetBindings>()
            .init_resource::<MagnetFrameReport>()
            .add_systems(
                Update,
                (
                    unregister_magnets,
                    register_magnets,
                    forward_pointer.after(PointerInputSet),
                    animate_magnets.run_if(field_running),
                )
                    .chain(),
            );
    }
}

/// Run condition: the frame loop only exists while something is registered
pub fn field_running(field: Res<MagnetField>) -> bool {
    field.state() == AnimatorState::Running
}

/// System: register newly mounted magnetic elements
pub fn register_magnets(
    config: Res<MagnetConfig>,
    mut field: ResMut<MagnetField>,
    mut bindings: ResMut<MagnetBindings>,
    added: Query<(Entity, &Magnetic), Added<Magnetic>>,
) {
    for (entity, magnetic) in &added {
        let options = config.resolve(magnetic.strength, magnetic.radius);
        let handle = field.register(entity, options);

        // Re-inserted component: swap registrations without dropping to empty
        if let Some(previous) = bindings.0.insert(entity, handle) {
            field.unregister(previous);
        }
        if let Some(record) = field.record(handle) {
            debug!(
                "Magnet on {:?}: strength={}, radius={} ({} active)",
                entity,
                record.strength,
                record.radius,
                field.len()
            );
        }
    }
}

/// System: unregister elements that lost `Magnetic` or were despawned
pub fn unregister_magnets(
    mut removed: RemovedComponents<Magnetic>,
    mut field: ResMut<MagnetField>,
    mut bindings: ResMut<MagnetBindings>,
    mut targets: MagnetTargets,
) {
    for entity in removed.read() {
        if let Some(handle) = bindings.0.remove(&entity) {
            field.unregister(handle);
            if field.is_empty() {
                debug!("Last magnet gone, animator {:?}", field.state());
            }
        }

        // Still alive (opted out rather than despawned): back to layout
        if let Ok((anchor, mut transform)) = targets.get_mut(entity) {
            transform.translation = anchor.0;
        }
    }
}

/// System: feed raw pointer moves to the tracker
pub fn forward_pointer(mut moves: MessageReader<PointerMoved>, mut field: ResMut<MagnetField>) {
    for ev in moves.read() {
        field.pointer_moved(ev.position);
    }
}

/// System: one attraction frame over every registered element
pub fn animate_magnets(
    mut field: ResMut<MagnetField>,
    mut last_report: ResMut<MagnetFrameReport>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut targets: MagnetTargets,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let mut surface = CameraSurface {
        camera,
        camera_transform,
        targets: &mut targets,
    };
    let report = field.frame(&mut surface);

    if report.ran && report.skipped > 0 {
        debug!(
            "Frame applied {} magnets, skipped {} with no live element",
            report.applied, report.skipped
        );
    }
    last_report.0 = report;
}
