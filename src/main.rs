use bevy::prelude::*;

mod attraction;
mod camera;
mod config;
mod input;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use config::MagnetConfig;
use input::InputPlugin;

use crate::visual::plugin::PortfolioPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Magnetic Hover".into(),
            resolution: WindowResolution::new(1280, 720),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.03)))
    .insert_resource(MagnetConfig::load())
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(PortfolioPlugin);

    app.run();
}
