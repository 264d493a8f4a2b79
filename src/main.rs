use bevy::prelude::*;

mod core;
mod data;
mod interface;
mod inventory;
mod item;
mod player;
mod ui;

use crate::core::CorePlugin;
use interface::debug_cli::DebugCliPlugin;
use crate::core::states;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "farm slice".into(),
                visible: false,
                ..default()
            }),   // 窗口不可见，所有手势走 CLI
            ..default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(data::DataPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(item::ItemPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(ui::InventoryBarPlugin)
        .add_plugins(DebugCliPlugin)
        .add_systems(Update, forward_log_event) // 简单打印
        .add_systems(Startup, (spawn_camera, |mut next: ResMut<NextState<states::AppState>>| {
            next.set(states::AppState::Loading);
        }))
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn forward_log_event(mut reader: EventReader<crate::core::events::LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
