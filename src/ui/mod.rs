pub mod components;
pub mod events;
mod systems;

use crate::core::{resources::GameConfig, states::AppState};
use crate::inventory::InventorySet;
use bevy::prelude::*;
use components::InventoryBar;
use events::*;
use systems::*;

/// 物品栏表现层
pub struct InventoryBarPlugin;

impl Plugin for InventoryBarPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SlotGesture>()
            .add_event::<ShowInventoryBar>()
            .add_systems(OnEnter(AppState::InGame), spawn_inventory_bar)
            .add_systems(
                Update,
                (
                    handle_slot_gestures
                        .in_set(InventorySet::Mutate)
                        .before(crate::item::ItemSystems),
                    (inventory_updated, show_inventory_bar)
                        .chain()
                        .in_set(InventorySet::Present),
                    switch_inventory_bar_position,
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

fn spawn_inventory_bar(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(InventoryBar::new(
        config.inventory_bar_slots,
        &config.blank_sprite,
    ));
}
