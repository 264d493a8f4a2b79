pub mod components;
pub mod events;
mod systems;

use crate::core::states::AppState;
use crate::inventory::InventorySet;
use bevy::prelude::*;
use events::*;
use systems::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemSystems;

/// 世界物品：生成、绑定目录、拾取与行为分派
pub struct ItemPlugin;

impl Plugin for ItemPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnWorldItem>().add_systems(
            Update,
            (
                spawn_world_items,
                bind_world_items,
                track_player_contact,
                (pickup_items, dispatch_item_behaviors),
            )
                .chain()
                .in_set(ItemSystems)
                .in_set(InventorySet::Mutate)
                .run_if(in_state(AppState::InGame)),
        );
    }
}
