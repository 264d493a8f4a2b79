pub mod components;
pub mod events;
pub mod store;
mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use events::*;
use systems::*;

/// 背包相关系统的执行顺序：修改 → 发布快照 → 表现层重绘
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InventorySet {
    Mutate,
    Flush,
    Present,
}

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<InventoryUpdated>()
            .add_event::<GiveItemEvent>()
            .add_event::<RemoveItemEvent>()
            .add_event::<SwapItemsEvent>()
            .add_event::<ListInventoryEvent>()
            .configure_sets(
                Update,
                (InventorySet::Mutate, InventorySet::Flush, InventorySet::Present)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                (
                    (give_item, remove_item, swap_items).in_set(InventorySet::Mutate),
                    flush_inventory_updates.in_set(InventorySet::Flush),
                    print_inventory.in_set(InventorySet::Present),
                ),
            );
    }
}
