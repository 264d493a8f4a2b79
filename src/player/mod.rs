pub mod components;
pub mod events;
pub mod systems;

use crate::core::states::AppState;
use crate::inventory::InventorySet;
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<MovementEvent>()
            .add_event::<CarryEvent>()
            .add_event::<PlayerInputLock>()
            // 在游戏开始时生成玩家
            .add_systems(OnEnter(AppState::InGame), spawn_player)
            .add_systems(
                Update,
                (
                    player_movement_input.before(InventorySet::Mutate),
                    (handle_input_lock, handle_carry_events).after(InventorySet::Present),
                )
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                FixedUpdate,
                player_movement.run_if(in_state(AppState::InGame)),
            );
    }
}
