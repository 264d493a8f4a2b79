use super::{components::*, events::*};
use crate::core::resources::GameConfig;
use crate::data::schema::ItemType;
use crate::inventory::{components::InventoryLocation, store::InventoryManager};
use crate::player::components::Player;
use bevy::prelude::*;

/// 摇晃步序：先转 4 步，再反向 5 步，最后回正 1 步
const NUDGE_STEPS: [f32; 10] = [1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 1.0];
const NUDGE_DEGREES: f32 = 2.0;

/// 第 `step` 步要转的角度（度），步序走完返回 None
pub fn nudge_step_degrees(step: usize, clockwise: bool) -> Option<f32> {
    let sign = if clockwise { -1.0 } else { 1.0 };
    NUDGE_STEPS.get(step).map(|dir| dir * sign * NUDGE_DEGREES)
}

pub fn spawn_world_items(mut ev_spawn: EventReader<SpawnWorldItem>, mut commands: Commands) {
    for ev in ev_spawn.read() {
        commands.spawn((
            WorldItem { item_code: ev.item_code },
            Transform::from_translation(ev.position.extend(0.0)),
        ));
    }
}

/// 新出现的物品绑定目录条目：写入精灵图和行为
pub fn bind_world_items(
    mut commands: Commands,
    manager: Res<InventoryManager>,
    added: Query<(Entity, &WorldItem), Added<WorldItem>>,
) {
    for (entity, item) in &added {
        // 0 表示占位，尚未初始化
        if item.item_code == 0 {
            continue;
        }
        let Some(details) = manager.item_details(item.item_code) else {
            warn!("世界物品引用了未知编号 {}", item.item_code);
            continue;
        };

        let behavior = match details.item_type {
            ItemType::ReapableScenery => ItemBehavior::Nudge(NudgeState::default()),
            _ => ItemBehavior::Static,
        };
        commands.entity(entity).insert((
            ItemSprite(details.item_sprite.clone()),
            behavior,
            PlayerContact::default(),
        ));
    }
}

/// 更新玩家与物品的接触状态
pub fn track_player_contact(
    config: Res<GameConfig>,
    player_query: Query<&Transform, With<Player>>,
    mut items: Query<(&Transform, &ItemBehavior, &mut PlayerContact), Without<Player>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let player_pos = player.translation.truncate();

    for (transform, behavior, mut contact) in &mut items {
        let radius = match behavior {
            ItemBehavior::Nudge(_) => config.nudge_radius,
            ItemBehavior::Static => config.pickup_radius,
        };
        let inside = transform.translation.truncate().distance(player_pos) <= radius;
        contact.just_entered = contact.primed && inside && !contact.inside;
        contact.inside = inside;
        contact.primed = true;
        contact.player_x = player_pos.x;
    }
}

/// 玩家碰到可拾取物品时放入背包并移除实体
pub fn pickup_items(
    mut commands: Commands,
    mut manager: ResMut<InventoryManager>,
    items: Query<(Entity, &WorldItem, &PlayerContact)>,
) {
    for (entity, item, contact) in &items {
        if !contact.just_entered {
            continue;
        }
        let can_pick_up = manager
            .item_details(item.item_code)
            .is_some_and(|d| d.can_be_picked_up);
        if can_pick_up {
            manager.add_item(InventoryLocation::Player, item.item_code);
            commands.entity(entity).despawn();
        }
    }
}

/// 按行为标签分派
pub fn dispatch_item_behaviors(
    time: Res<Time>,
    mut items: Query<(&mut ItemBehavior, &PlayerContact, &mut Transform)>,
) {
    for (mut behavior, contact, mut transform) in &mut items {
        match behavior.as_mut() {
            ItemBehavior::Static => {}
            ItemBehavior::Nudge(state) => {
                if contact.just_entered {
                    // 玩家从左边来就顺时针倒
                    state.start(contact.player_x < transform.translation.x);
                }
                let Some(step) = state.step else {
                    continue;
                };
                state.timer.tick(time.delta());
                if !state.timer.just_finished() {
                    continue;
                }
                match nudge_step_degrees(step, state.clockwise) {
                    Some(deg) => {
                        transform.rotate_z(deg.to_radians());
                        state.step = Some(step + 1);
                    }
                    None => state.step = None,
                }
            }
        }
    }
}
