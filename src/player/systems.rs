use super::{components::*, events::*};
use crate::core::resources::GameConfig;
use crate::inventory::store::InventoryManager;
use bevy::prelude::*;

/// 斜向移动时两轴各乘的系数
const DIAGONAL_FACTOR: f32 = 0.71;

/// 由原始轴输入和 shift 状态推导移动参数
pub fn derive_movement(movement: &mut PlayerMovement, raw: Vec2, walk_held: bool, config: &GameConfig) {
    let mut input = raw;
    if input.x != 0.0 && input.y != 0.0 {
        input *= DIAGONAL_FACTOR;
    }
    movement.input = input;

    if input == Vec2::ZERO {
        movement.locomotion = Locomotion::Idle;
        return;
    }

    if walk_held {
        movement.locomotion = Locomotion::Walking;
        movement.speed = config.walking_speed;
    } else {
        movement.locomotion = Locomotion::Running;
        movement.speed = config.running_speed;
    }

    movement.facing = if input.x < 0.0 {
        Direction::Left
    } else if input.x > 0.0 {
        Direction::Right
    } else if input.y < 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
}

fn axis(keys: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keys.any_pressed(negative) {
        value -= 1.0;
    }
    if keys.any_pressed(positive) {
        value += 1.0;
    }
    value
}

fn movement_event(movement: &PlayerMovement, carried: &CarriedItem) -> MovementEvent {
    MovementEvent {
        input: movement.input,
        locomotion: movement.locomotion,
        facing: movement.facing,
        is_carrying: carried.is_carrying,
        arms: carried.arms,
    }
}

/// 读取键盘并广播动画参数
pub fn player_movement_input(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut ev_movement: EventWriter<MovementEvent>,
    mut player_query: Query<(&mut PlayerMovement, &CarriedItem), With<Player>>,
) {
    let Ok((mut movement, carried)) = player_query.single_mut() else {
        return;
    };
    if movement.input_disabled {
        return;
    }

    let raw = Vec2::new(
        axis(&keys, [KeyCode::KeyA, KeyCode::ArrowLeft], [KeyCode::KeyD, KeyCode::ArrowRight]),
        axis(&keys, [KeyCode::KeyS, KeyCode::ArrowDown], [KeyCode::KeyW, KeyCode::ArrowUp]),
    );
    let walk_held = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    derive_movement(&mut movement, raw, walk_held, &config);
    ev_movement.write(movement_event(&movement, carried));
}

/// 固定步长内积分位移
pub fn player_movement(
    time: Res<Time>,
    mut player_query: Query<(&PlayerMovement, &mut Transform), With<Player>>,
) {
    for (movement, mut transform) in &mut player_query {
        let step = movement.input * movement.speed * time.delta_secs();
        transform.translation += step.extend(0.0);
    }
}

pub fn handle_input_lock(
    mut ev_lock: EventReader<PlayerInputLock>,
    mut ev_movement: EventWriter<MovementEvent>,
    mut player_query: Query<(&mut PlayerMovement, &CarriedItem), With<Player>>,
) {
    for ev in ev_lock.read() {
        let Ok((mut movement, carried)) = player_query.single_mut() else {
            continue;
        };
        match ev {
            PlayerInputLock::DisableAndReset => {
                movement.input_disabled = true;
                movement.reset();
                ev_movement.write(movement_event(&movement, carried));
            }
            PlayerInputLock::Enable => movement.input_disabled = false,
        }
    }
}

/// 手持物品显示：查不到物品时保持原样
pub fn handle_carry_events(
    mut ev_carry: EventReader<CarryEvent>,
    manager: Res<InventoryManager>,
    mut player_query: Query<&mut CarriedItem, With<Player>>,
) {
    for ev in ev_carry.read() {
        let Ok(mut carried) = player_query.single_mut() else {
            continue;
        };
        match ev {
            CarryEvent::Show(item_code) => {
                if let Some(details) = manager.item_details(*item_code) {
                    carried.show(details);
                }
            }
            CarryEvent::Clear => carried.clear(),
        }
    }
}

/// 初始化玩家实体
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        PlayerMovement::default(),
        CarriedItem::default(),
        Transform::default(),
    ));
}
