use bevy::prelude::*;

use super::components::{Direction, Locomotion, PartVariantType};
use crate::data::schema::ItemCode;

/// 每帧广播的动画参数
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MovementEvent {
    pub input: Vec2,
    pub locomotion: Locomotion,
    pub facing: Direction,
    pub is_carrying: bool,
    pub arms: PartVariantType,
}

/// 手持物品的显示 / 清除，按发出顺序处理
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryEvent {
    Show(ItemCode),
    Clear,
}

/// 拖拽期间锁住玩家输入
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInputLock {
    DisableAndReset,
    Enable,
}
