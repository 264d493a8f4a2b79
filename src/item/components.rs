use bevy::prelude::*;

use crate::data::schema::ItemCode;

/// 摆在世界里、可以被捡起的物品
#[derive(Component, Debug, Clone, Copy)]
pub struct WorldItem {
    pub item_code: ItemCode,
}

/// 绑定后写入的精灵图路径
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ItemSprite(pub String);

/// 物品的附加行为，由 `dispatch_item_behaviors` 统一解释
#[derive(Component, Debug, Clone)]
pub enum ItemBehavior {
    Static,
    Nudge(NudgeState),
}

/// 摇晃动画：每 0.04 秒走一步
#[derive(Debug, Clone)]
pub struct NudgeState {
    pub timer: Timer,
    pub step: Option<usize>,
    pub clockwise: bool,
}

impl Default for NudgeState {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.04, TimerMode::Repeating),
            step: None,
            clockwise: false,
        }
    }
}

impl NudgeState {
    pub fn start(&mut self, clockwise: bool) {
        if self.step.is_some() {
            return;
        }
        self.step = Some(0);
        self.clockwise = clockwise;
        self.timer.reset();
    }
}

/// 玩家是否与物品接触；`just_entered` 只在进入的那一帧为真
///
/// 第一次检测只记录初始状态：生成在玩家脚下的物品（例如刚丢出去的）
/// 要等玩家离开再回来才算进入。
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerContact {
    pub inside: bool,
    pub just_entered: bool,
    pub player_x: f32,
    pub primed: bool,
}
