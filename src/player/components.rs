use bevy::prelude::*;

use crate::data::schema::ItemDetails;

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locomotion {
    #[default]
    Idle,
    Walking,
    Running,
}

/// 手臂动画的变体：空手 / 举着物品
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartVariantType {
    #[default]
    None,
    Carry,
}

/// 移动状态：输入轴、步态、朝向、速度
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerMovement {
    pub input: Vec2,
    pub locomotion: Locomotion,
    pub facing: Direction,
    pub speed: f32,
    pub input_disabled: bool,
}

impl PlayerMovement {
    /// 归零并回到站立
    pub fn reset(&mut self) {
        self.input = Vec2::ZERO;
        self.locomotion = Locomotion::Idle;
    }
}

/// 手持物品的表现状态，只是背包选中项的镜像
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CarriedItem {
    pub sprite: Option<String>,
    pub tint_alpha: f32,
    pub arms: PartVariantType,
    pub is_carrying: bool,
}

impl Default for CarriedItem {
    fn default() -> Self {
        Self {
            sprite: None,
            tint_alpha: 0.0,
            arms: PartVariantType::None,
            is_carrying: false,
        }
    }
}

impl CarriedItem {
    pub fn show(&mut self, details: &ItemDetails) {
        self.sprite = Some(details.item_sprite.clone());
        self.tint_alpha = 1.0;
        self.arms = PartVariantType::Carry;
        self.is_carrying = true;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
