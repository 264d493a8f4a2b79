use bevy::prelude::*;

use crate::data::schema::ItemCode;

/// 在世界坐标处生成物品
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnWorldItem {
    pub item_code: ItemCode,
    pub position: Vec2,
}
