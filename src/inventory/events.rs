use bevy::prelude::*;

use super::components::{InventoryItem, InventoryLocation};
use crate::data::schema::ItemCode;

/// 某个位置的背包发生变化，携带完整快照
#[derive(Event, Debug, Clone, PartialEq)]
pub struct InventoryUpdated {
    pub location: InventoryLocation,
    pub items: Vec<InventoryItem>,
}

#[derive(Event)]
pub struct GiveItemEvent {
    pub location: InventoryLocation,
    pub item_code: ItemCode,
    pub count: u32,
}

#[derive(Event)]
pub struct RemoveItemEvent {
    pub location: InventoryLocation,
    pub item_code: ItemCode,
    pub count: u32,
}

#[derive(Event)]
pub struct SwapItemsEvent {
    pub location: InventoryLocation,
    pub from: usize,
    pub to: usize,
}

#[derive(Event)]
pub struct ListInventoryEvent(pub InventoryLocation);   // 让 CLI 请求打印背包
