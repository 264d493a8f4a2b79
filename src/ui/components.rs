use bevy::prelude::*;

use super::events::DropTarget;
use crate::data::schema::ItemDetails;
use crate::inventory::{
    components::{InventoryItem, InventoryLocation},
    store::InventoryManager,
};
use crate::item::events::SpawnWorldItem;
use crate::player::events::{CarryEvent, PlayerInputLock};

/// 玩家视口 y 高于此值时物品栏放在底部
pub const BAR_SWITCH_VIEWPORT_Y: f32 = 0.3;
/// 提示框相对格子的垂直偏移
pub const TEXT_BOX_OFFSET: f32 = 50.0;

/// 物品栏中的一格
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySlot {
    pub slot_number: usize,
    pub sprite: String,
    pub text: String,
    pub item_details: Option<ItemDetails>,
    pub item_quantity: i32,
    pub is_selected: bool,
    pub highlighted: bool,
}

impl InventorySlot {
    pub fn blank(slot_number: usize, blank_sprite: &str) -> Self {
        Self {
            slot_number,
            sprite: blank_sprite.to_string(),
            text: String::new(),
            item_details: None,
            item_quantity: 0,
            is_selected: false,
            highlighted: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_quantity == 0 || self.item_details.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarPosition {
    #[default]
    Bottom,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBoxAnchor {
    Above,
    Below,
}

/// 悬停提示框
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryTextBox {
    pub slot: usize,
    pub description: String,
    pub type_description: String,
    pub long_description: String,
    pub anchor: TextBoxAnchor,
    pub offset_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraggedItem {
    pub slot: usize,
    pub sprite: String,
}

/// 手势处理后需要发给其它插件的消息
#[derive(Debug, Clone, PartialEq)]
pub enum BarEffect {
    Carry(CarryEvent),
    InputLock(PlayerInputLock),
    Spawn(SpawnWorldItem),
}

/// 玩家物品栏：固定数量的格子，格子下标就是背包列表下标
#[derive(Resource, Debug, Clone)]
pub struct InventoryBar {
    pub slots: Vec<InventorySlot>,
    pub blank_sprite: String,
    pub position: BarPosition,
    pub text_box: Option<InventoryTextBox>,
    pub dragged_item: Option<DraggedItem>,
}

const LOCATION: InventoryLocation = InventoryLocation::Player;

impl InventoryBar {
    pub fn new(slot_count: usize, blank_sprite: &str) -> Self {
        Self {
            slots: (0..slot_count)
                .map(|i| InventorySlot::blank(i, blank_sprite))
                .collect(),
            blank_sprite: blank_sprite.to_string(),
            position: BarPosition::Bottom,
            text_box: None,
            dragged_item: None,
        }
    }

    /// 清空所有格子的内容（选中标记保留）
    pub fn clear_inventory_slots(&mut self) {
        for slot in &mut self.slots {
            slot.sprite = self.blank_sprite.clone();
            slot.text.clear();
            slot.item_details = None;
            slot.item_quantity = 0;
        }
    }

    /// 用新快照重绘全部格子
    pub fn inventory_updated(
        &mut self,
        items: &[InventoryItem],
        manager: &mut InventoryManager,
        fx: &mut Vec<BarEffect>,
    ) {
        self.clear_inventory_slots();

        for (slot, item) in self.slots.iter_mut().zip(items) {
            let Some(details) = manager.item_details(item.item_code) else {
                continue;
            };
            slot.sprite = details.item_sprite.clone();
            slot.text = item.item_quantity.to_string();
            slot.item_details = Some(details.clone());
            slot.item_quantity = item.item_quantity;
        }

        let previous = manager.selected_inventory_item(LOCATION);
        for slot in self.slots.iter_mut().filter(|s| s.is_selected) {
            match &slot.item_details {
                Some(details) => {
                    slot.highlighted = true;
                    manager.set_selected_inventory_item(LOCATION, details.item_code);
                    if previous != Some(details.item_code) {
                        fx.push(carry_effect(details));
                    }
                }
                None => {
                    slot.is_selected = false;
                    slot.highlighted = false;
                    manager.clear_selected_inventory_item(LOCATION);
                    fx.push(BarEffect::Carry(CarryEvent::Clear));
                }
            }
        }
    }

    /// 直接按仓库当前的玩家列表重绘
    pub fn refresh(&mut self, manager: &mut InventoryManager, fx: &mut Vec<BarEffect>) {
        let items = manager.inventory_list(LOCATION).to_vec();
        self.inventory_updated(&items, manager, fx);
    }

    pub fn clear_highlight_on_inventory_slots(&mut self, manager: &mut InventoryManager) {
        for slot in self.slots.iter_mut().filter(|s| s.is_selected) {
            slot.is_selected = false;
            slot.highlighted = false;
            manager.clear_selected_inventory_item(LOCATION);
        }
    }

    pub fn set_highlighted_inventory_slots(&mut self, manager: &mut InventoryManager) {
        for slot in &mut self.slots {
            if let (true, Some(details)) = (slot.is_selected, &slot.item_details) {
                slot.highlighted = true;
                manager.set_selected_inventory_item(LOCATION, details.item_code);
            }
        }
    }

    pub fn click(&mut self, slot: usize, manager: &mut InventoryManager, fx: &mut Vec<BarEffect>) {
        let Some(s) = self.slots.get(slot) else {
            return;
        };
        if s.is_selected {
            self.clear_selected_item(manager, fx);
        } else if s.item_quantity > 0 {
            self.set_selected_item(slot, manager, fx);
        }
    }

    pub fn begin_drag(&mut self, slot: usize, manager: &mut InventoryManager, fx: &mut Vec<BarEffect>) {
        let Some(s) = self.slots.get(slot).filter(|s| !s.is_empty()) else {
            return;
        };

        fx.push(BarEffect::InputLock(PlayerInputLock::DisableAndReset));
        self.dragged_item = Some(DraggedItem {
            slot,
            sprite: s.sprite.clone(),
        });
        self.set_selected_item(slot, manager, fx);
    }

    pub fn end_drag(
        &mut self,
        slot: usize,
        target: DropTarget,
        manager: &mut InventoryManager,
        fx: &mut Vec<BarEffect>,
    ) {
        if self.dragged_item.as_ref().is_none_or(|d| d.slot != slot) {
            return;
        }
        self.dragged_item = None;

        match target {
            DropTarget::Slot(to_slot) => {
                manager.swap_inventory_items(LOCATION, slot, to_slot);
                self.text_box = None;
                self.clear_selected_item(manager, fx);
            }
            DropTarget::World(position) => {
                let droppable = self.slots[slot]
                    .item_details
                    .as_ref()
                    .is_some_and(|d| d.can_be_dropped);
                if droppable {
                    self.drop_selected_item_at(slot, position, manager, fx);
                }
            }
        }

        fx.push(BarEffect::InputLock(PlayerInputLock::Enable));
    }

    fn drop_selected_item_at(
        &mut self,
        slot: usize,
        position: Vec2,
        manager: &mut InventoryManager,
        fx: &mut Vec<BarEffect>,
    ) {
        let s = &self.slots[slot];
        let Some(item_code) = s.item_details.as_ref().map(|d| d.item_code) else {
            return;
        };
        if !s.is_selected {
            return;
        }
        // 格子可能还是本帧旧内容，物品已不在背包里就不能再生成
        if manager.find_item_in_inventory(LOCATION, item_code).is_none() {
            self.clear_selected_item(manager, fx);
            return;
        }

        fx.push(BarEffect::Spawn(SpawnWorldItem {
            item_code,
            position,
        }));
        manager.remove_item(LOCATION, item_code);

        if manager.find_item_in_inventory(LOCATION, item_code).is_none() {
            self.clear_selected_item(manager, fx);
        }
    }

    pub fn hover_enter(&mut self, slot: usize, manager: &InventoryManager) {
        let Some(details) = self
            .slots
            .get(slot)
            .filter(|s| s.item_quantity > 0)
            .and_then(|s| s.item_details.as_ref())
        else {
            return;
        };

        let (anchor, offset_y) = match self.position {
            BarPosition::Bottom => (TextBoxAnchor::Above, TEXT_BOX_OFFSET),
            BarPosition::Top => (TextBoxAnchor::Below, -TEXT_BOX_OFFSET),
        };
        self.text_box = Some(InventoryTextBox {
            slot,
            description: details.item_description.clone(),
            type_description: manager.item_type_description(details.item_type),
            long_description: details.item_long_description.clone(),
            anchor,
            offset_y,
        });
    }

    pub fn hover_exit(&mut self) {
        self.text_box = None;
    }

    /// 根据玩家在视口中的高度切换物品栏位置，返回是否发生切换
    pub fn switch_position(&mut self, player_viewport_y: f32) -> bool {
        let wanted = if player_viewport_y > BAR_SWITCH_VIEWPORT_Y {
            BarPosition::Bottom
        } else {
            BarPosition::Top
        };
        let changed = wanted != self.position;
        self.position = wanted;
        changed
    }

    fn set_selected_item(&mut self, slot: usize, manager: &mut InventoryManager, fx: &mut Vec<BarEffect>) {
        self.clear_highlight_on_inventory_slots(manager);
        self.slots[slot].is_selected = true;
        self.set_highlighted_inventory_slots(manager);

        if let Some(details) = &self.slots[slot].item_details {
            manager.set_selected_inventory_item(LOCATION, details.item_code);
            fx.push(carry_effect(details));
        }
    }

    fn clear_selected_item(&mut self, manager: &mut InventoryManager, fx: &mut Vec<BarEffect>) {
        self.clear_highlight_on_inventory_slots(manager);
        manager.clear_selected_inventory_item(LOCATION);
        fx.push(BarEffect::Carry(CarryEvent::Clear));
    }
}

fn carry_effect(details: &ItemDetails) -> BarEffect {
    if details.can_be_carried {
        BarEffect::Carry(CarryEvent::Show(details.item_code))
    } else {
        BarEffect::Carry(CarryEvent::Clear)
    }
}
