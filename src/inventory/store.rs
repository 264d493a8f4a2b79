use bevy::prelude::*;

use super::components::{InventoryItem, InventoryLocation};
use super::events::InventoryUpdated;
use crate::core::resources::{GameConfig, ToolLabels};
use crate::data::catalog::ItemCatalog;
use crate::data::schema::{ItemCode, ItemDetails, ItemType};

/// 背包仓库：各位置的物品列表、选中物品以及物品目录
///
/// 所有修改都会把新快照放进待发队列，由 `flush_inventory_updates`
/// 在同一帧内转成 [`InventoryUpdated`] 事件。
#[derive(Resource, Debug)]
pub struct InventoryManager {
    catalog: ItemCatalog,
    tool_labels: ToolLabels,
    inventory_lists: [Vec<InventoryItem>; InventoryLocation::COUNT],
    /// 下标是位置，值是容量（目前只用于 UI，不限制添加）
    capacities: [usize; InventoryLocation::COUNT],
    selected_inventory_item: [Option<ItemCode>; InventoryLocation::COUNT],
    pending: Vec<InventoryUpdated>,
}

impl InventoryManager {
    pub fn new(catalog: ItemCatalog, config: &GameConfig) -> Self {
        let mut capacities = [0; InventoryLocation::COUNT];
        capacities[InventoryLocation::Player.index()] = config.player_initial_inventory_capacity;
        capacities[InventoryLocation::Chest.index()] = config.chest_inventory_capacity;

        Self {
            catalog,
            tool_labels: config.tool_labels.clone(),
            inventory_lists: Default::default(),
            capacities,
            selected_inventory_item: [None; InventoryLocation::COUNT],
            pending: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn inventory_list(&self, location: InventoryLocation) -> &[InventoryItem] {
        &self.inventory_lists[location.index()]
    }

    pub fn capacity(&self, location: InventoryLocation) -> usize {
        self.capacities[location.index()]
    }

    /// 已有同编号则数量 +1（位置不变），否则追加到末尾
    pub fn add_item(&mut self, location: InventoryLocation, item_code: ItemCode) {
        match self.find_item_in_inventory(location, item_code) {
            Some(position) => {
                self.inventory_lists[location.index()][position].item_quantity += 1;
            }
            None => self.inventory_lists[location.index()].push(InventoryItem {
                item_code,
                item_quantity: 1,
            }),
        }

        self.queue_update(location);
    }

    /// 数量 -1，归零时移除条目，后面的条目左移
    pub fn remove_item(&mut self, location: InventoryLocation, item_code: ItemCode) {
        if let Some(position) = self.find_item_in_inventory(location, item_code) {
            let list = &mut self.inventory_lists[location.index()];
            let quantity = list[position].item_quantity - 1;
            if quantity > 0 {
                list[position].item_quantity = quantity;
            } else {
                list.remove(position);
            }
        }

        self.queue_update(location);
    }

    /// 越界或相同下标时静默忽略，也不发通知
    pub fn swap_inventory_items(&mut self, location: InventoryLocation, from: usize, to: usize) {
        let list = &mut self.inventory_lists[location.index()];
        if from >= list.len() || to >= list.len() || from == to {
            return;
        }

        list.swap(from, to);
        self.queue_update(location);
    }

    pub fn find_item_in_inventory(
        &self,
        location: InventoryLocation,
        item_code: ItemCode,
    ) -> Option<usize> {
        self.inventory_lists[location.index()]
            .iter()
            .position(|item| item.item_code == item_code)
    }

    pub fn item_details(&self, item_code: ItemCode) -> Option<&ItemDetails> {
        self.catalog.get(item_code)
    }

    pub fn item_type_description(&self, item_type: ItemType) -> String {
        let labels = &self.tool_labels;
        match item_type {
            ItemType::WateringTool => labels.watering_tool.clone(),
            ItemType::HoeingTool => labels.hoeing_tool.clone(),
            ItemType::ChoppingTool => labels.chopping_tool.clone(),
            ItemType::BreakingTool => labels.breaking_tool.clone(),
            ItemType::ReapingTool => labels.reaping_tool.clone(),
            ItemType::CollectingTool => labels.collecting_tool.clone(),
            other => format!("{other:?}"),
        }
    }

    pub fn set_selected_inventory_item(&mut self, location: InventoryLocation, item_code: ItemCode) {
        self.selected_inventory_item[location.index()] = Some(item_code);
    }

    pub fn clear_selected_inventory_item(&mut self, location: InventoryLocation) {
        self.selected_inventory_item[location.index()] = None;
    }

    pub fn selected_inventory_item(&self, location: InventoryLocation) -> Option<ItemCode> {
        self.selected_inventory_item[location.index()]
    }

    /// 取出自上次调用以来排队的全部快照
    pub fn take_updates(&mut self) -> Vec<InventoryUpdated> {
        std::mem::take(&mut self.pending)
    }

    fn queue_update(&mut self, location: InventoryLocation) {
        self.pending.push(InventoryUpdated {
            location,
            items: self.inventory_lists[location.index()].clone(),
        });
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::catalog::tests::details;

    use InventoryLocation::{Chest, Player};

    pub(crate) fn manager() -> InventoryManager {
        let catalog = ItemCatalog::from_details([
            details(1, ItemType::Seed, "Parsnip Seeds"),
            details(2, ItemType::Commodity, "Parsnip"),
            details(3, ItemType::HoeingTool, "Hoe"),
            details(5, ItemType::Commodity, "Pumpkin"),
        ])
        .unwrap();
        InventoryManager::new(catalog, &GameConfig::default())
    }

    fn codes(m: &InventoryManager, location: InventoryLocation) -> Vec<(ItemCode, i32)> {
        m.inventory_list(location)
            .iter()
            .map(|i| (i.item_code, i.item_quantity))
            .collect()
    }

    #[test]
    fn adding_twice_stacks_at_first_position() {
        let mut m = manager();
        m.add_item(Player, 2);
        m.add_item(Player, 1);
        m.add_item(Player, 2);

        assert_eq!(codes(&m, Player), vec![(2, 2), (1, 1)]);
        assert_eq!(m.find_item_in_inventory(Player, 2), Some(0));
    }

    #[test]
    fn removing_last_unit_leaves_no_gap() {
        let mut m = manager();
        m.add_item(Player, 1);
        m.add_item(Player, 2);
        m.add_item(Player, 3);

        m.remove_item(Player, 2);

        assert_eq!(codes(&m, Player), vec![(1, 1), (3, 1)]);
        assert_eq!(m.find_item_in_inventory(Player, 3), Some(1));
    }

    #[test]
    fn stack_up_then_down_to_empty() {
        let mut m = manager();
        m.add_item(Player, 5);
        m.add_item(Player, 5);
        m.add_item(Player, 5);
        assert_eq!(codes(&m, Player), vec![(5, 3)]);

        m.remove_item(Player, 5);
        m.remove_item(Player, 5);
        assert_eq!(codes(&m, Player), vec![(5, 1)]);

        m.remove_item(Player, 5);
        assert!(m.inventory_list(Player).is_empty());
    }

    #[test]
    fn find_reports_missing_then_present() {
        let mut m = manager();
        assert_eq!(m.find_item_in_inventory(Player, 3), None);
        m.add_item(Player, 1);
        m.add_item(Player, 3);
        assert_eq!(m.find_item_in_inventory(Player, 3), Some(1));
    }

    #[test]
    fn remove_missing_item_still_notifies() {
        let mut m = manager();
        m.add_item(Player, 1);
        m.take_updates();

        m.remove_item(Player, 99);

        assert_eq!(codes(&m, Player), vec![(1, 1)]);
        let updates = m.take_updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].items, m.inventory_list(Player));
    }

    #[test]
    fn swap_exchanges_entries_and_is_self_inverse() {
        let mut m = manager();
        m.add_item(Player, 1);
        m.add_item(Player, 2);
        m.add_item(Player, 3);

        m.swap_inventory_items(Player, 0, 2);
        assert_eq!(codes(&m, Player), vec![(3, 1), (2, 1), (1, 1)]);

        m.swap_inventory_items(Player, 0, 2);
        assert_eq!(codes(&m, Player), vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn invalid_swaps_change_nothing_and_stay_silent() {
        let mut m = manager();
        m.add_item(Player, 1);
        m.add_item(Player, 2);
        m.take_updates();
        let before = m.inventory_list(Player).to_vec();

        m.swap_inventory_items(Player, 1, 1);
        m.swap_inventory_items(Player, 0, 2);
        m.swap_inventory_items(Player, 7, 0);

        assert_eq!(m.inventory_list(Player), before.as_slice());
        assert!(m.take_updates().is_empty());
    }

    #[test]
    fn every_mutation_queues_a_snapshot_for_its_location() {
        let mut m = manager();
        m.add_item(Chest, 1);
        m.add_item(Chest, 2);
        m.swap_inventory_items(Chest, 0, 1);

        let updates = m.take_updates();
        assert_eq!(updates.len(), 3);
        assert!(updates.iter().all(|u| u.location == Chest));
        assert_eq!(updates[2].items, m.inventory_list(Chest));
        assert!(m.inventory_list(Player).is_empty());
        assert!(m.take_updates().is_empty());
    }

    #[test]
    fn add_is_not_limited_by_capacity() {
        let mut m = manager();
        assert_eq!(m.capacity(Chest), 0);
        m.add_item(Chest, 1);
        m.add_item(Chest, 2);
        assert_eq!(m.inventory_list(Chest).len(), 2);
        assert_eq!(m.capacity(Player), 24);
    }

    #[test]
    fn selection_is_per_location_and_unvalidated() {
        let mut m = manager();
        assert_eq!(m.selected_inventory_item(Player), None);

        m.set_selected_inventory_item(Player, 42);
        assert_eq!(m.selected_inventory_item(Player), Some(42));
        assert_eq!(m.selected_inventory_item(Chest), None);

        m.clear_selected_inventory_item(Player);
        assert_eq!(m.selected_inventory_item(Player), None);
    }

    #[test]
    fn item_type_description_uses_labels_for_tools() {
        let m = manager();
        assert_eq!(m.item_type_description(ItemType::HoeingTool), "Hoe");
        assert_eq!(m.item_type_description(ItemType::WateringTool), "Watering Can");
        assert_eq!(m.item_type_description(ItemType::CollectingTool), "Basket");
        assert_eq!(m.item_type_description(ItemType::Seed), "Seed");
        assert_eq!(m.item_type_description(ItemType::ReapableScenery), "ReapableScenery");
    }

    #[test]
    fn item_details_lookup() {
        let m = manager();
        assert_eq!(m.item_details(3).map(|d| d.item_description.as_str()), Some("Hoe"));
        assert!(m.item_details(4).is_none());
    }
}
