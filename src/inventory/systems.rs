use super::{events::*, store::InventoryManager};
use crate::core::events::LogEvent;
use bevy::prelude::*;

/// 处理"give"——按数量逐个放入背包
pub fn give_item(
    mut ev_give: EventReader<GiveItemEvent>,
    mut manager: ResMut<InventoryManager>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_give.read() {
        let Some(name) = manager
            .item_details(ev.item_code)
            .map(|d| d.item_description.clone())
        else {
            warn!("不存在物品编号 {}", ev.item_code);
            continue;
        };

        for _ in 0..ev.count {
            manager.add_item(ev.location, ev.item_code);
        }
        log.write(LogEvent(format!("获得 {} ×{}", name, ev.count)));
    }
}

pub fn remove_item(
    mut ev_remove: EventReader<RemoveItemEvent>,
    mut manager: ResMut<InventoryManager>,
) {
    for ev in ev_remove.read() {
        for _ in 0..ev.count {
            manager.remove_item(ev.location, ev.item_code);
        }
    }
}

pub fn swap_items(mut ev_swap: EventReader<SwapItemsEvent>, mut manager: ResMut<InventoryManager>) {
    for ev in ev_swap.read() {
        manager.swap_inventory_items(ev.location, ev.from, ev.to);
    }
}

/// 把仓库里排队的快照转成事件，保证“先修改、后通知”
pub fn flush_inventory_updates(
    mut manager: ResMut<InventoryManager>,
    mut writer: EventWriter<InventoryUpdated>,
) {
    for update in manager.take_updates() {
        writer.write(update);
    }
}

/// 打印背包内容
pub fn print_inventory(
    mut ev_list: EventReader<ListInventoryEvent>,
    manager: Res<InventoryManager>,
    mut log: EventWriter<LogEvent>,
) {
    for ListInventoryEvent(location) in ev_list.read() {
        let list = manager.inventory_list(*location);
        let selected = manager.selected_inventory_item(*location);
        let mut out = format!(
            "=== {:?} 背包 ({}/{}) ===",
            location,
            list.len(),
            manager.capacity(*location)
        );

        if list.is_empty() {
            out.push_str("\n  (empty)");
        }
        for (idx, item) in list.iter().enumerate() {
            let name = manager
                .item_details(item.item_code)
                .map_or("<unknown>", |d| d.item_description.as_str());
            let mark = if selected == Some(item.item_code) { " *" } else { "" };
            out.push_str(&format!(
                "\n[{idx}] {name} ×{} (code={}){mark}",
                item.item_quantity, item.item_code
            ));
        }
        log.write(LogEvent(out));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::components::InventoryLocation;
    use crate::inventory::store::tests::manager;

    fn app() -> App {
        let mut app = App::new();
        app.insert_resource(manager())
            .add_event::<GiveItemEvent>()
            .add_event::<RemoveItemEvent>()
            .add_event::<SwapItemsEvent>()
            .add_event::<InventoryUpdated>()
            .add_event::<LogEvent>()
            .add_systems(
                Update,
                ((give_item, remove_item, swap_items), flush_inventory_updates).chain(),
            );
        app
    }

    fn updates(app: &App) -> Vec<InventoryUpdated> {
        app.world()
            .resource::<Events<InventoryUpdated>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    #[test]
    fn give_publishes_one_snapshot_per_unit() {
        let mut app = app();
        app.world_mut().send_event(GiveItemEvent {
            location: InventoryLocation::Player,
            item_code: 1,
            count: 3,
        });
        app.update();

        let updates = updates(&app);
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[2].items[0].item_quantity, 3);
    }

    #[test]
    fn give_unknown_code_is_ignored() {
        let mut app = app();
        app.world_mut().send_event(GiveItemEvent {
            location: InventoryLocation::Player,
            item_code: 777,
            count: 1,
        });
        app.update();

        assert!(updates(&app).is_empty());
        let m = app.world().resource::<InventoryManager>();
        assert!(m.inventory_list(InventoryLocation::Player).is_empty());
    }

    #[test]
    fn invalid_swap_publishes_nothing() {
        let mut app = app();
        app.world_mut().send_event(GiveItemEvent {
            location: InventoryLocation::Player,
            item_code: 1,
            count: 1,
        });
        app.update();

        app.world_mut().send_event(SwapItemsEvent {
            location: InventoryLocation::Player,
            from: 0,
            to: 0,
        });
        app.update();

        assert!(updates(&app).is_empty());
    }
}
