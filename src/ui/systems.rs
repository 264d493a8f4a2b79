use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::inventory::{
    components::InventoryLocation, events::InventoryUpdated, store::InventoryManager,
};
use crate::item::events::SpawnWorldItem;
use crate::player::components::Player;
use crate::player::events::{CarryEvent, PlayerInputLock};
use bevy::prelude::*;

/// 处理格子手势；数据修改全部交给 InventoryManager
pub fn handle_slot_gestures(
    mut ev_gesture: EventReader<SlotGesture>,
    mut bar: ResMut<InventoryBar>,
    mut manager: ResMut<InventoryManager>,
    mut ev_carry: EventWriter<CarryEvent>,
    mut ev_lock: EventWriter<PlayerInputLock>,
    mut ev_spawn: EventWriter<SpawnWorldItem>,
) {
    let mut fx = Vec::new();
    for gesture in ev_gesture.read() {
        match *gesture {
            SlotGesture::Click(slot) => bar.click(slot, &mut manager, &mut fx),
            SlotGesture::BeginDrag(slot) => bar.begin_drag(slot, &mut manager, &mut fx),
            SlotGesture::EndDrag { slot, target } => {
                bar.end_drag(slot, target, &mut manager, &mut fx);
                // 同一帧后续手势要看到仓库的最新内容
                bar.refresh(&mut manager, &mut fx);
            }
            SlotGesture::HoverEnter(slot) => bar.hover_enter(slot, &manager),
            SlotGesture::HoverExit(_) => bar.hover_exit(),
        }
    }
    send_effects(fx, &mut ev_carry, &mut ev_lock, &mut ev_spawn);
}

/// 收到玩家背包快照后重绘物品栏
pub fn inventory_updated(
    mut ev_updated: EventReader<InventoryUpdated>,
    mut bar: ResMut<InventoryBar>,
    mut manager: ResMut<InventoryManager>,
    mut ev_carry: EventWriter<CarryEvent>,
    mut ev_lock: EventWriter<PlayerInputLock>,
    mut ev_spawn: EventWriter<SpawnWorldItem>,
) {
    let mut fx = Vec::new();
    for ev in ev_updated.read() {
        if ev.location == InventoryLocation::Player {
            bar.inventory_updated(&ev.items, &mut manager, &mut fx);
        }
    }
    send_effects(fx, &mut ev_carry, &mut ev_lock, &mut ev_spawn);
}

fn send_effects(
    fx: Vec<BarEffect>,
    ev_carry: &mut EventWriter<CarryEvent>,
    ev_lock: &mut EventWriter<PlayerInputLock>,
    ev_spawn: &mut EventWriter<SpawnWorldItem>,
) {
    for effect in fx {
        match effect {
            BarEffect::Carry(ev) => {
                ev_carry.write(ev);
            }
            BarEffect::InputLock(ev) => {
                ev_lock.write(ev);
            }
            BarEffect::Spawn(ev) => {
                ev_spawn.write(ev);
            }
        }
    }
}

/// 玩家走到屏幕下方时把物品栏挪到顶部
pub fn switch_inventory_bar_position(
    mut bar: ResMut<InventoryBar>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    player_query: Query<&Transform, With<Player>>,
) {
    let (Ok((camera, camera_transform)), Ok(player)) = (camera_query.single(), player_query.single())
    else {
        return;
    };
    let Some(ndc) = camera.world_to_ndc(camera_transform, player.translation) else {
        return;
    };

    if bar.switch_position(ndc_to_viewport_y(ndc.y)) {
        debug!("物品栏移动到 {:?}", bar.position);
    }
}

/// NDC 的 y（-1 底，1 顶）换算成视口坐标（0 底，1 顶）
pub fn ndc_to_viewport_y(ndc_y: f32) -> f32 {
    (ndc_y + 1.0) / 2.0
}

pub fn show_inventory_bar(
    mut ev_show: EventReader<ShowInventoryBar>,
    bar: Res<InventoryBar>,
    mut log: EventWriter<LogEvent>,
) {
    if ev_show.is_empty() {
        return;
    }
    ev_show.clear();

    let mut out = format!("=== 物品栏 ({:?}) ===", bar.position);
    for slot in &bar.slots {
        let name = slot
            .item_details
            .as_ref()
            .map_or("-", |d| d.item_description.as_str());
        let mark = if slot.highlighted { "*" } else { " " };
        out.push_str(&format!("\n{mark}[{}] {name} {}", slot.slot_number, slot.text));
    }
    if let Some(tb) = &bar.text_box {
        out.push_str(&format!(
            "\n提示: {} | {} | {} ({:?})",
            tb.description, tb.type_description, tb.long_description, tb.anchor
        ));
    }
    if let Some(dragged) = &bar.dragged_item {
        out.push_str(&format!("\n拖拽中: 第 {} 格", dragged.slot));
    }
    log.write(LogEvent(out));
}
