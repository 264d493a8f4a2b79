use bevy::prelude::*;

use super::resources::GameConfig;

/// 文字日志：由 main 统一打印到终端
#[derive(Event)]
pub struct LogEvent(pub String);

pub fn announce_config(config: Res<GameConfig>, mut writer: EventWriter<LogEvent>) {
    writer.write(LogEvent(format!(
        "背包容量 {}，物品栏 {} 格",
        config.player_initial_inventory_capacity, config.inventory_bar_slots
    )));
}
