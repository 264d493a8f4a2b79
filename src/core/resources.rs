use anyhow::Context;
use bevy::prelude::*;
use serde_derive::Deserialize;
use std::path::Path;

pub const CONFIG_PATH: &str = "assets/config/settings.toml";

/// 全局配置（启动时从 TOML 读取一次）
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub walking_speed: f32,
    pub running_speed: f32,
    pub player_initial_inventory_capacity: usize,
    pub chest_inventory_capacity: usize,
    /// 物品栏 UI 的固定格数
    pub inventory_bar_slots: usize,
    pub blank_sprite: String,
    pub pickup_radius: f32,
    pub nudge_radius: f32,
    pub tool_labels: ToolLabels,
}

/// 工具类物品的显示名
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolLabels {
    pub watering_tool: String,
    pub hoeing_tool: String,
    pub chopping_tool: String,
    pub breaking_tool: String,
    pub reaping_tool: String,
    pub collecting_tool: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            walking_speed: 2.666,
            running_speed: 5.333,
            player_initial_inventory_capacity: 24,
            chest_inventory_capacity: 0,
            inventory_bar_slots: 12,
            blank_sprite: "sprites/blank16x16.png".into(),
            pickup_radius: 0.5,
            nudge_radius: 0.6,
            tool_labels: ToolLabels::default(),
        }
    }
}

impl Default for ToolLabels {
    fn default() -> Self {
        Self {
            watering_tool: "Watering Can".into(),
            hoeing_tool: "Hoe".into(),
            chopping_tool: "Axe".into(),
            breaking_tool: "Pickaxe".into(),
            reaping_tool: "Scythe".into(),
            collecting_tool: "Basket".into(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("invalid settings TOML")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// 读取失败时退回默认值，只打警告
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("使用默认配置: {e:#}");
                Self::default()
            }
        }
    }
}
