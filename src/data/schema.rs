use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde_derive::Deserialize;

/// 物品编号，0 保留给“未初始化”
pub type ItemCode = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ItemType {
    Seed,
    Commodity,
    WateringTool,
    HoeingTool,
    ChoppingTool,
    BreakingTool,
    ReapingTool,
    CollectingTool,
    ReapableScenery,
    Furniture,
    None,
}

/// 静态物品表条目，加载后不再修改
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDetails {
    pub item_code: ItemCode,
    pub item_type: ItemType,
    pub item_description: String,
    #[serde(default)]
    pub item_long_description: String,
    /// 精灵图资源路径
    pub item_sprite: String,
    #[serde(default)] pub can_be_carried: bool,
    #[serde(default)] pub can_be_dropped: bool,
    #[serde(default)] pub can_be_picked_up: bool,
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemList {
    pub items: Vec<ItemDetails>,
}
