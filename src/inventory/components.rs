use crate::data::schema::ItemCode;

/// 背包所在位置，每个位置各有一个列表和一个选中物品
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryLocation {
    Player,
    Chest,
}

impl InventoryLocation {
    pub const COUNT: usize = 2;

    pub fn index(self) -> usize {
        match self {
            InventoryLocation::Player => 0,
            InventoryLocation::Chest => 1,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "player" | "p" => Some(Self::Player),
            "chest" | "c" => Some(Self::Chest),
            _ => None,
        }
    }
}

/// 背包中的一条堆叠，数量始终 ≥ 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryItem {
    pub item_code: ItemCode,
    pub item_quantity: i32,
}
