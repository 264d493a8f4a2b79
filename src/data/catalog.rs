use std::collections::HashMap;
use thiserror::Error;

use super::schema::{ItemCode, ItemDetails, ItemList};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate item code {0}")]
    DuplicateItemCode(ItemCode),
    #[error("item code 0 is reserved ({0})")]
    ReservedItemCode(String),
}

/// 物品编号 → 静态条目，启动时构建一次
#[derive(Debug, Default, Clone)]
pub struct ItemCatalog {
    details: HashMap<ItemCode, ItemDetails>,
}

impl ItemCatalog {
    pub fn from_list(list: &ItemList) -> Result<Self, CatalogError> {
        Self::from_details(list.items.iter().cloned())
    }

    pub fn from_details(
        items: impl IntoIterator<Item = ItemDetails>,
    ) -> Result<Self, CatalogError> {
        let mut details = HashMap::new();
        for item in items {
            if item.item_code == 0 {
                return Err(CatalogError::ReservedItemCode(item.item_description));
            }
            let code = item.item_code;
            if details.insert(code, item).is_some() {
                return Err(CatalogError::DuplicateItemCode(code));
            }
        }
        Ok(Self { details })
    }

    pub fn get(&self, item_code: ItemCode) -> Option<&ItemDetails> {
        self.details.get(&item_code)
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// 按编号排序，便于稳定输出
    pub fn iter_sorted(&self) -> impl Iterator<Item = &ItemDetails> {
        let mut items: Vec<_> = self.details.values().collect();
        items.sort_by_key(|d| d.item_code);
        items.into_iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::schema::ItemType;

    pub(crate) fn details(code: ItemCode, item_type: ItemType, name: &str) -> ItemDetails {
        ItemDetails {
            item_code: code,
            item_type,
            item_description: name.into(),
            item_long_description: format!("{name} (long)"),
            item_sprite: format!("sprites/items/{code}.png"),
            can_be_carried: true,
            can_be_dropped: true,
            can_be_picked_up: true,
        }
    }

    #[test]
    fn lookup_returns_configured_fields() {
        let catalog = ItemCatalog::from_details([
            details(10000, ItemType::Seed, "Parsnip Seeds"),
            details(10007, ItemType::HoeingTool, "Hoe"),
        ])
        .unwrap();

        let hoe = catalog.get(10007).unwrap();
        assert_eq!(hoe.item_description, "Hoe");
        assert_eq!(hoe.item_sprite, "sprites/items/10007.png");
        assert_eq!(hoe.item_long_description, "Hoe (long)");
        assert!(catalog.get(42).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let err = ItemCatalog::from_details([
            details(5, ItemType::Seed, "a"),
            details(5, ItemType::Commodity, "b"),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateItemCode(5));
    }

    #[test]
    fn code_zero_is_reserved() {
        let err = ItemCatalog::from_details([details(0, ItemType::Seed, "ghost")]).unwrap_err();
        assert_eq!(err, CatalogError::ReservedItemCode("ghost".into()));
    }

    #[test]
    fn iter_sorted_orders_by_code() {
        let catalog = ItemCatalog::from_details([
            details(3, ItemType::Seed, "c"),
            details(1, ItemType::Seed, "a"),
            details(2, ItemType::Seed, "b"),
        ])
        .unwrap();
        let codes: Vec<_> = catalog.iter_sorted().map(|d| d.item_code).collect();
        assert_eq!(codes, vec![1, 2, 3]);
    }
}
