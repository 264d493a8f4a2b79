use bevy::asset::{io::Reader, ron, AssetLoader, LoadContext};
use std::future::Future;
use thiserror::Error;

use super::schema::ItemList;

#[derive(Default)]
pub struct RonItemLoader;

#[derive(Debug, Error)]
pub enum RonItemLoaderError {
    #[error("Could not load asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Could not interpret bytes as UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// 解析 RON 文本，加载器和测试共用
pub fn parse_item_list(bytes: &[u8]) -> Result<ItemList, RonItemLoaderError> {
    let s = std::str::from_utf8(bytes)?;
    Ok(ron::de::from_str(s)?)
}

impl AssetLoader for RonItemLoader {
    type Asset = ItemList;
    type Settings = ();
    type Error = RonItemLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext,
    ) -> impl Future<Output = Result<Self::Asset, Self::Error>> + Send {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            parse_item_list(&bytes)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["ron"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::ItemType;

    #[test]
    fn parses_item_list_with_defaults() {
        let list = parse_item_list(
            br#"(
                items: [
                    (
                        item_code: 10007,
                        item_type: HoeingTool,
                        item_description: "Hoe",
                        item_sprite: "sprites/items/hoe.png",
                        can_be_carried: true,
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(list.items.len(), 1);
        let hoe = &list.items[0];
        assert_eq!(hoe.item_code, 10007);
        assert_eq!(hoe.item_type, ItemType::HoeingTool);
        assert!(hoe.can_be_carried);
        assert!(!hoe.can_be_dropped);
        assert_eq!(hoe.item_long_description, "");
    }

    #[test]
    fn rejects_unknown_item_type() {
        let err = parse_item_list(
            br#"(items: [(item_code: 1, item_type: Spaceship, item_description: "x", item_sprite: "x")])"#,
        );
        assert!(matches!(err, Err(RonItemLoaderError::Ron(_))));
    }

    #[test]
    fn bundled_item_list_builds_a_catalog() {
        let list = parse_item_list(include_bytes!("../../assets/data/items.ron")).unwrap();
        let catalog = crate::data::catalog::ItemCatalog::from_list(&list).unwrap();

        assert_eq!(catalog.len(), list.items.len());
        let grass = catalog.get(10020).unwrap();
        assert_eq!(grass.item_type, ItemType::ReapableScenery);
        assert!(!grass.can_be_picked_up);
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(matches!(
            parse_item_list(&[0xff, 0xfe]),
            Err(RonItemLoaderError::Utf8(_))
        ));
    }
}
