use bevy::prelude::*;

/// 拖拽松手的位置
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropTarget {
    Slot(usize),
    /// 已换算好的世界坐标
    World(Vec2),
}

/// 物品栏格子上的指针手势
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SlotGesture {
    Click(usize),
    BeginDrag(usize),
    EndDrag { slot: usize, target: DropTarget },
    HoverEnter(usize),
    HoverExit(usize),
}

#[derive(Event)]
pub struct ShowInventoryBar;   // 让 CLI 打印物品栏
