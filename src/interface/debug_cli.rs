//! 文字 CLI：读取 stdin → 解析命令 → 转成手势 / 背包事件

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::core::{events::LogEvent, states::AppState};
use crate::data::schema::{ItemCode, ItemDetails};
use crate::inventory::{components::InventoryLocation, events::*, store::InventoryManager};
use crate::item::events::SpawnWorldItem;
use crate::ui::events::{DropTarget, ShowInventoryBar, SlotGesture};

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// give / remove 单条命令的数量上限
const MAX_COUNT: u32 = 999;

const HELP: &str = "命令列表:
  help                       查看帮助
  status                     查看当前状态
  exit / quit                退出程序
  items [code|name]          列出物品 / 查询单个物品
  give <code> [count] [loc]  放入物品（count 1-999，loc = player | chest）
  remove <code> [count] [loc]
  inv [loc]                  查看背包
  swap <from> <to> [loc]     交换两格
  bar                        查看物品栏
  click <slot>               点击格子（选中 / 取消）
  drag <slot> <to>           拖到另一格
  drop <slot> <x> <y>        拖到世界坐标处丢下
  hover <slot> / unhover     显示 / 隐藏提示框
  spawn <code> <x> <y>       在世界中生成物品";

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Ok(mut buf) = buffer.lock() {
                        buf.push_back(line.to_string());
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands
                    .before(crate::inventory::InventorySet::Mutate)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部；Some(token)=按编号 / 名称查询
    Give { location: InventoryLocation, item_code: ItemCode, count: u32 },
    Remove { location: InventoryLocation, item_code: ItemCode, count: u32 },
    Inventory(InventoryLocation),
    Swap { location: InventoryLocation, from: usize, to: usize },
    Bar,
    Gestures(Vec<SlotGesture>),
    Spawn { item_code: ItemCode, position: Vec2 },
    Usage(&'static str),
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let Ok(mut buffer) = CLI_BUFFER.lock() else {
        return;
    };
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    manager: Res<InventoryManager>,
    mut ev_give: EventWriter<GiveItemEvent>,
    mut ev_remove: EventWriter<RemoveItemEvent>,
    mut ev_swap: EventWriter<SwapItemsEvent>,
    mut ev_list: EventWriter<ListInventoryEvent>,
    mut ev_bar: EventWriter<ShowInventoryBar>,
    mut ev_gesture: EventWriter<SlotGesture>,
    mut ev_spawn: EventWriter<SpawnWorldItem>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(HELP.into()));
            }

            Command::Status => {
                log.write(LogEvent(format!(
                    "State: {:?}, Items Loaded: {}, Player slots used: {}",
                    state.get(),
                    manager.catalog().len(),
                    manager.inventory_list(InventoryLocation::Player).len()
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Success);
            }

            Command::Items(None) => {
                for entry in manager.catalog().iter_sorted() {
                    log.write(LogEvent(format!(
                        "{} | {} | {}",
                        uuid_from_code(entry.item_code),
                        entry.item_code,
                        entry.item_description
                    )));
                }
            }

            Command::Items(Some(token)) => {
                let found = manager.catalog().iter_sorted().find(|e| {
                    e.item_code.to_string() == token
                        || e.item_description.eq_ignore_ascii_case(&token)
                        || uuid_from_code(e.item_code).to_string() == token.to_lowercase()
                });
                match found {
                    Some(e) => log.write(LogEvent(describe_item(e, &manager))),
                    None => log.write(LogEvent("未找到匹配物品".into())),
                };
            }

            Command::Give { location, item_code, count } => {
                ev_give.write(GiveItemEvent { location, item_code, count });
            }

            Command::Remove { location, item_code, count } => {
                ev_remove.write(RemoveItemEvent { location, item_code, count });
            }

            Command::Inventory(location) => {
                ev_list.write(ListInventoryEvent(location));
            }

            Command::Swap { location, from, to } => {
                ev_swap.write(SwapItemsEvent { location, from, to });
            }

            Command::Bar => {
                ev_bar.write(ShowInventoryBar);
            }

            Command::Gestures(gestures) => {
                for gesture in gestures {
                    ev_gesture.write(gesture);
                }
                ev_bar.write(ShowInventoryBar);
            }

            Command::Spawn { item_code, position } => {
                ev_spawn.write(SpawnWorldItem { item_code, position });
            }

            Command::Usage(usage) => {
                log.write(LogEvent(format!("用法: {usage}")));
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let args: Vec<&str> = parts.collect();

    let num = |i: usize| args.get(i).and_then(|s| s.parse::<usize>().ok());
    let float = |i: usize| args.get(i).and_then(|s| s.parse::<f32>().ok());
    let code = |i: usize| args.get(i).and_then(|s| s.parse::<ItemCode>().ok());
    let count = |i: usize| match args.get(i) {
        None => Some(1),
        Some(s) => s.parse::<u32>().ok().filter(|n| (1..=MAX_COUNT).contains(n)),
    };
    let location = |i: usize| {
        args.get(i)
            .and_then(|s| InventoryLocation::parse(s))
            .unwrap_or(InventoryLocation::Player)
    };

    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => Command::Items(args.first().map(|s| s.to_string())),
        "give" => match (code(0), count(1)) {
            (Some(item_code), Some(count)) => Command::Give { location: location(2), item_code, count },
            _ => Command::Usage("give <code> [count 1-999] [loc]"),
        },
        "remove" | "rm" => match (code(0), count(1)) {
            (Some(item_code), Some(count)) => Command::Remove { location: location(2), item_code, count },
            _ => Command::Usage("remove <code> [count 1-999] [loc]"),
        },
        "inventory" | "inv" => Command::Inventory(location(0)),
        "swap" => match (num(0), num(1)) {
            (Some(from), Some(to)) => Command::Swap { location: location(2), from, to },
            _ => Command::Usage("swap <from> <to> [loc]"),
        },
        "bar" => Command::Bar,
        "click" => match num(0) {
            Some(slot) => Command::Gestures(vec![SlotGesture::Click(slot)]),
            None => Command::Usage("click <slot>"),
        },
        "drag" => match (num(0), num(1)) {
            (Some(slot), Some(to)) => Command::Gestures(vec![
                SlotGesture::BeginDrag(slot),
                SlotGesture::EndDrag { slot, target: DropTarget::Slot(to) },
            ]),
            _ => Command::Usage("drag <slot> <to>"),
        },
        "drop" => match (num(0), float(1), float(2)) {
            (Some(slot), Some(x), Some(y)) => Command::Gestures(vec![
                SlotGesture::BeginDrag(slot),
                SlotGesture::EndDrag { slot, target: DropTarget::World(Vec2::new(x, y)) },
            ]),
            _ => Command::Usage("drop <slot> <x> <y>"),
        },
        "hover" => match num(0) {
            Some(slot) => Command::Gestures(vec![SlotGesture::HoverEnter(slot)]),
            None => Command::Usage("hover <slot>"),
        },
        "unhover" => Command::Gestures(vec![SlotGesture::HoverExit(0)]),
        "spawn" => match (code(0), float(1), float(2)) {
            (Some(item_code), Some(x), Some(y)) => Command::Spawn {
                item_code,
                position: Vec2::new(x, y),
            },
            _ => Command::Usage("spawn <code> <x> <y>"),
        },
        other => Command::Unsupported(other.into()),
    }
}

fn describe_item(e: &ItemDetails, manager: &InventoryManager) -> String {
    format!(
        "==================================================
UUID : {}
Code : {}
Name : {}
Type : {}
Info : {}
Carry: {}  Drop: {}  Pick up: {}
==================================================",
        uuid_from_code(e.item_code),
        e.item_code,
        e.item_description,
        manager.item_type_description(e.item_type),
        e.item_long_description,
        e.can_be_carried,
        e.can_be_dropped,
        e.can_be_picked_up
    )
}

fn uuid_from_code(code: ItemCode) -> Uuid {
    // 用固定 namespace + 编号生成版本 5 UUID，保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, code.to_string().as_bytes())
}
