use std::io::{BufRead, Write};

use super::menu::{Flow, Menu, MenuEntry};
use super::{ConsoleError, InputReader, OutputFormatter};
use crate::structures::{LinkedList, StructureError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    InsertFront,
    InsertEnd,
    InsertAt,
    DeleteFront,
    DeleteEnd,
    DeleteAt,
    Display,
    Sort,
    Count,
    Reverse,
    Exit,
}

const LIST_MENU: Menu<ListAction> = Menu::new(&[
    MenuEntry {
        key: 1,
        label: "Insert at Front",
        action: ListAction::InsertFront,
    },
    MenuEntry {
        key: 2,
        label: "Insert at End",
        action: ListAction::InsertEnd,
    },
    MenuEntry {
        key: 3,
        label: "Insert at Position",
        action: ListAction::InsertAt,
    },
    MenuEntry {
        key: 4,
        label: "Delete at Front",
        action: ListAction::DeleteFront,
    },
    MenuEntry {
        key: 5,
        label: "Delete at End",
        action: ListAction::DeleteEnd,
    },
    MenuEntry {
        key: 6,
        label: "Delete at Position",
        action: ListAction::DeleteAt,
    },
    MenuEntry {
        key: 7,
        label: "Display Linked List",
        action: ListAction::Display,
    },
    MenuEntry {
        key: 8,
        label: "Sort Linked List",
        action: ListAction::Sort,
    },
    MenuEntry {
        key: 9,
        label: "Count Nodes",
        action: ListAction::Count,
    },
    MenuEntry {
        key: 10,
        label: "Reverse Linked List",
        action: ListAction::Reverse,
    },
    MenuEntry {
        key: 11,
        label: "Exit",
        action: ListAction::Exit,
    },
]);

/// 输出链表操作失败的原因
fn report_error<W: Write>(error: StructureError, out: &mut W) -> Result<(), ConsoleError> {
    tracing::warn!("{}", error);
    let message = match error {
        StructureError::Empty => OutputFormatter::format_notice("List is empty"),
        other => OutputFormatter::format_error(&other.to_string()),
    };
    writeln!(out, "{}", message)?;
    Ok(())
}

/// 输出删除结果
fn report_deleted<W: Write>(
    result: Result<i32, StructureError>,
    out: &mut W,
) -> Result<(), ConsoleError> {
    match result {
        Ok(value) => {
            tracing::debug!(value, "deleted");
            writeln!(out, "Deleted-> {}", value)?;
            Ok(())
        }
        Err(e) => report_error(e, out),
    }
}

/// 单向链表的交互会话
#[derive(Default)]
pub struct ListSession {
    list: LinkedList,
}

impl ListSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &LinkedList {
        &self.list
    }

    /// 运行菜单循环；退出后释放所有节点
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<R>,
        out: &mut W,
    ) -> Result<(), ConsoleError> {
        tracing::info!("linked list session started");
        let list = &mut self.list;

        LIST_MENU.run(input, out, |action, input, out| {
            match action {
                ListAction::InsertFront => {
                    let value: i32 = input.prompt_value(out, "Enter value to insert: ")?;
                    list.insert_front(value);
                    tracing::debug!(value, "inserted at front");
                }
                ListAction::InsertEnd => {
                    let value: i32 = input.prompt_value(out, "Enter value to insert: ")?;
                    list.insert_end(value);
                    tracing::debug!(value, "inserted at end");
                }
                ListAction::InsertAt => {
                    let value: i32 = input.prompt_value(out, "Enter value to insert: ")?;
                    let pos: usize = input.prompt_value(out, "Enter position: ")?;
                    match list.insert_at(value, pos) {
                        Ok(()) => tracing::debug!(value, pos, "inserted at position"),
                        Err(e) => report_error(e, out)?,
                    }
                }
                ListAction::DeleteFront => report_deleted(list.delete_front(), out)?,
                ListAction::DeleteEnd => report_deleted(list.delete_end(), out)?,
                ListAction::DeleteAt => {
                    let pos: usize = input.prompt_value(out, "Enter position: ")?;
                    report_deleted(list.delete_at(pos), out)?;
                }
                ListAction::Display => {
                    if list.is_empty() {
                        writeln!(out, "{}", OutputFormatter::format_notice("List is empty"))?;
                    } else {
                        writeln!(out, "{}", OutputFormatter::format_values(&list.values(), " "))?;
                    }
                }
                ListAction::Sort => list.sort(),
                ListAction::Count => writeln!(out, "Count: {}", list.count())?,
                ListAction::Reverse => {
                    if let Err(e) = list.reverse() {
                        report_error(e, out)?;
                    }
                }
                ListAction::Exit => return Ok(Flow::Quit),
            }
            Ok(Flow::Continue)
        })?;

        self.list.teardown();
        tracing::info!("linked list session finished");
        Ok(())
    }
}
