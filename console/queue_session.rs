use std::io::{BufRead, Write};

use super::menu::{Flow, Menu, MenuEntry};
use super::{ConsoleError, InputReader, OutputFormatter};
use crate::structures::Queue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueAction {
    Enqueue,
    Dequeue,
    Display,
    Exit,
}

const QUEUE_MENU: Menu<QueueAction> = Menu::new(&[
    MenuEntry {
        key: 1,
        label: "Enqueue",
        action: QueueAction::Enqueue,
    },
    MenuEntry {
        key: 2,
        label: "Dequeue",
        action: QueueAction::Dequeue,
    },
    MenuEntry {
        key: 3,
        label: "Display",
        action: QueueAction::Display,
    },
    MenuEntry {
        key: 4,
        label: "Exit",
        action: QueueAction::Exit,
    },
]);

/// 整数队列的交互会话
pub struct QueueSession {
    queue: Queue,
}

impl QueueSession {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Queue::new(capacity),
        }
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<R>,
        out: &mut W,
    ) -> Result<(), ConsoleError> {
        tracing::info!(capacity = self.queue.capacity(), "queue session started");
        let queue = &mut self.queue;

        QUEUE_MENU.run(input, out, |action, input, out| {
            match action {
                QueueAction::Enqueue => {
                    let value: i32 = input.prompt_value(out, "Enter value: ")?;
                    match queue.enqueue(value) {
                        Ok(()) => {
                            tracing::debug!(value, len = queue.len(), "enqueued");
                            writeln!(out, "Inserted Element:- {}", value)?;
                        }
                        Err(e) => {
                            tracing::warn!(value, "{}", e);
                            writeln!(out, "{}", OutputFormatter::format_error("Queue Overflow!"))?;
                        }
                    }
                }
                QueueAction::Dequeue => match queue.dequeue() {
                    Ok(value) => {
                        tracing::debug!(value, len = queue.len(), "dequeued");
                        writeln!(out, "Deleted Element:- {}", value)?;
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        writeln!(out, "{}", OutputFormatter::format_error("Queue Underflow"))?;
                    }
                },
                QueueAction::Display => {
                    if queue.is_empty() {
                        writeln!(
                            out,
                            "{}",
                            OutputFormatter::format_notice("No elements to display!!")
                        )?;
                    } else {
                        writeln!(out, "{}", OutputFormatter::format_values(queue.as_slice(), " "))?;
                    }
                }
                QueueAction::Exit => return Ok(Flow::Quit),
            }
            Ok(Flow::Continue)
        })?;

        tracing::info!(len = self.queue.len(), "queue session finished");
        Ok(())
    }
}
