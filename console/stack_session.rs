use std::fmt::Display;
use std::io::{self, BufRead, Write};

use super::menu::{Flow, Menu, MenuEntry};
use super::{ConsoleError, InputReader, OutputFormatter};
use crate::structures::{CharStack, IntStack, Stack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAction {
    Push,
    Pop,
    Display,
    Peek,
    Exit,
}

const STACK_MENU: Menu<StackAction> = Menu::new(&[
    MenuEntry {
        key: 1,
        label: "Push",
        action: StackAction::Push,
    },
    MenuEntry {
        key: 2,
        label: "Pop",
        action: StackAction::Pop,
    },
    MenuEntry {
        key: 3,
        label: "Display",
        action: StackAction::Display,
    },
    MenuEntry {
        key: 4,
        label: "Peek",
        action: StackAction::Peek,
    },
    MenuEntry {
        key: 5,
        label: "Exit",
        action: StackAction::Exit,
    },
]);

/// 入栈并输出溢出提示，返回是否成功
pub fn push_value<T, W>(stack: &mut Stack<T>, value: T, out: &mut W) -> io::Result<bool>
where
    T: Copy + Default + Display,
    W: Write,
{
    match stack.push(value) {
        Ok(()) => {
            tracing::debug!(%value, len = stack.len(), "pushed");
            Ok(true)
        }
        Err(e) => {
            tracing::warn!(%value, "{}", e);
            writeln!(out, "{}", OutputFormatter::format_error("Stack Overflow!!"))?;
            Ok(false)
        }
    }
}

/// 出栈并输出取出的值或下溢提示
pub fn pop_value<T, W>(stack: &mut Stack<T>, out: &mut W) -> io::Result<Option<T>>
where
    T: Copy + Default + Display,
    W: Write,
{
    match stack.pop() {
        Ok(value) => {
            tracing::debug!(%value, len = stack.len(), "popped");
            writeln!(out, "{}", value)?;
            Ok(Some(value))
        }
        Err(e) => {
            tracing::warn!("{}", e);
            writeln!(out, "{}", OutputFormatter::format_error("Stack Underflow!!"))?;
            Ok(None)
        }
    }
}

/// 整数栈的交互会话
pub struct StackSession {
    stack: IntStack,
}

impl StackSession {
    pub fn new(capacity: usize) -> Self {
        Self {
            stack: IntStack::new(capacity),
        }
    }

    pub fn stack(&self) -> &IntStack {
        &self.stack
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<R>,
        out: &mut W,
    ) -> Result<(), ConsoleError> {
        tracing::info!(capacity = self.stack.capacity(), "stack session started");
        let stack = &mut self.stack;

        STACK_MENU.run(input, out, |action, input, out| {
            match action {
                StackAction::Push => {
                    let value: i32 = input.prompt_value(out, "Enter value: ")?;
                    push_value(stack, value, out)?;
                }
                StackAction::Pop => {
                    pop_value(stack, out)?;
                }
                StackAction::Display => {
                    writeln!(
                        out,
                        "{}",
                        OutputFormatter::format_stack_contents(stack.as_slice(), " ")
                    )?;
                }
                StackAction::Peek => match stack.peek() {
                    Some(value) => writeln!(
                        out,
                        "The element at the top of the Stack is {}",
                        value
                    )?,
                    None => writeln!(
                        out,
                        "{}",
                        OutputFormatter::format_notice("No elements in Stack")
                    )?,
                },
                StackAction::Exit => return Ok(Flow::Quit),
            }
            Ok(Flow::Continue)
        })?;

        tracing::info!(len = self.stack.len(), "stack session finished");
        Ok(())
    }
}

/// 字符栈演示的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharStackDemo {
    /// 显示时从栈底到栈顶的内容
    pub displayed: String,
    /// 依次弹出的字符
    pub popped: String,
    /// 下溢次数（包括最后一次额外的出栈）
    pub underflows: usize,
    /// 演示结束后栈中剩余的元素个数
    pub remaining: usize,
}

/// 字符栈演示：逐个压入 `text` 的字符，显示，再弹出同样次数，最后多弹出一次
pub fn run_char_stack_demo<W: Write>(
    text: &str,
    capacity: usize,
    out: &mut W,
) -> Result<CharStackDemo, ConsoleError> {
    let mut stack = CharStack::new(capacity);
    let count = text.chars().count();

    for c in text.chars() {
        push_value(&mut stack, c, out)?;
    }

    writeln!(
        out,
        "{}",
        OutputFormatter::format_stack_contents(stack.as_slice(), "")
    )?;
    let displayed: String = stack.as_slice().iter().collect();

    // 弹出次数比压入次数多一次，最后一次必然下溢
    let mut popped = String::new();
    let mut underflows = 0;
    let mut line_open = false;
    for _ in 0..=count {
        match stack.pop() {
            Ok(c) => {
                popped.push(c);
                write!(out, "{}", c)?;
                line_open = true;
            }
            Err(e) => {
                tracing::warn!("{}", e);
                if line_open {
                    writeln!(out)?;
                    line_open = false;
                }
                writeln!(out, "{}", OutputFormatter::format_error("Stack Underflow!!"))?;
                underflows += 1;
            }
        }
    }
    if line_open {
        writeln!(out)?;
    }

    Ok(CharStackDemo {
        displayed,
        popped,
        underflows,
        remaining: stack.len(),
    })
}
