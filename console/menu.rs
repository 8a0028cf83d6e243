use std::io::{BufRead, Write};

use super::{ConsoleError, InputReader, OutputFormatter};

/// 菜单处理一次选择后的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 菜单项：编号、显示文字和对应的动作
pub struct MenuEntry<A> {
    pub key: u32,
    pub label: &'static str,
    pub action: A,
}

/// 编号菜单，按编号把输入映射到动作
pub struct Menu<A: 'static> {
    entries: &'static [MenuEntry<A>],
}

impl<A: Copy + 'static> Menu<A> {
    pub const fn new(entries: &'static [MenuEntry<A>]) -> Self {
        Self { entries }
    }

    /// 查找编号对应的动作，未知编号返回 `None`
    pub fn action(&self, choice: u32) -> Option<A> {
        self.entries
            .iter()
            .find(|entry| entry.key == choice)
            .map(|entry| entry.action)
    }

    pub fn render(&self) -> String {
        let items: Vec<(u32, &str)> = self
            .entries
            .iter()
            .map(|entry| (entry.key, entry.label))
            .collect();
        OutputFormatter::format_menu(&items)
    }

    /// 菜单主循环
    ///
    /// 每轮输出菜单并读取一个编号；未知编号被忽略，非数字输入会重新提示。
    /// 处理函数返回 `Flow::Quit` 或输入结束时退出循环，把控制权交还调用方。
    pub fn run<R, W, F>(
        &self,
        input: &mut InputReader<R>,
        out: &mut W,
        mut handler: F,
    ) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
        F: FnMut(A, &mut InputReader<R>, &mut W) -> Result<Flow, ConsoleError>,
    {
        loop {
            writeln!(out, "{}", self.render())?;

            let choice: u32 = match input.prompt_value(out, "Enter your choice: ") {
                Ok(choice) => choice,
                Err(ConsoleError::Eof) => {
                    writeln!(out)?;
                    break;
                }
                Err(e) => return Err(e),
            };
            writeln!(out)?;
            writeln!(out, "{}", OutputFormatter::format_separator())?;

            let Some(action) = self.action(choice) else {
                tracing::debug!(choice, "ignored unknown menu choice");
                continue;
            };

            match handler(action, input, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                // 读取参数时输入结束，按退出处理
                Err(ConsoleError::Eof) => {
                    writeln!(out)?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}
