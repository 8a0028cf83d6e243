// 控制台交互模块
//
// - cli_args: 共用的命令行参数和启动流程
// - input: 按空白切分的输入读取
// - formatter: 输出格式化
// - menu: 编号菜单主循环
// - reports: 查找和排序结果输出
// - *_session: 各练习的交互会话

pub mod cli_args;
pub mod formatter;
pub mod input;
pub mod list_session;
pub mod matrix_session;
pub mod menu;
pub mod queue_session;
pub mod reports;
pub mod stack_session;

pub use cli_args::CommonArgs;
pub use formatter::OutputFormatter;
pub use input::{ConsoleError, InputReader};
pub use list_session::ListSession;
pub use matrix_session::MatrixSession;
pub use menu::{Flow, Menu, MenuEntry};
pub use queue_session::QueueSession;
pub use reports::{write_search_report, write_sort_report};
pub use stack_session::{run_char_stack_demo, CharStackDemo, StackSession};
