//! 交互式控制台
//!
//! 命令解析与执行、结果打印和 Tab 补全，供 `spangraph-cli` 使用

mod commands;
mod completer;
mod operations;
mod printer;

pub use commands::{
    execute_console_command, execute_line, is_console_command, CommandResult, ConsoleGraph,
    ConsoleState,
};
pub use completer::CommandCompleter;
pub use operations::execute_graph_command;
pub use printer::{OutputFormat, Printer};
