//! 控制台命令处理
//!
//! 处理以 : 开头的控制台命令，其余输入交给图命令执行器

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use super::operations::execute_graph_command;
use super::printer::{OutputFormat, Printer};
use crate::graph::Graph;

/// 控制台操作的图：键和负载都是字符串
pub type ConsoleGraph = Graph<String, String>;

/// 控制台命令执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台状态
pub struct ConsoleState {
    /// 结果打印器（决定输出格式）
    pub printer: Printer,
    /// 是否记录历史
    pub history_enabled: bool,
    /// 输出到文件
    pub tee_file: Option<File>,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            printer: Printer::default(),
            history_enabled: true,
            tee_file: None,
        }
    }
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入输出（同时写入 stdout 和 tee 文件）
    pub fn write_output(&mut self, content: &str) {
        print!("{}", content);
        if let Some(ref mut file) = self.tee_file {
            let _ = file.write_all(content.as_bytes());
        }
    }
}

/// 执行一行输入：控制台命令或图命令
pub fn execute_line(input: &str, state: &mut ConsoleState, graph: &mut ConsoleGraph) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Continue;
    }
    if is_console_command(input) {
        return execute_console_command(input, state);
    }

    match execute_graph_command(input, graph, &state.printer) {
        Ok(result) => result,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// 解析并执行控制台命令
pub fn execute_console_command(input: &str, state: &mut ConsoleState) -> CommandResult {
    let input = input.trim();
    let cmd_line = input.strip_prefix(':').unwrap_or(input);

    let parts: Vec<&str> = cmd_line.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("").trim();

    match cmd.as_str() {
        "help" | "h" => CommandResult::Message(Printer::print_help()),

        "quit" | "q" | "exit" | "e" => CommandResult::Exit,

        "json" => {
            state.printer.set_format(OutputFormat::Json);
            CommandResult::Message("Output format: json".to_string())
        }

        "table" => {
            state.printer.set_format(OutputFormat::Table);
            CommandResult::Message("Output format: table".to_string())
        }

        "history" => match args {
            "on" => {
                state.history_enabled = true;
                CommandResult::Message("History enabled".to_string())
            }
            "off" => {
                state.history_enabled = false;
                CommandResult::Message("History disabled".to_string())
            }
            _ => CommandResult::Error("Usage: :history on|off".to_string()),
        },

        "tee" => {
            let args_parts: Vec<&str> = args.split_whitespace().collect();
            let (overwrite, filename) = if args_parts.first() == Some(&"-o") {
                (true, args_parts.get(1).copied())
            } else {
                (false, args_parts.first().copied())
            };

            let Some(filename) = filename else {
                return CommandResult::Error("Usage: :tee [-o] <filename>".to_string());
            };
            let path = PathBuf::from(filename);
            let file = if overwrite {
                File::create(&path)
            } else {
                File::options().create(true).append(true).open(&path)
            };

            match file {
                Ok(f) => {
                    state.tee_file = Some(f);
                    CommandResult::Message(format!("Logging to {}", filename))
                }
                Err(e) => CommandResult::Error(format!("Cannot open file: {}", e)),
            }
        }

        "notee" => {
            if state.tee_file.take().is_some() {
                CommandResult::Message("Stopped logging".to_string())
            } else {
                CommandResult::Message("No active logging".to_string())
            }
        }

        "clear" => {
            print!("\x1B[2J\x1B[1;1H");
            CommandResult::Continue
        }

        _ => CommandResult::Error(format!("Unknown command: {}. Type :help for help.", cmd)),
    }
}

/// 检查输入是否是控制台命令
pub fn is_console_command(input: &str) -> bool {
    input.trim().starts_with(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_commands() {
        let mut state = ConsoleState::new();

        assert_eq!(execute_console_command(":quit", &mut state), CommandResult::Exit);
        assert!(matches!(
            execute_console_command(":h", &mut state),
            CommandResult::Message(_)
        ));

        execute_console_command(":json", &mut state);
        assert_eq!(state.printer.format(), OutputFormat::Json);
        execute_console_command(":table", &mut state);
        assert_eq!(state.printer.format(), OutputFormat::Table);

        execute_console_command(":history off", &mut state);
        assert!(!state.history_enabled);
        assert!(matches!(
            execute_console_command(":history maybe", &mut state),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            execute_console_command(":bogus", &mut state),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_execute_line_dispatch() {
        let mut state = ConsoleState::new();
        let mut graph = ConsoleGraph::new();

        assert_eq!(execute_line("   ", &mut state, &mut graph), CommandResult::Continue);
        assert!(matches!(
            execute_line("add A alpha", &mut state, &mut graph),
            CommandResult::Message(_)
        ));
        assert_eq!(graph.get(&"A".to_string()).map(String::as_str), Some("alpha"));

        assert!(matches!(
            execute_line("dfs Z", &mut state, &mut graph),
            CommandResult::Message(_)
        ));
        assert!(matches!(
            execute_line("prim Z", &mut state, &mut graph),
            CommandResult::Error(_)
        ));
        assert_eq!(execute_line(":q", &mut state, &mut graph), CommandResult::Exit);
    }

    #[test]
    fn test_is_console_command() {
        assert!(is_console_command("  :help"));
        assert!(!is_console_command("help"));
    }
}
