//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全：首个单词补全命令，其后补全顶点键

use std::collections::BTreeSet;

use parking_lot::RwLock;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 图命令列表
const GRAPH_COMMANDS: &[&str] = &[
    "add", "remove", "rm", "connect", "dconnect", "disconnect", "disconnect-all",
    "weight", "get", "vertex", "vertices", "edges", "stats", "info",
    "dfs", "bfs", "topo", "path", "distances",
    "dfspan", "bfspan", "prim", "kruskal",
    "help", "quit", "exit",
];

/// 控制台命令列表
const CONSOLE_COMMANDS: &[&str] = &[
    ":help", ":h",
    ":quit", ":q",
    ":exit", ":e",
    ":json",
    ":table",
    ":tee",
    ":notee",
    ":history",
    ":clear",
];

/// 子命令映射
fn get_sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        ":history" => Some(&["on", "off"]),
        ":tee" => Some(&["-o"]),
        _ => None,
    }
}

/// 接受顶点键作为参数的命令
fn takes_vertex_keys(command: &str) -> bool {
    !matches!(
        command,
        "vertices" | "edges" | "stats" | "info" | "topo" | "help" | "quit" | "exit"
    ) && !command.starts_with(':')
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<Pair> {
    candidates
        .filter(|c| c.starts_with(prefix))
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// spangraph 控制台补全器
#[derive(Default)]
pub struct CommandCompleter {
    /// 当前图中的顶点键，由控制台在每条命令后刷新
    keys: RwLock<BTreeSet<String>>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换可补全的顶点键
    pub fn set_keys<I: IntoIterator<Item = String>>(&self, keys: I) {
        *self.keys.write() = keys.into_iter().collect();
    }

    /// 计算补全候选，返回替换起始位置
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.is_empty() && !line_to_cursor.ends_with(' ');

        // 正在输入的单词及其前面的完整单词
        let (current, previous) = match (at_word_end, words.split_last()) {
            (true, Some((last, rest))) => (*last, rest),
            _ => ("", words.as_slice()),
        };
        let start_pos = pos - current.len();

        let Some(command) = previous.first() else {
            let completions = if current.starts_with(':') {
                pairs(CONSOLE_COMMANDS.iter().copied(), current)
            } else {
                pairs(GRAPH_COMMANDS.iter().copied(), &current.to_lowercase())
            };
            return (start_pos, completions);
        };

        let command = command.to_lowercase();
        if let Some(sub_cmds) = get_sub_commands(&command) {
            return (start_pos, pairs(sub_cmds.iter().copied(), current));
        }
        if takes_vertex_keys(&command) {
            let keys = self.keys.read();
            return (start_pos, pairs(keys.iter().map(String::as_str), current));
        }
        (start_pos, Vec::new())
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(completer: &CommandCompleter, line: &str) -> (usize, Vec<String>) {
        let (start, pairs) = completer.candidates(line, line.len());
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_command_completion() {
        let completer = CommandCompleter::new();

        assert_eq!(complete(&completer, "kr"), (0, vec!["kruskal".to_string()]));
        assert_eq!(
            complete(&completer, "disc").1,
            vec!["disconnect", "disconnect-all"]
        );
        assert_eq!(complete(&completer, ":j").1, vec![":json"]);
        assert_eq!(complete(&completer, ":history o").1, vec!["on", "off"]);
    }

    #[test]
    fn test_vertex_key_completion() {
        let completer = CommandCompleter::new();
        completer.set_keys(["Alpha", "Beta", "Alps"].map(String::from));

        assert_eq!(complete(&completer, "path Al"), (5, vec!["Alpha".to_string(), "Alps".to_string()]));
        assert_eq!(complete(&completer, "path Alpha ").1, vec!["Alpha", "Alps", "Beta"]);
        assert!(complete(&completer, "stats ").1.is_empty());
    }
}
