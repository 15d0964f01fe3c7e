//! spangraph CLI 工具
//!
//! 交互式命令行界面，在内存图上执行增删改查和生成树算法

use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use spangraph::cli::{
    execute_line, CommandCompleter, CommandResult, ConsoleGraph, ConsoleState, OutputFormat,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// 历史记录文件名（位于用户主目录）
const HISTORY_FILE: &str = ".spangraph_history";

#[derive(Parser, Debug)]
#[command(name = "spangraph-cli")]
#[command(about = "spangraph 交互式图控制台")]
#[command(version)]
struct Args {
    /// 执行命令后退出（多条命令以 ; 分隔）
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志级别（覆盖 RUST_LOG），如 warn、debug、spangraph=trace
    #[arg(short, long)]
    log_level: Option<String>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 不读写历史记录
    #[arg(long)]
    no_history: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref())?;

    let mut state = ConsoleState::new();
    state.history_enabled = !args.no_history;
    if args.json {
        state.printer.set_format(OutputFormat::Json);
    }
    let mut graph = ConsoleGraph::new();

    // 单次执行模式
    if let Some(script) = args.execute {
        for command in script.split(';') {
            if !run_command(command, &mut state, &mut graph) {
                break;
            }
        }
        return Ok(());
    }

    println!("{}", format!("spangraph CLI v{}", spangraph::VERSION).bold());
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut editor: Editor<CommandCompleter, DefaultHistory> =
        Editor::new().context("无法初始化行编辑器")?;
    editor.set_helper(Some(CommandCompleter::new()));

    let history = history_path();
    if state.history_enabled {
        if let Some(path) = &history {
            // 首次运行时文件不存在
            let _ = editor.load_history(path);
        }
    }

    loop {
        match editor.readline("spangraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if state.history_enabled {
                    editor.add_history_entry(line)?;
                }
                let keep_running = run_command(line, &mut state, &mut graph);
                if let Some(helper) = editor.helper() {
                    helper.set_keys(graph.keys().cloned());
                }
                if !keep_running {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("读取输入失败"),
        }
    }

    if state.history_enabled {
        if let Some(path) = &history {
            if let Err(e) = editor.save_history(path) {
                tracing::warn!(path = %path.display(), error = %e, "保存历史记录失败");
            }
        }
    }

    println!("再见！");
    Ok(())
}

/// 执行一条命令并输出结果，返回是否继续运行
fn run_command(line: &str, state: &mut ConsoleState, graph: &mut ConsoleGraph) -> bool {
    match execute_line(line, state, graph) {
        CommandResult::Continue => true,
        CommandResult::Exit => false,
        CommandResult::Message(message) => {
            let message = if message.ends_with('\n') {
                message
            } else {
                message + "\n"
            };
            state.write_output(&message);
            true
        }
        CommandResult::Error(error) => {
            eprintln!("{} {}", "错误:".red().bold(), error);
            true
        }
    }
}

fn init_tracing(level: Option<&str>) -> anyhow::Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("无效的日志级别")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE))
}
