//! 图命令执行器
//!
//! 把一行文本命令映射到 `Graph` 的操作，并用 `Printer` 渲染结果。

use serde::Serialize;

use super::commands::{CommandResult, ConsoleGraph};
use super::printer::{OutputFormat, Printer};
use crate::error::{Error, Result};
use crate::graph::{Edge, Vertex};
use crate::types::{Weight, DEFAULT_WEIGHT};

/// 一条边的输出行
#[derive(Debug, Serialize)]
struct EdgeRow {
    start: String,
    end: String,
    weight: Weight,
}

impl From<&Edge<String>> for EdgeRow {
    fn from(edge: &Edge<String>) -> Self {
        Self {
            start: edge.start().clone(),
            end: edge.end().clone(),
            weight: edge.weight(),
        }
    }
}

/// 生成图的输出
#[derive(Debug, Serialize)]
struct SpanningReport {
    algorithm: &'static str,
    start: String,
    vertices: Vec<String>,
    edges: Vec<EdgeRow>,
    cost: Weight,
}

/// 单个顶点的详情
#[derive(Debug, Serialize)]
struct VertexReport {
    key: String,
    value: String,
    out_edges: Vec<EdgeRow>,
    in_edges: Vec<EdgeRow>,
}

/// 执行图命令
pub fn execute_graph_command(
    input: &str,
    graph: &mut ConsoleGraph,
    printer: &Printer,
) -> Result<CommandResult> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = words.first() else {
        return Ok(CommandResult::Continue);
    };
    let cmd = first.to_lowercase();
    let args = &words[1..];

    let message = match cmd.as_str() {
        "quit" | "exit" | "q" => return Ok(CommandResult::Exit),

        "help" | "h" | "?" => Printer::print_help(),

        "add" => {
            let key = arg(args, 0, "add <键> [负载]")?;
            let value = args[1..].join(" ");
            match graph.add(key.clone(), value) {
                Some(old) => format!("顶点 {} 负载已更新（原负载: {}）", key, old),
                None => format!("已添加顶点 {}", key),
            }
        }

        "remove" | "rm" => {
            let key = arg(args, 0, "remove <键>")?;
            if !graph.remove(&key) {
                return Err(Error::VertexNotFound(key));
            }
            format!("已删除顶点 {}", key)
        }

        "connect" | "dconnect" => {
            let usage = "connect|dconnect <A> <B> [权重]";
            let (a, b) = (arg(args, 0, usage)?, arg(args, 1, usage)?);
            let weight = match args.get(2) {
                Some(raw) => parse_weight(raw)?,
                None => DEFAULT_WEIGHT,
            };
            require_vertices(graph, [&a, &b])?;
            let created = if cmd == "connect" {
                graph.connect_with_weight(&a, &b, weight)
            } else {
                graph.directed_connect_with_weight(&a, &b, weight)
            };
            let arrow = if cmd == "connect" { "<->" } else { "->" };
            if created {
                format!("已连接 {} {} {} (权重 {})", a, arrow, b, weight)
            } else {
                format!("边已存在，权重更新为 {}: {} {} {}", weight, a, arrow, b)
            }
        }

        "disconnect" => {
            let usage = "disconnect <A> <B>";
            let (a, b) = (arg(args, 0, usage)?, arg(args, 1, usage)?);
            if !graph.disconnect(&a, &b) {
                return Err(Error::edge_not_found(&a, &b));
            }
            format!("已删除 {} -> {}", a, b)
        }

        "disconnect-all" => {
            let usage = "disconnect-all <A> <B>";
            let (a, b) = (arg(args, 0, usage)?, arg(args, 1, usage)?);
            require_vertices(graph, [&a, &b])?;
            if graph.disconnect_all(&a, &b) {
                format!("已删除 {} 与 {} 之间两个方向的边", a, b)
            } else {
                format!("{} 与 {} 之间不是双向连接，已删除存在的方向", a, b)
            }
        }

        "weight" => {
            let usage = "weight <A> <B> <权重>";
            let (a, b) = (arg(args, 0, usage)?, arg(args, 1, usage)?);
            let weight = parse_weight(&arg(args, 2, usage)?)?;
            if !graph.change_edge_weight(&a, &b, weight) {
                return Err(Error::edge_not_found(&a, &b));
            }
            format!("{} -> {} 的权重已改为 {}", a, b, weight)
        }

        "get" => {
            let key = arg(args, 0, "get <键>")?;
            graph
                .get(&key)
                .cloned()
                .ok_or_else(|| Error::VertexNotFound(key))?
        }

        "vertex" | "v" => {
            let key = arg(args, 0, "vertex <键>")?;
            let vertex = graph
                .get_vertex(&key)
                .ok_or_else(|| Error::VertexNotFound(key.clone()))?;
            let report = VertexReport {
                key: vertex.key().clone(),
                value: vertex.value().clone(),
                out_edges: vertex.out_edges().map(EdgeRow::from).collect(),
                in_edges: vertex.in_edges().map(EdgeRow::from).collect(),
            };
            let rows: Vec<Vec<String>> = vertex
                .out_edges()
                .map(|e| vec!["out".to_string(), e.to_string(), e.weight().to_string()])
                .chain(
                    vertex
                        .in_edges()
                        .map(|e| vec!["in".to_string(), e.to_string(), e.weight().to_string()]),
                )
                .collect();
            let header = format!(
                "顶点 {} (负载: {}, 出度: {}, 入度: {})\n",
                vertex.key(),
                vertex.value(),
                vertex.out_degree(),
                vertex.in_degree()
            );
            let body = printer.render(&["direction", "edge", "weight"], &rows, &report)?;
            match printer.format() {
                OutputFormat::Table => header + &body,
                OutputFormat::Json => body,
            }
        }

        "vertices" => {
            let rows: Vec<Vec<String>> = graph
                .vertices()
                .map(|v| {
                    vec![
                        v.key().clone(),
                        v.value().clone(),
                        v.out_degree().to_string(),
                        v.in_degree().to_string(),
                    ]
                })
                .collect();
            let keys: Vec<&String> = graph.keys().collect();
            printer.render(&["key", "value", "out", "in"], &rows, &keys)?
        }

        "edges" => {
            let edges: Vec<EdgeRow> = graph
                .vertices()
                .flat_map(|v| v.out_edges())
                .map(EdgeRow::from)
                .collect();
            render_edges(printer, &edges, &edges)?
        }

        "stats" | "info" => printer.print_stats(graph.len(), graph.edge_count()),

        "dfs" | "bfs" => {
            let start = arg(args, 0, "dfs|bfs <起点>")?;
            let order = if cmd == "dfs" {
                graph.depth_first_traversal(&start)
            } else {
                graph.breadth_first_traversal(&start)
            };
            render_order(printer, &order)?
        }

        "topo" => {
            let order = graph.topological_ordering()?;
            render_order(printer, &order)?
        }

        "path" => {
            let usage = "path <起点> <终点>";
            let (a, b) = (arg(args, 0, usage)?, arg(args, 1, usage)?);
            match graph.dij_shortest_path(&a, &b)? {
                Some(path) => {
                    let rows = vec![vec![
                        path.vertices.join(" -> "),
                        path.length.to_string(),
                        path.total_weight.to_string(),
                    ]];
                    printer.render(&["path", "length", "total_weight"], &rows, &path)?
                }
                None => format!("{} 无法到达 {}", a, b),
            }
        }

        "distances" => {
            let start = arg(args, 0, "distances <起点>")?;
            let tree = graph.shortest_path_tree(&start)?;
            let rows: Vec<Vec<String>> = graph
                .keys()
                .filter(|k| tree.reachable(k))
                .map(|k| vec![k.clone(), tree.distance_to(k).to_string()])
                .collect();
            printer.render(&["vertex", "distance"], &rows, &tree)?
        }

        "dfspan" | "bfspan" | "prim" | "kruskal" => {
            let start = arg(args, 0, "dfspan|bfspan|prim|kruskal <起点>")?;
            let (algorithm, span) = match cmd.as_str() {
                "dfspan" => ("depth_first_spanning", graph.depth_first_spanning(&start)?),
                "bfspan" => ("breadth_first_spanning", graph.breadth_first_spanning(&start)?),
                "prim" => ("primms", graph.primms(&start)?),
                _ => ("kruskals", graph.kruskals(&start)?),
            };
            let report = SpanningReport {
                algorithm,
                start,
                vertices: span.keys().cloned().collect(),
                edges: span
                    .vertices()
                    .flat_map(|v| v.out_edges())
                    .map(EdgeRow::from)
                    .collect(),
                cost: span.cost(),
            };
            let body = render_edges(printer, &report.edges, &report)?;
            match printer.format() {
                OutputFormat::Table => format!(
                    "{}{} 个顶点，总权重 {}\n",
                    body,
                    report.vertices.len(),
                    report.cost
                ),
                OutputFormat::Json => body,
            }
        }

        _ => {
            return Err(Error::CommandError(format!(
                "未知命令: {}。输入 'help' 查看帮助。",
                cmd
            )))
        }
    };

    Ok(CommandResult::Message(message))
}

/// 取第 index 个参数，缺失时返回用法错误
fn arg(args: &[&str], index: usize, usage: &str) -> Result<String> {
    args.get(index)
        .map(|s| s.to_string())
        .ok_or_else(|| Error::CommandError(format!("用法: {}", usage)))
}

/// 解析有限的浮点权重
fn parse_weight(raw: &str) -> Result<Weight> {
    match raw.parse::<Weight>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(Error::InvalidWeight(raw.to_string())),
    }
}

fn require_vertices(graph: &ConsoleGraph, keys: [&String; 2]) -> Result<()> {
    for key in keys {
        if !graph.contains(key) {
            return Err(Error::VertexNotFound(key.clone()));
        }
    }
    Ok(())
}

fn render_order(printer: &Printer, order: &[&Vertex<String, String>]) -> Result<String> {
    let keys: Vec<&String> = order.iter().map(|v| v.key()).collect();
    let rows: Vec<Vec<String>> = keys
        .iter()
        .enumerate()
        .map(|(i, k)| vec![(i + 1).to_string(), k.to_string()])
        .collect();
    printer.render(&["#", "vertex"], &rows, &keys)
}

fn render_edges<T: Serialize>(printer: &Printer, edges: &[EdgeRow], value: &T) -> Result<String> {
    let rows: Vec<Vec<String>> = edges
        .iter()
        .map(|e| vec![e.start.clone(), e.end.clone(), e.weight.to_string()])
        .collect();
    printer.render(&["start", "end", "weight"], &rows, value)
}
