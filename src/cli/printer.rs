//! 结果打印器
//!
//! 提供表格和 JSON 两种输出格式

use crate::error::{Error, Result};
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 表格
    Table,
    /// JSON
    Json,
}

/// 结果打印器
#[derive(Debug, Clone)]
pub struct Printer {
    format: OutputFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 设置输出格式
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// 按当前格式输出：表格模式用 columns/rows，JSON 模式序列化 value
    pub fn render<T: Serialize>(
        &self,
        columns: &[&str],
        rows: &[Vec<String>],
        value: &T,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_table(columns, rows)),
            OutputFormat::Json => self.format_json(value),
        }
    }

    /// 表格格式
    pub fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        format!("{}{} row(s) in set\n", table, rows.len())
    }

    /// JSON 格式
    pub fn format_json<T: Serialize>(&self, value: &T) -> Result<String> {
        serde_json::to_string_pretty(value)
            .map(|s| s + "\n")
            .map_err(|e| Error::CommandError(format!("JSON 序列化失败: {}", e)))
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   spangraph 控制台命令帮助
═══════════════════════════════════════════════════════════════

顶点与边:
  add <键> [负载]              添加顶点（已存在时替换负载）
  remove, rm <键>              删除顶点及其所有边
  connect <A> <B> [权重]       无向连接（默认权重 1）
  dconnect <A> <B> [权重]      有向连接 A -> B
  disconnect <A> <B>           删除 A -> B
  disconnect-all <A> <B>       删除两个方向的边
  weight <A> <B> <权重>        修改 A -> B 的权重

查询:
  get <键>                     查看负载
  vertex, v <键>               查看顶点及其出边 / 入边
  vertices                     列出所有顶点
  edges                        列出所有边
  stats, info                  图统计信息

算法:
  dfs <起点>                   深度优先遍历
  bfs <起点>                   广度优先遍历
  topo                         拓扑排序
  path <起点> <终点>           Dijkstra 最短路径
  distances <起点>             单源最短距离
  dfspan <起点>                深度优先生成图
  bfspan <起点>                广度优先生成图
  prim <起点>                  Prim 最小生成树
  kruskal <起点>               Kruskal 最小生成树

基础命令:
  help, h, ?                   显示帮助
  quit, exit, q                退出程序

═══════════════════════════════════════════════════════════════
控制台命令 (以 : 开头)
═══════════════════════════════════════════════════════════════

  :help, :h              显示控制台命令帮助
  :quit, :q              退出程序
  :json                  以 JSON 输出结果
  :table                 以表格输出结果
  :tee [-o] <file>       输出同时写入文件 (-o 覆盖)
  :notee                 停止写入文件
  :history on|off        开关历史记录
  :clear                 清屏

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_output() {
        let printer = Printer::default();
        let out = printer.format_table(
            &["start", "end"],
            &[vec!["A".to_string(), "B".to_string()]],
        );

        assert!(out.contains("start"));
        assert!(out.contains("A"));
        assert!(out.ends_with("1 row(s) in set\n"));
        assert_eq!(printer.format_table(&["start"], &[]), "Empty set\n");
    }

    #[test]
    fn test_render_switches_format() {
        let mut printer = Printer::default();
        let rows = vec![vec!["A".to_string()]];
        let value = vec!["A"];

        assert!(printer.render(&["key"], &rows, &value).unwrap().contains("key"));

        printer.set_format(OutputFormat::Json);
        let out = printer.render(&["key"], &rows, &value).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec!["A"]);
    }
}
