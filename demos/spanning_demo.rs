//! spangraph 演示脚本
//!
//! 构造一张带权无向图，依次运行遍历、最短路径和最小生成树

use spangraph::{Graph, Result, Vertex};

fn main() -> Result<()> {
    println!("spangraph 演示");
    println!("==============\n");

    let mut graph: Graph<&str, &str> = Graph::new();
    for (key, city) in [
        ("A", "Amsterdam"),
        ("B", "Berlin"),
        ("C", "Copenhagen"),
        ("D", "Dublin"),
        ("E", "Edinburgh"),
        ("F", "Frankfurt"),
        ("G", "Geneva"),
        ("H", "Helsinki"),
        ("I", "Istanbul"),
    ] {
        graph.add(key, city);
    }
    for (a, b, w) in [
        ("A", "B", 1.0),
        ("A", "D", 2.0),
        ("B", "E", 3.0),
        ("B", "C", 2.0),
        ("C", "F", 5.0),
        ("D", "E", 3.0),
        ("D", "G", 4.0),
        ("E", "H", 4.0),
        ("E", "F", 1.0),
        ("F", "I", 3.0),
        ("H", "I", 6.0),
        ("G", "H", 1.0),
    ] {
        graph.connect_with_weight(&a, &b, w);
    }

    println!("1. 图大小: {} 顶点, {} 条有向边\n", graph.len(), graph.edge_count());

    println!("2. 遍历");
    println!("   DFS(A): {}", keys(&graph.depth_first_traversal(&"A")));
    println!("   BFS(A): {}\n", keys(&graph.breadth_first_traversal(&"A")));

    println!("3. 最短路径");
    if let Some(path) = graph.dij_shortest_path(&"A", &"I")? {
        println!(
            "   A -> I: {} (权重 {})\n",
            path.vertices.join(" -> "),
            path.total_weight
        );
    }

    println!("4. 最小生成树");
    for (name, tree) in [("Prim", graph.primms(&"A")?), ("Kruskal", graph.kruskals(&"A")?)] {
        println!("   {}: 总权重 {}", name, tree.cost());
        for vertex in tree.vertices() {
            for edge in vertex.out_edges() {
                println!(
                    "     {} ({}) -> {} ({}): {}",
                    edge.start(),
                    vertex.value(),
                    edge.end(),
                    tree.get(edge.end()).copied().unwrap_or("?"),
                    edge.weight()
                );
            }
        }
    }

    Ok(())
}

fn keys(vertices: &[&Vertex<&str, &str>]) -> String {
    vertices.iter().map(|v| *v.key()).collect::<Vec<_>>().join(" ")
}
