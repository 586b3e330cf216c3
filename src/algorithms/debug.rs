use crate::node::Node;
use crate::quadtree::QuadTree;

/// 调试输出
impl QuadTree {
    /// 按前序遍历逐行列出每个节点，格式为 `<[点...], [x, y, w, h]>`
    pub fn dump(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }

    /// 生成带缩进的树结构文本，每层缩进两个空格
    pub fn format_tree(&self) -> String {
        fn format_node(node: &Node, depth: usize, label: &str, out: &mut String) {
            let indent = "  ".repeat(depth);
            let kind = if node.is_leaf() { "Leaf" } else { "Internal" };
            out.push_str(&format!("{}{}{} {}", indent, label, kind, node.bounds()));
            if node.is_leaf() {
                let points: Vec<String> = node.bucket().iter().map(ToString::to_string).collect();
                out.push_str(&format!(" [{}]", points.join(", ")));
            }
            out.push('\n');

            if let Some(children) = node.children() {
                for (child, label) in children.iter().zip(["NW: ", "NE: ", "SW: ", "SE: "]) {
                    format_node(child, depth + 1, label, out);
                }
            }
        }

        let mut out = String::new();
        format_node(self.root(), 0, "", &mut out);
        out
    }

    /// 打印完整的树结构用于调试
    pub fn print_tree_structure_debug(&self) {
        println!("=== QuadTree Structure Debug ===");
        println!(
            "size={}, points={}, leaves={}, depth={}",
            self.size(),
            self.point_count(),
            self.leaf_count(),
            self.depth()
        );
        print!("{}", self.format_tree());
        println!("=== End Debug ===");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn test_dump_preorder() {
        let mut tree = QuadTree::new(Vec::new(), 128.0, 128.0);
        tree.add_node(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(tree.dump(), vec!["<[(10, 10)], [0, 0, 128, 128]>".to_string()]);

        tree.add_node(Point::new(100.0, 100.0)).unwrap();
        assert_eq!(
            tree.dump(),
            vec![
                "<[], [0, 0, 128, 128]>",
                "<[(10, 10)], [0, 0, 64, 64]>",
                "<[], [64, 0, 64, 64]>",
                "<[], [0, 64, 64, 64]>",
                "<[(100, 100)], [64, 64, 64, 64]>",
            ]
        );
    }

    #[test]
    fn test_format_tree() {
        let tree = QuadTree::new(vec![Point::new(10.0, 10.0), Point::new(100.0, 100.0)], 128.0, 128.0);
        let text = tree.format_tree();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Internal [0, 0, 128, 128]");
        assert_eq!(lines[1], "  NW: Leaf [0, 0, 64, 64] [(10, 10)]");
        assert_eq!(lines[4], "  SE: Leaf [64, 64, 64, 64] [(100, 100)]");

        // 只需要确保不会崩溃
        tree.print_tree_structure_debug();
    }
}
