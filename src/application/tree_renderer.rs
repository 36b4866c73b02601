use colored::Colorize;
use pathtree::{NodeId, PathTree, TreeObserver};

const INDENT: &str = "  ";

/// Renders the tree by walking its row projection. Each root is printed as a
/// heading with its full path, entries below it are indented one step per
/// level and directories carry a trailing `/`.
pub fn render_tree<P, O: TreeObserver>(tree: &PathTree<P, O>, colored: bool) -> String {
    let renderer = TreeRenderer { tree, colored };
    let mut out = String::new();

    let mut section = None;
    for row in 0..tree.row_count(None) {
        let Some(id) = tree.index(None, row) else {
            continue;
        };
        let root = if tree.is_scratch(id) {
            tree.scratch_root()
        } else {
            tree.main_root()
        };
        if root != section {
            if let Some(root) = root {
                renderer.heading(root, &mut out);
            }
            section = root;
        }
        renderer.entry(id, 1, &mut out);
    }
    out
}

struct TreeRenderer<'a, P, O> {
    tree: &'a PathTree<P, O>,
    colored: bool,
}

impl<P, O: TreeObserver> TreeRenderer<'_, P, O> {
    fn heading(&self, root: NodeId, out: &mut String) {
        let path = self.tree.full_path(root).unwrap_or_default();
        out.push_str(&self.paint(path, true, self.tree.is_scratch(root)));
        out.push('\n');
    }

    fn entry(&self, id: NodeId, depth: usize, out: &mut String) {
        let is_directory = self.tree.is_directory(id);
        let name = self.tree.display_name(id).unwrap_or_default();
        let label = if is_directory {
            format!("{name}/")
        } else {
            name.to_string()
        };

        out.push_str(&INDENT.repeat(depth));
        out.push_str(&self.paint(&label, is_directory, self.tree.is_scratch(id)));
        out.push('\n');

        for row in 0..self.tree.row_count(Some(id)) {
            if let Some(child) = self.tree.index(Some(id), row) {
                self.entry(child, depth + 1, out);
            }
        }
    }

    fn paint(&self, text: &str, is_directory: bool, is_scratch: bool) -> String {
        if !self.colored {
            return text.to_string();
        }
        let mut styled = text.normal();
        if is_directory {
            styled = styled.bold().blue();
        }
        if is_scratch {
            styled = styled.italic();
        }
        styled.to_string()
    }
}
