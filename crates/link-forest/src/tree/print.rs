use std::fmt::Display;

use super::arena::Arena;

impl<T: Display> Arena<T> {
    fn print_node(&self, idx: u32, tab: &str, side: &str, out: &mut String) {
        let node = self.node(idx);
        out.push('\n');
        out.push_str(tab);
        out.push_str(side);
        out.push(' ');
        out.push_str(&node.v.to_string());
        let child_tab = format!("{tab}  ");
        if let Some(l) = node.l {
            self.print_node(l, &child_tab, "←", out);
        }
        if let Some(r) = node.r {
            self.print_node(r, &child_tab, "→", out);
        }
    }

    /// Indented dump, left children marked `←`, right children `→`.
    pub(crate) fn print(&self, root: Option<u32>, tab: &str) -> String {
        match root {
            Some(root) => {
                let mut out = String::from("Forest");
                self.print_node(root, tab, "└─", &mut out);
                out
            }
            None => "Forest ∅".to_string(),
        }
    }
}
