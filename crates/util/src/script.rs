//! Random operation scripts.

use crate::fuzzer::Fuzzer;

/// One step of a tree script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOp {
    Insert(i64),
    Remove(i64),
    Find(i64),
}

/// One step of a list script. Positions count elements before the cursor,
/// so `0` means "right after the sentinel"; they may exceed the list length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    PushFront(i64),
    PopFront,
    InsertAfter { pos: usize, value: i64 },
    EraseAfter { pos: usize },
    RemoveIf { modulo: i64 },
    Reverse,
    Assign(Vec<i64>),
}

impl Fuzzer {
    /// `len` tree steps over keys in [0, key_max], roughly half inserts.
    pub fn tree_script(&self, len: usize, key_max: i64) -> Vec<TreeOp> {
        self.repeat(len, || {
            let key = self.random_int(0, key_max);
            match self.random_int(0, 3) {
                0 | 1 => TreeOp::Insert(key),
                2 => TreeOp::Remove(key),
                _ => TreeOp::Find(key),
            }
        })
    }

    /// `len` list steps with values in [0, value_max] and positions up to
    /// `pos_max`.
    pub fn list_script(&self, len: usize, value_max: i64, pos_max: usize) -> Vec<ListOp> {
        self.repeat(len, || {
            let value = self.random_int(0, value_max);
            let pos = self.random_index(pos_max + 1);
            match self.random_int(0, 9) {
                0..=2 => ListOp::PushFront(value),
                3 => ListOp::PopFront,
                4 | 5 => ListOp::InsertAfter { pos, value },
                6 => ListOp::EraseAfter { pos },
                7 => ListOp::RemoveIf {
                    modulo: self.random_int(2, 5),
                },
                8 => ListOp::Reverse,
                _ => {
                    let n = self.random_index(6);
                    ListOp::Assign(self.repeat(n, || self.random_int(0, value_max)))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_script_keys_in_range() {
        let fuzzer = Fuzzer::from_u64(11);
        let script = fuzzer.tree_script(200, 15);
        assert_eq!(script.len(), 200);
        assert!(script.iter().all(|op| match *op {
            TreeOp::Insert(k) | TreeOp::Remove(k) | TreeOp::Find(k) => (0..=15).contains(&k),
        }));
        assert!(script.iter().any(|op| matches!(op, TreeOp::Insert(_))));
    }

    #[test]
    fn test_list_script_is_reproducible() {
        let a = Fuzzer::from_u64(5).list_script(50, 9, 4);
        let b = Fuzzer::from_u64(5).list_script(50, 9, 4);
        assert_eq!(a, b);
        assert!(a.iter().all(|op| match op {
            ListOp::InsertAfter { pos, .. } | ListOp::EraseAfter { pos } => *pos <= 4,
            _ => true,
        }));
    }
}
