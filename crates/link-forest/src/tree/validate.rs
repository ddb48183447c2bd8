use crate::comparator::{AlwaysEq, Comparator};
use crate::error::InvariantError;

use super::arena::Arena;

impl<T> Arena<T> {
    /// Checks parent back-links, acyclicity and ordering of the tree rooted
    /// at `root`. Returns the node count.
    ///
    /// Each node is compared against its closest ancestor bounds: the last
    /// ancestor it lies right of must compare less, the last one it lies left
    /// of must compare greater.
    pub(crate) fn validate<C>(&self, root: Option<u32>, comparator: &C) -> Result<usize, InvariantError>
    where
        C: Comparator<T> + ?Sized,
    {
        self.walk(root, Some(comparator))
    }

    /// Back-links and acyclicity only.
    pub(crate) fn validate_links(&self, root: Option<u32>) -> Result<usize, InvariantError> {
        self.walk(root, None::<&AlwaysEq>)
    }

    fn walk<C>(&self, root: Option<u32>, ordering: Option<&C>) -> Result<usize, InvariantError>
    where
        C: Comparator<T> + ?Sized,
    {
        let Some(root) = root else {
            return Ok(0);
        };
        let root_node = self.get(root).ok_or(InvariantError::Stale(root))?;
        if root_node.p.is_some() {
            return Err(InvariantError::NotRoot(root));
        }

        let mut visited = vec![false; self.slot_count()];
        let mut count = 0;
        // (node, lower bound, upper bound)
        let mut stack: Vec<(u32, Option<u32>, Option<u32>)> = vec![(root, None, None)];
        while let Some((idx, lower, upper)) = stack.pop() {
            let node = self.get(idx).ok_or(InvariantError::Stale(idx))?;
            if std::mem::replace(&mut visited[idx as usize], true) {
                return Err(InvariantError::Cycle(idx));
            }
            count += 1;

            if let Some(comparator) = ordering {
                if let Some(lo) = lower {
                    if comparator.compare(&node.v, self.value(lo)) <= 0 {
                        return Err(InvariantError::OutOfOrder { node: idx, ancestor: lo });
                    }
                }
                if let Some(hi) = upper {
                    if comparator.compare(&node.v, self.value(hi)) >= 0 {
                        return Err(InvariantError::OutOfOrder { node: idx, ancestor: hi });
                    }
                }
            }

            for (child, lower, upper) in [(node.l, lower, Some(idx)), (node.r, Some(idx), upper)] {
                let Some(child) = child else {
                    continue;
                };
                let child_node = self.get(child).ok_or(InvariantError::Stale(child))?;
                if child_node.p != Some(idx) {
                    return Err(InvariantError::BrokenParentLink { parent: idx, child });
                }
                stack.push((child, lower, upper));
            }
        }
        Ok(count)
    }
}
