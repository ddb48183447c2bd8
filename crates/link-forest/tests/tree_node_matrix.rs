use link_forest::{Comparator, EqLessComparator, Forest, ForestError, InvariantError, LessComparator, NodeId};

fn build(values: &[i32]) -> (Forest<i32>, NodeId) {
    let mut forest = Forest::new();
    let root = forest.new_root(values[0]);
    for &v in &values[1..] {
        forest.insert(root, v).unwrap();
    }
    (forest, root)
}

fn in_order(forest: &Forest<i32>, root: NodeId) -> Vec<i32> {
    let mut out = Vec::new();
    forest.foreach(Some(root), |v| out.push(*v)).unwrap();
    out
}

#[test]
fn insert_find_remove_scenario_matrix() {
    let (mut forest, root) = build(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(forest.len(), 7);
    assert_eq!(in_order(&forest, root), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(forest.validate(Some(root)), Ok(7));

    let five = forest.find(Some(root), &5).unwrap().unwrap();
    assert_eq!(five, root);
    let removal = forest.remove(five).unwrap();
    // 5 had two children: its successor 7 moved up, the old 7 leaf under 8
    // was detached as a left child.
    assert_eq!(removal.delta, -1);
    let node = removal.node.unwrap();
    assert!(node.is_detached());
    assert_eq!(node.into_value(), 5);

    assert_eq!(forest.value(root), Ok(&7));
    assert_eq!(forest.find(Some(root), &5).unwrap(), None);
    assert_eq!(in_order(&forest, root), vec![1, 3, 4, 7, 8, 9]);
    assert_eq!(forest.validate(Some(root)), Ok(6));
    for v in [1, 3, 4, 7, 8, 9] {
        assert!(forest.find(Some(root), &v).unwrap().is_some(), "missing {v}");
    }
}

#[test]
fn insert_duplicate_matrix() {
    let (mut forest, root) = build(&[2, 1, 3]);
    let existing = forest.find(Some(root), &3).unwrap().unwrap();
    assert_eq!(forest.insert(root, 3), Ok((existing, false)));
    assert_eq!(forest.len(), 3);

    let (four, created) = forest.insert(root, 4).unwrap();
    assert!(created);
    assert_eq!(forest.parent(four), Ok(Some(existing)));
    assert_eq!(forest.right(existing), Ok(Some(four)));
}

#[test]
fn remove_edge_cases_matrix() {
    let (mut forest, root) = build(&[5, 3]);

    let none = forest.remove(None::<NodeId>).unwrap();
    assert!(none.node.is_none());
    assert_eq!(none.delta, 0);

    // only a left subtree: the predecessor is swapped up instead
    let removal = forest.remove(root).unwrap();
    assert_eq!(removal.delta, -1);
    assert_eq!(removal.into_value(), Some(5));
    assert_eq!(forest.value(root), Ok(&3));
    assert!(forest.node(root).unwrap().is_leaf());

    // parentless leaf: its own slot is freed
    let last = forest.remove(root).unwrap();
    assert_eq!(last.delta, 0);
    assert_eq!(last.into_value(), Some(3));
    assert!(forest.is_empty());
    assert_eq!(forest.remove(root).unwrap_err(), ForestError::StaleNode(root));
}

#[test]
fn remove_leaf_counts_matrix() {
    let values = [50, 30, 70, 20, 40, 60, 80, 35, 45, 65];
    let removed = [30, 80, 50, 45];
    let (mut forest, root) = build(&values);

    for v in removed {
        let at = forest.find(Some(root), &v).unwrap().unwrap();
        assert_eq!(forest.remove(at).unwrap().into_value(), Some(v));
        assert!(forest.validate(Some(root)).is_ok());
    }

    let mut visited = 0;
    let calls = forest.foreach(Some(root), |_| visited += 1).unwrap();
    assert_eq!(calls, values.len() - removed.len());
    assert_eq!(visited, calls);
    assert_eq!(forest.size(Some(root)), Ok(calls));
    assert_eq!(in_order(&forest, root), vec![20, 35, 40, 60, 65, 70]);
}

#[test]
fn stale_handle_matrix() {
    let (mut forest, root) = build(&[2, 1]);
    let one = forest.find(Some(root), &1).unwrap().unwrap();
    forest.remove(one).unwrap();

    assert!(!forest.contains_node(one));
    assert_eq!(forest.value(one), Err(ForestError::StaleNode(one)));
    assert_eq!(forest.next(one), Err(ForestError::StaleNode(one)));

    // the freed slot is reused under a new generation
    let (reused, _) = forest.insert(root, 0).unwrap();
    assert_eq!(reused.index(), one.index());
    assert_ne!(reused.generation(), one.generation());
    assert_eq!(forest.value(one), Err(ForestError::StaleNode(one)));

    let mut other = Forest::<i32>::new();
    assert!(matches!(other.value(root), Err(ForestError::OutOfBounds(_))));
    other.new_root(1);
    assert_eq!(other.len(), 1);
}

#[test]
fn navigation_matrix() {
    let (forest, root) = build(&[5, 3, 8, 1, 4, 7, 9]);
    let min = forest.minimum(Some(root)).unwrap().unwrap();
    let max = forest.maximum(Some(root)).unwrap().unwrap();
    assert_eq!(forest.value(min), Ok(&1));
    assert_eq!(forest.value(max), Ok(&9));
    assert_eq!(forest.minimum(None), Ok(None));

    let mut forward = vec![*forest.value(min).unwrap()];
    let mut curr = min;
    while let Some(n) = forest.next(curr).unwrap() {
        forward.push(*forest.value(n).unwrap());
        curr = n;
    }
    assert_eq!(forward, vec![1, 3, 4, 5, 7, 8, 9]);

    let mut backward = vec![*forest.value(max).unwrap()];
    let mut curr = max;
    while let Some(n) = forest.prev(curr).unwrap() {
        backward.push(*forest.value(n).unwrap());
        curr = n;
    }
    assert_eq!(backward, vec![9, 8, 7, 5, 4, 3, 1]);

    // iteration over a subtree stays inside it
    let three = forest.find(Some(root), &3).unwrap();
    let sub: Vec<i32> = forest.iter(three).unwrap().copied().collect();
    assert_eq!(sub, vec![1, 3, 4]);
    assert_eq!(forest.root_of(min), Ok(root));
}

#[test]
fn rotation_matrix() {
    let (mut forest, root) = build(&[5, 3, 8, 1, 4, 7, 9]);

    let pivot = forest.rotate_left(root).unwrap().unwrap();
    assert_eq!(forest.value(pivot), Ok(&8));
    assert_eq!(forest.parent(pivot), Ok(None));
    assert_eq!(forest.parent(root), Ok(Some(pivot)));
    assert_eq!(forest.left(pivot), Ok(Some(root)));
    let seven = forest.find(Some(pivot), &7).unwrap().unwrap();
    assert_eq!(forest.right(root), Ok(Some(seven)));
    assert_eq!(forest.parent(seven), Ok(Some(root)));
    assert_eq!(in_order(&forest, pivot), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(forest.validate(Some(pivot)), Ok(7));
    assert_eq!(forest.validate(Some(root)), Err(InvariantError::NotRoot(root.index())));

    // rotating a non-root node rewires the parent's matching slot
    let three = forest.find(Some(pivot), &3).unwrap().unwrap();
    let one = forest.rotate_right(three).unwrap().unwrap();
    assert_eq!(forest.value(one), Ok(&1));
    assert_eq!(forest.left(root), Ok(Some(one)));
    assert_eq!(forest.right(root), Ok(Some(seven)));
    assert_eq!(forest.validate(Some(pivot)), Ok(7));

    // no child to promote
    let nine = forest.find(Some(pivot), &9).unwrap().unwrap();
    assert_eq!(forest.rotate_left(nine), Ok(None));
    assert_eq!(forest.rotate_right(nine), Ok(None));

    let back = forest.rotate_right(pivot).unwrap().unwrap();
    assert_eq!(back, root);
    assert_eq!(forest.validate(Some(root)), Ok(7));
}

#[test]
fn destroy_matrix() {
    let (mut forest, root) = build(&[5, 3, 8, 1, 4, 7, 9]);
    let eight = forest.find(Some(root), &8).unwrap().unwrap();

    assert_eq!(forest.destroy(eight), Ok(3));
    assert_eq!(forest.right(root), Ok(None));
    assert_eq!(forest.len(), 4);
    assert!(!forest.contains_node(eight));
    assert_eq!(in_order(&forest, root), vec![1, 3, 4, 5]);

    assert_eq!(forest.destroy(None::<NodeId>), Ok(0));
    assert_eq!(forest.destroy(root), Ok(4));
    assert!(forest.is_empty());
}

#[test]
fn multiple_trees_matrix() {
    let mut forest = Forest::new();
    let a = forest.new_root(10);
    let b = forest.new_root(10);
    forest.insert(a, 5).unwrap();
    forest.insert(b, 15).unwrap();

    assert_eq!(forest.len(), 4);
    assert_eq!(forest.size(Some(a)), Ok(2));
    assert_eq!(forest.find(Some(a), &15).unwrap(), None);
    assert!(forest.find(Some(b), &15).unwrap().is_some());

    forest.clear();
    assert!(forest.is_empty());
    assert!(!forest.contains_node(a));
}

#[test]
fn custom_comparator_matrix() {
    // keyed by the first tuple field only
    let by_key = |a: &(i32, &str), b: &(i32, &str)| a.0 - b.0;
    let mut forest = Forest::with_comparator(by_key);
    let root = forest.new_root((2, "two"));
    forest.insert(root, (1, "one")).unwrap();
    forest.insert(root, (3, "three")).unwrap();
    assert!(!forest.insert(root, (3, "again")).unwrap().1);

    let found = forest.find(Some(root), &(3, "")).unwrap().unwrap();
    assert_eq!(forest.value(found), Ok(&(3, "three")));

    // search by bare key through a heterogeneous comparator
    let key_cmp = |k: &i32, stored: &(i32, &str)| k - stored.0;
    let found = forest.find_by(Some(root), &1, &key_cmp).unwrap().unwrap();
    assert_eq!(forest.value(found), Ok(&(1, "one")));

    let less = LessComparator(|a: &i32, b: &i32| a > b);
    let mut desc = Forest::with_comparator(less);
    let top = desc.new_root(5);
    for v in [1, 9, 3] {
        desc.insert(top, v).unwrap();
    }
    assert_eq!(desc.iter(Some(top)).unwrap().copied().collect::<Vec<_>>(), vec![9, 5, 3, 1]);
    assert_eq!(desc.validate(Some(top)), Ok(4));

    let eq_less = EqLessComparator::new(|a: &i32, b: &i32| a == b, |a: &i32, b: &i32| a < b);
    assert_eq!(eq_less.compare(&1, &2), -1);
    assert_eq!(eq_less.compare(&2, &2), 0);
}

#[test]
fn validate_detects_misordering_matrix() {
    let (forest, root) = build(&[5, 3, 8]);
    // same tree, checked under the reverse order
    let reversed = |a: &i32, b: &i32| b - a;
    let mut out_of_order = Forest::with_comparator(reversed);
    let r = out_of_order.new_root(5);
    out_of_order.insert_by(r, 3, &|a: &i32, b: &i32| a - b).unwrap();
    assert!(matches!(
        out_of_order.validate(Some(r)),
        Err(InvariantError::OutOfOrder { .. })
    ));
    assert_eq!(out_of_order.validate_links(Some(r)), Ok(2));
    assert_eq!(forest.validate(None), Ok(0));

    let three = forest.find(Some(root), &3).unwrap().unwrap();
    assert_eq!(forest.validate(Some(three)), Err(InvariantError::NotRoot(three.index())));
}

#[test]
fn print_matrix() {
    let (forest, root) = build(&[2, 1, 3]);
    assert_eq!(forest.print(Some(root)).unwrap(), "Forest\n└─ 2\n  ← 1\n  → 3");
    assert_eq!(forest.print(None).unwrap(), "Forest ∅");
}
