use ordered_tree::{Error, Order, OrderedTree, Policy};

fn demo_tree() -> OrderedTree<i32> {
    let mut tree = OrderedTree::new();
    for x in [5, 11, 18, -1, 4, 1] {
        tree.insert(x);
    }
    tree
}

fn collect(tree: &OrderedTree<i32>, order: Order) -> Vec<i32> {
    let mut seen = Vec::new();
    tree.traverse(order, |x| seen.push(*x));
    seen
}

#[test]
fn demo_orders_and_extremes() {
    let tree = demo_tree();

    assert_eq!(collect(&tree, Order::Ascending), [-1, 1, 4, 5, 11, 18]);
    assert_eq!(collect(&tree, Order::Descending), [18, 11, 5, 4, 1, -1]);
    assert_eq!(tree.minimum(), Ok(&-1));
    assert_eq!(tree.maximum(), Ok(&18));
}

#[test]
fn demo_bump_eleven() -> Result<(), Error> {
    let mut tree = demo_tree();

    *tree.find_mut(&11)? += 1;

    assert_eq!(collect(&tree, Order::Ascending), [-1, 1, 4, 5, 12, 18]);
    Ok(())
}

#[test]
fn demo_bump_everything() {
    let mut tree = demo_tree();

    tree.traverse_mut(Order::FromRoot, |x| *x += 1);

    assert_eq!(tree.minimum(), Ok(&0));
    assert_eq!(tree.maximum(), Ok(&19));
    tree.traverse(Order::Ascending, |x| assert!(tree.contains(x)));
}

#[test]
fn demo_remove_root_then_the_rest() {
    let mut tree = demo_tree();

    assert_eq!(tree.remove(&5), Some(5));
    for x in [1, 18, 11, -1, 4] {
        assert_eq!(tree.remove(&x), Some(x));
    }

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.minimum(), Err(Error::EmptyContainer));
}

#[test]
fn order_parsed_from_text_drives_traversal() {
    let tree = demo_tree();

    let order: Order = "desc".parse().unwrap();
    assert_eq!(collect(&tree, order), [18, 11, 5, 4, 1, -1]);

    assert_eq!(
        "zigzag".parse::<Order>(),
        Err(Error::InvalidArgument("zigzag".to_string()))
    );
}

#[test]
fn policy_parsed_from_text_picks_duplicate_handling() {
    let mut tree = OrderedTree::with_policy("multiset".parse::<Policy>().unwrap());
    tree.extend([7, 7, 7]);
    assert_eq!(tree.len(), 3);

    let mut tree = OrderedTree::with_policy("set".parse::<Policy>().unwrap());
    tree.extend([7, 7, 7]);
    assert_eq!(tree.len(), 1);
}

#[test]
fn shared_behind_a_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let tree = Arc::new(Mutex::new(OrderedTree::new()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                for x in 0..25 {
                    tree.lock().unwrap().insert(t * 25 + x);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let tree = tree.lock().unwrap();
    assert_eq!(tree.len(), 100);
    assert!(tree.iter().copied().eq(0..100));
}
