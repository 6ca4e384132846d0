use ordered_tree::{Error, Order, OrderedTree, Policy};

use std::collections::HashSet;

fn build(xs: &[i8], policy: Policy) -> OrderedTree<i8> {
    let mut tree = OrderedTree::with_policy(policy);
    tree.extend(xs.iter().copied());
    tree
}

fn policy(multiset: bool) -> Policy {
    if multiset {
        Policy::Multiset
    } else {
        Policy::Set
    }
}

#[quickcheck]
fn ascending_is_sorted_and_descending_is_its_reverse(xs: Vec<i8>, multiset: bool) -> bool {
    let tree = build(&xs, policy(multiset));

    let ascending: Vec<_> = tree.traversal(Order::Ascending).copied().collect();
    let mut descending: Vec<_> = tree.traversal(Order::Descending).copied().collect();
    descending.reverse();

    ascending.windows(2).all(|pair| pair[0] <= pair[1]) && ascending == descending
}

#[quickcheck]
fn from_root_visits_the_same_elements(xs: Vec<i8>, multiset: bool) -> bool {
    let tree = build(&xs, policy(multiset));

    let mut from_root: Vec<_> = tree.traversal(Order::FromRoot).copied().collect();
    from_root.sort_unstable();

    from_root == tree.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs, Policy::Set);

    xs.iter().all(|x| tree.contains(x) && tree.find(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs, Policy::Set);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    let expected = if tree.is_empty() {
        Error::EmptyContainer
    } else {
        Error::NotFound
    };
    nots.all(|x| !tree.contains(x) && tree.find(x) == Err(expected.clone()))
}

#[quickcheck]
fn set_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree = build(&xs, Policy::Set);
    let distinct: HashSet<_> = xs.iter().collect();

    tree.len() == distinct.len()
}

#[quickcheck]
fn multiset_counts_every_insert(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::multiset();

    xs.iter().enumerate().all(|(i, x)| tree.insert(*x) && tree.len() == i + 1)
}

#[quickcheck]
fn minimum_and_maximum_are_the_ends(xs: Vec<i8>, multiset: bool) -> bool {
    let tree = build(&xs, policy(multiset));

    if xs.is_empty() {
        return tree.minimum() == Err(Error::EmptyContainer)
            && tree.maximum() == Err(Error::EmptyContainer);
    }
    tree.minimum().ok() == tree.iter().next() && tree.maximum().ok() == tree.iter().last()
}

#[quickcheck]
fn removing_missing_values_changes_nothing(xs: Vec<i8>, misses: Vec<i8>) -> bool {
    let mut tree = build(&xs, Policy::Set);
    let before: Vec<_> = tree.iter().copied().collect();

    let present: HashSet<_> = xs.into_iter().collect();
    let removed_nothing = misses
        .iter()
        .filter(|x| !present.contains(*x))
        .all(|x| tree.remove(x).is_none());

    removed_nothing && tree.len() == before.len() && tree.iter().copied().eq(before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs, Policy::Set);
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        still_present.retain(|x| x != delete);
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i8>, multiset: bool, rotate: usize) -> bool {
    let mut tree = build(&xs, policy(multiset));

    let mut order: Vec<_> = tree.iter().copied().collect();
    if !order.is_empty() {
        let by = rotate % order.len();
        order.rotate_left(by);
    }

    let all_removed = order.iter().all(|x| tree.remove(x) == Some(*x));
    all_removed && tree.is_empty() && tree.len() == 0 && tree.iter().next().is_none()
}

#[quickcheck]
fn into_iter_matches_iter(xs: Vec<i8>, multiset: bool) -> bool {
    let tree = build(&xs, policy(multiset));
    let borrowed: Vec<_> = tree.iter().copied().collect();

    tree.into_iter().eq(borrowed)
}
