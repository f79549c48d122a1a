use std::cmp::Ordering;

use cadence_collections::{OrderedTree, comparator::NaturalOrder};

fn by_last_digit(a: &u32, b: &u32) -> Ordering {
    (a % 10).cmp(&(b % 10))
}

fn random_values(count: usize, max: u32) -> Vec<u32> {
    (0..count).map(|_| fastrand::u32(0..max)).collect()
}

#[test]
fn test_in_order_is_sorted_for_random_inserts() {
    fastrand::seed(81726354);
    for round in 0..50 {
        let input = random_values(fastrand::usize(0..300), 1000);
        let mut tree = OrderedTree::new();
        for &v in &input {
            tree.insert(v, &by_last_digit);
        }
        let walked: Vec<u32> = tree.in_order().into_iter().copied().collect();
        assert_eq!(walked.len(), input.len(), "round {round}");
        assert!(
            walked
                .windows(2)
                .all(|w| by_last_digit(&w[0], &w[1]) != Ordering::Greater),
            "round {round}: {walked:?}"
        );
        assert_eq!(tree.size(), input.len());
    }
}

#[test]
fn test_insert_then_remove_random() {
    fastrand::seed(1029384756);
    let mut input = random_values(500, 200);
    let mut tree = OrderedTree::new();
    for &v in &input {
        tree.insert(v, &NaturalOrder);
    }

    fastrand::shuffle(&mut input);
    for (removed_so_far, v) in input.iter().enumerate() {
        let before = tree.size();
        assert_eq!(before, input.len() - removed_so_far);
        assert_eq!(tree.remove(v, &NaturalOrder).unwrap(), Some(*v));
        assert_eq!(tree.size(), before - 1);

        let remaining = input[removed_so_far + 1..].iter().filter(|&&x| x == *v).count();
        assert_eq!(tree.search(v, &NaturalOrder).is_some(), remaining > 0);

        let walked = tree.in_order();
        assert!(walked.windows(2).all(|w| w[0] <= w[1]));
    }
    assert!(tree.is_empty());
    assert!(tree.remove(&1, &NaturalOrder).unwrap_err().is_empty_container());
}

#[test]
fn test_remove_absent_keeps_shape() {
    fastrand::seed(55);
    let mut tree = OrderedTree::new();
    for v in random_values(100, 50) {
        tree.insert(v * 2, &NaturalOrder);
    }
    let shape: Vec<u32> = tree.pre_order().into_iter().copied().collect();
    for odd in (1..100).step_by(2) {
        assert_eq!(tree.remove(&odd, &NaturalOrder).unwrap(), None);
    }
    let after: Vec<u32> = tree.pre_order().into_iter().copied().collect();
    assert_eq!(shape, after);
}

#[test]
fn test_traversals_cover_same_values() {
    fastrand::seed(4242);
    let input = random_values(200, 10_000);
    let mut tree = OrderedTree::new();
    for &v in &input {
        tree.insert(v, &NaturalOrder);
    }
    let mut expected = input.clone();
    expected.sort_unstable();

    for traversal in [tree.pre_order(), tree.post_order(), tree.level_order()] {
        let mut values: Vec<u32> = traversal.into_iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, expected);
    }
    assert_eq!(tree.level_order().first().copied(), tree.root().ok());
    assert_eq!(tree.pre_order().first().copied(), tree.root().ok());
    assert_eq!(tree.post_order().last().copied(), tree.root().ok());
}

#[test]
fn test_from_sorted_matches_inserted_content() {
    fastrand::seed(777);
    let mut input = random_values(1000, 100);
    input.sort_unstable();
    let tree = OrderedTree::from_sorted(input.clone(), &NaturalOrder).unwrap();
    assert_eq!(tree.height(), 9);
    assert_eq!(tree.into_sorted_vec(), input);

    let mut unsorted = input;
    unsorted.reverse();
    assert!(OrderedTree::from_sorted(unsorted, &NaturalOrder).is_err());
}
