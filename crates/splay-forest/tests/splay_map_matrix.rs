use splay_forest::{MapError, SplayMap, TreeError};

const KEYS: [i32; 7] = [5, 3, 8, 1, 4, 7, 9];

fn sample() -> SplayMap<i32, i32> {
    let mut map = SplayMap::new();
    for k in KEYS {
        map.set(k, k * 10);
    }
    map
}

fn root_key(map: &SplayMap<i32, i32>) -> Option<i32> {
    map.root().map(|p| *map.key(p).unwrap())
}

fn sorted_keys(map: &SplayMap<i32, i32>) -> Vec<i32> {
    map.keys().copied().collect()
}

#[test]
fn splay_map_insert_moves_key_to_root_matrix() {
    let mut map = SplayMap::<i32, i32>::new();
    let mut expected = Vec::new();
    for k in KEYS {
        map.set(k, k * 10);
        expected.push(k);
        expected.sort();
        assert_eq!(root_key(&map), Some(k), "after inserting {k}");
        assert_eq!(sorted_keys(&map), expected);
        assert_eq!(map.len(), expected.len());
    }
    assert_eq!(
        map.print(""),
        "9\n├─ ← 8\n│  ├─ ← 7\n│  │  ├─ ← 4\n│  │  │  ├─ ← 1\n│  │  │  │  ├─ ← ∅\n│  │  │  │  └─ → 3\n│  │  │  └─ → 5\n│  │  └─ → ∅\n│  └─ → ∅\n└─ → ∅"
    );
}

#[test]
fn splay_map_get_splays_hit_matrix() {
    let mut map = sample();
    assert_eq!(map.get(&4), Ok(&40));
    assert_eq!(root_key(&map), Some(4));
    assert_eq!(sorted_keys(&map), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(
        map.print(""),
        "4\n├─ ← 1\n│  ├─ ← ∅\n│  └─ → 3\n└─ → 9\n   ├─ ← 7\n   │  ├─ ← 5\n   │  └─ → 8\n   └─ → ∅"
    );
}

#[test]
fn splay_map_get_miss_splays_nearest_matrix() {
    let mut map = sample();
    map.get(&4).unwrap();
    assert_eq!(map.get(&6), Err(MapError::NotFound));
    // The descent for 6 ends at 5, which is splayed instead.
    assert_eq!(root_key(&map), Some(5));
    assert_eq!(
        map.print(""),
        "5\n├─ ← 4\n│  ├─ ← 1\n│  │  ├─ ← ∅\n│  │  └─ → 3\n│  └─ → ∅\n└─ → 7\n   ├─ ← ∅\n   └─ → 9\n      ├─ ← 8\n      └─ → ∅"
    );
    assert_eq!(map.len(), 7);
}

#[test]
fn splay_map_delete_splays_parent_matrix() {
    let mut map = sample();
    map.get(&4).unwrap();
    assert_eq!(map.delete_key(&5), Ok(50));
    assert_eq!(map.get(&5), Err(MapError::NotFound));

    let mut map = sample();
    map.get(&4).unwrap();
    map.delete_key(&5).unwrap();
    // 5 was a leaf under 7; 7 is splayed after the removal.
    assert_eq!(root_key(&map), Some(7));
    assert_eq!(sorted_keys(&map), vec![1, 3, 4, 7, 8, 9]);
    assert_eq!(
        map.print(""),
        "7\n├─ ← 4\n│  ├─ ← 1\n│  │  ├─ ← ∅\n│  │  └─ → 3\n│  └─ → ∅\n└─ → 9\n   ├─ ← 8\n   └─ → ∅"
    );
}

#[test]
fn splay_map_two_child_delete_matrix() {
    let mut map = sample();
    map.get(&4).unwrap();
    let p4 = map.root().unwrap();
    assert_eq!(map.tree().num_children(p4), Ok(2));

    assert_eq!(map.delete(p4), Ok((4, 40)));
    // The predecessor 3 moved into the old root node, and its former
    // parent 1 was splayed above it.
    assert_eq!(map.key(p4), Ok(&3));
    assert_eq!(root_key(&map), Some(1));
    assert_eq!(map.tree().parent(p4), Ok(map.root()));
    assert_eq!(sorted_keys(&map), vec![1, 3, 5, 7, 8, 9]);
}

#[test]
fn splay_map_range_matrix() {
    let mut map = sample();
    let keys: Vec<i32> = map.find_range(Some(&4), Some(&8)).map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![4, 5, 7]);
    assert_eq!(root_key(&map), Some(4));

    let keys: Vec<i32> = map.find_range(Some(&6), None).map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![7, 8, 9]);
}

#[test]
fn splay_map_bounds_matrix() {
    let mut map = sample();
    assert_eq!(map.find_le(&6), Some((&5, &50)));
    assert_eq!(root_key(&map), Some(5));
    assert_eq!(map.find_ge(&6), Some((&7, &70)));
    assert_eq!(root_key(&map), Some(7));
    assert_eq!(map.find_lt(&1), None);
    assert_eq!(map.find_gt(&9), None);
    assert_eq!(map.find_lt(&4), Some((&3, &30)));
    assert_eq!(map.find_gt(&4), Some((&5, &50)));
    assert_eq!(sorted_keys(&map), vec![1, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn splay_map_delete_all_matrix() {
    let mut map = sample();
    map.get(&4).unwrap();
    let roots = [Some(4), Some(4), Some(9), Some(7), Some(9), Some(9), None];
    for (k, root) in [1, 3, 4, 5, 7, 8, 9].into_iter().zip(roots) {
        assert_eq!(map.delete_key(&k), Ok(k * 10));
        assert_eq!(root_key(&map), root, "after deleting {k}");
    }
    assert!(map.is_empty());
    assert_eq!(map.first(), None);
    assert_eq!(map.tree().height(), -1);
    assert_eq!(map.delete_key(&1), Err(MapError::NotFound));
}

#[test]
fn splay_map_overwrite_matrix() {
    let mut map = sample();
    assert_eq!(map.set(1, 11), Some(10));
    assert_eq!(root_key(&map), Some(1));
    assert_eq!(map.len(), 7);

    *map.set_default(3, 0) += 1;
    assert_eq!(root_key(&map), Some(3));
    assert_eq!(map.get(&3), Ok(&31));

    assert!(map.contains_key(&8));
    assert_eq!(root_key(&map), Some(8));
    assert_eq!(map.get_or(&2, &-1), &-1);
}

#[test]
fn splay_map_find_position_matrix() {
    let mut map = sample();
    let p = map.find_position(&7).unwrap();
    assert_eq!(map.root(), Some(p));
    assert_eq!(map.value(p), Ok(&70));

    *map.value_mut(p).unwrap() = 77;
    assert_eq!(map.get(&7), Ok(&77));

    let q = map.find_position(&2).unwrap();
    assert_eq!(map.root(), Some(q));
    assert!(matches!(map.key(q), Ok(&1) | Ok(&3)));
}

#[test]
fn splay_map_pop_matrix() {
    let mut map = sample();
    assert_eq!(map.pop_first(), Some((1, 10)));
    assert_eq!(map.pop_last(), Some((9, 90)));
    assert_eq!(sorted_keys(&map), vec![3, 4, 5, 7, 8]);
    assert_eq!(map.find_min(), Some((&3, &30)));
    assert_eq!(map.find_max(), Some((&8, &80)));
}

#[test]
fn splay_map_stale_position_matrix() {
    let mut map = sample();
    let p = map.find_position(&9).unwrap();
    map.delete_key(&9).unwrap();
    assert_eq!(map.key(p), Err(TreeError::InvalidPosition));
    assert_eq!(map.delete(p), Err(TreeError::InvalidPosition));

    // The freed slot is reused by the next insert, but the old handle
    // still does not resolve.
    map.set(10, 100);
    assert_eq!(map.key(p), Err(TreeError::InvalidPosition));

    let other = sample();
    let foreign = other.root().unwrap();
    assert_eq!(map.key(foreign), Err(TreeError::InvalidPosition));
}
