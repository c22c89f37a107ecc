use super::*;

#[test]
fn reference_permutations() {
    let items: Vec<u32> = (0..6).collect();
    assert_eq!(shuffle(&items, 42u32), vec![1, 0, 4, 5, 2, 3]);
    assert_eq!(
        shuffle(&["a", "b", "c", "d", "e"], 7u32),
        vec!["d", "b", "c", "e", "a"]
    );
}

#[test]
fn shuffle_is_a_permutation_and_leaves_input_alone() {
    let items = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    let snapshot = items.clone();
    for seed in 0..100u32 {
        let mut out = shuffle(&items, seed);
        assert_eq!(items, snapshot);
        out.sort_unstable();
        let mut sorted = snapshot.clone();
        sorted.sort_unstable();
        assert_eq!(out, sorted);
    }
}

#[test]
fn in_place_matches_copying_shuffle() {
    let mut buf: Vec<char> = "greeting".chars().collect();
    let mut stream = SeededStream::new(11u32);
    shuffle_in_place(&mut buf, &mut stream);
    assert_eq!(buf, shuffle(&"greeting".chars().collect::<Vec<_>>(), 11u32));
}

#[test]
fn pick_length_is_min_of_count_and_len() {
    let items: Vec<u8> = (0..10).collect();
    for count in 0..15 {
        assert_eq!(pick(&items, count, 1u32).len(), count.min(items.len()));
    }
}

#[test]
fn pick_is_a_prefix_of_the_shuffle() {
    let items: Vec<u8> = (0..10).collect();
    let full = shuffle(&items, 77u32);
    assert_eq!(pick(&items, 4, 77u32), full[..4].to_vec());
}

#[test]
fn empty_inputs_yield_empty_outputs() {
    let empty: Vec<u8> = Vec::new();
    assert!(shuffle(&empty, 1u32).is_empty());
    assert!(pick(&empty, 3, 1u32).is_empty());
    assert!(pick(&[1, 2, 3], 0, 1u32).is_empty());
    assert_eq!(shuffle(&[9], 1u32), vec![9]);
}
