//! The extension traits used together through the crate root re-exports.

use seqkit::randutil::seeded;
use seqkit::{SequenceSampler, SetExt, SliceExt, StrExt, VecExt};
use std::collections::HashSet;

#[test]
fn test_roster_workflow() {
    let mut names: Vec<String> = ["ada lovelace", "alan turing", "grace hopper", "ada lovelace"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names = names.unique();
    assert_eq!(3, names.len());

    let pascal: Vec<String> = names.iter().map(|n| n.to_pascal_case()).collect();
    assert_eq!(
        vec!["AdaLovelace", "AlanTuring", "GraceHopper"],
        pascal
    );

    let mut rand = seeded(21);
    names.shuffle(&mut rand);
    let speaker = names.pick(&mut rand).unwrap().clone();
    assert!(names.contains(&speaker));

    let greeting = "Next up: {who}!".format_with([("who", speaker.capitalize())]);
    assert!(greeting.starts_with("Next up: "));
    assert!(greeting.ends_with('!'));

    assert!(!names.toggle(speaker.clone()));
    assert_eq!(2, names.len());
    assert!(names.non_empty());
}

#[test]
fn test_scores() {
    let scores = vec![3.5, 9.0, 1.25, 9.0];
    assert_eq!(Some(1), scores.argmax());
    assert_eq!(Some(2), scores.argmin());
    assert_eq!(22.75, scores.sum_all());
    assert_eq!(vec![3.5, 12.5, 13.75, 22.75], scores.cumsum());
    let (high, low) = scores.binary_split(|s| *s > 5.0);
    assert_eq!(vec![9.0, 9.0], high);
    assert_eq!(vec![3.5, 1.25], low);
    assert_eq!(&[1.25, 9.0], scores.take_last(2));
}

#[test]
fn test_selected_ids() {
    let mut selected: HashSet<u32> = HashSet::new();
    for id in [4, 8, 4, 15] {
        selected.toggle(id);
    }
    let mut ids: Vec<u32> = selected.into_iter().collect();
    ids.sort_unstable();
    assert_eq!(vec![8, 15], ids);
}
