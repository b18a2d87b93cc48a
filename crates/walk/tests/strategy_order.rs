mod common;

use common::{MemoryTree, collect_paths};
use recursive_walk::{Strategy, WalkBuilder, WalkErrorKind};

fn sample() -> MemoryTree {
    // Insertion order deliberately differs from name order.
    MemoryTree::new("/r", &["m/", "m/k", "a", "m/n/", "m/n/deep", "c/", "c/j"])
}

#[test]
fn children_first_follows_enumerator_order() {
    let walker = WalkBuilder::new("/r").build_with(sample()).expect("walker");

    assert_eq!(
        collect_paths(walker),
        ["/r", "/r/m", "/r/m/k", "/r/m/n", "/r/m/n/deep", "/r/a", "/r/c", "/r/c/j"]
    );
}

#[test]
fn siblings_first_follows_enumerator_order_per_level() {
    let walker = WalkBuilder::new("/r")
        .strategy(Strategy::SiblingsFirst)
        .build_with(sample())
        .expect("walker");

    assert_eq!(
        collect_paths(walker),
        ["/r", "/r/m", "/r/a", "/r/c", "/r/m/k", "/r/m/n", "/r/c/j", "/r/m/n/deep"]
    );
}

#[test]
fn siblings_first_keeps_only_one_level_open() {
    let tree = sample();
    let live = tree.live();
    let mut walker = WalkBuilder::new("/r")
        .strategy(Strategy::SiblingsFirst)
        .build_with(tree)
        .expect("walker");

    while !walker.is_finished() {
        walker.advance().expect("advance");
        assert!(walker.open_levels() <= 1);
        assert!(live.get() <= 1);
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn max_depth_prevents_opening_directories_at_the_bound() {
    let tree = sample();
    let opened = tree.opened();
    let walker = WalkBuilder::new("/r")
        .max_depth(1)
        .build_with(tree)
        .expect("walker");

    assert_eq!(collect_paths(walker), ["/r", "/r/m", "/r/a", "/r/c"]);
    assert_eq!(opened.borrow().as_slice(), [std::path::PathBuf::from("/r")]);
}

#[test]
fn siblings_first_max_depth_two() {
    let walker = WalkBuilder::new("/r")
        .strategy(Strategy::SiblingsFirst)
        .max_depth(2)
        .build_with(sample())
        .expect("walker");

    assert_eq!(
        collect_paths(walker),
        ["/r", "/r/m", "/r/a", "/r/c", "/r/m/k", "/r/m/n", "/r/c/j"]
    );
}

#[test]
fn unreadable_directory_surfaces_error_and_finishes() {
    for strategy in [Strategy::ChildrenFirst, Strategy::SiblingsFirst] {
        let tree = sample().unreadable("/r/m");
        let live = tree.live();
        let mut walker = WalkBuilder::new("/r")
            .strategy(strategy)
            .build_with(tree)
            .expect("walker");

        let mut error = None;
        while !walker.is_finished() {
            if let Err(failure) = walker.advance() {
                error = Some(failure);
            }
        }

        let error = error.expect("unreadable directory reported");
        assert!(matches!(error.kind(), WalkErrorKind::ReadDir { .. }));
        assert_eq!(error.path(), std::path::Path::new("/r/m"));
        assert!(!error.is_root_error());
        assert_eq!(live.get(), 0, "{strategy}");

        let last = walker.current().to_path_buf();
        assert_eq!(walker.advance().expect("finished walker"), last);
    }
}

#[test]
fn unreadable_directory_keeps_last_good_path() {
    let mut walker = WalkBuilder::new("/r")
        .build_with(sample().unreadable("/r/m"))
        .expect("walker");

    assert_eq!(walker.advance().expect("first child"), std::path::Path::new("/r/m"));
    let error = walker.advance().expect_err("descending into /r/m fails");
    assert!(matches!(error.kind(), WalkErrorKind::ReadDir { .. }));
    assert!(walker.is_finished());
    assert_eq!(walker.current(), std::path::Path::new("/r/m"));
}

#[test]
fn mid_directory_failure_is_reported_by_iterator() {
    let walker = WalkBuilder::new("/r")
        .build_with(sample().failing_after("/r/m", 1))
        .expect("walker");

    let items: Vec<_> = walker.collect();
    let paths: Vec<String> = items
        .iter()
        .filter_map(|item| item.as_ref().ok())
        .map(|entry| entry.path().to_string_lossy().into_owned())
        .collect();
    assert_eq!(paths, ["/r", "/r/m", "/r/m/k"]);

    let error = items
        .last()
        .and_then(|item| item.as_ref().err())
        .expect("last item is the failure");
    assert!(matches!(error.kind(), WalkErrorKind::ReadDirEntry { .. }));
}

#[test]
fn missing_root_is_rejected_by_backend() {
    let error = WalkBuilder::new("/elsewhere")
        .build_with(sample())
        .expect_err("unknown root");
    assert!(matches!(error.kind(), WalkErrorKind::PathNotFound { .. }));
    assert!(error.is_root_error());
}

#[test]
fn strategy_parses_from_config_strings() {
    for (text, expected) in [
        ("children-first", Strategy::ChildrenFirst),
        ("dfs", Strategy::ChildrenFirst),
        ("siblings-first", Strategy::SiblingsFirst),
        ("breadth-first", Strategy::SiblingsFirst),
    ] {
        let parsed: Strategy = text.parse().expect("known strategy");
        assert_eq!(parsed, expected);

        let walker = WalkBuilder::new("/r")
            .strategy(parsed)
            .build_with(sample())
            .expect("walker");
        assert_eq!(walker.strategy(), expected);
    }
    assert!("sideways".parse::<Strategy>().is_err());
}
