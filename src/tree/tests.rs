use rstest::*;

use crate::collation::{BinaryCollator, NaturalCollator};
use crate::config::TreeConfig;
use crate::observer::{RecordingObserver, RowRange, TreeEvent, TreeObserver};
use crate::path::PathError;
use crate::tree::children::sibling_order;
use crate::tree::{NodeId, PathTree, TreeError};

type TestTree = PathTree<u32, RecordingObserver>;

fn config() -> TreeConfig {
    TreeConfig::default()
        .with_scratch_dir("/scratch")
        .expect("Scratch dir should be absolute")
}

fn tree() -> TestTree {
    PathTree::with_observer(&config(), RecordingObserver::default())
}

fn tree_with(paths: &[&str]) -> TestTree {
    let mut tree = tree();
    for (payload, path) in paths.iter().enumerate() {
        tree.insert(path, payload as u32, None)
            .expect("Failed to insert path");
    }
    tree.observer_mut().take_events();
    tree
}

fn inserted(parent: Option<NodeId>, first: usize, last: usize) -> [TreeEvent; 2] {
    let range = RowRange::new(parent, first, last);
    [
        TreeEvent::RowsAboutToBeInserted(range),
        TreeEvent::RowsInserted(range),
    ]
}

fn removed(parent: Option<NodeId>, first: usize, last: usize) -> [TreeEvent; 2] {
    let range = RowRange::new(parent, first, last);
    [
        TreeEvent::RowsAboutToBeRemoved(range),
        TreeEvent::RowsRemoved(range),
    ]
}

/// Full paths of every visible node in presentation order.
fn outline<O: TreeObserver>(tree: &PathTree<u32, O>) -> Vec<String> {
    fn walk<O: TreeObserver>(tree: &PathTree<u32, O>, parent: Option<NodeId>, lines: &mut Vec<String>) {
        for row in 0..tree.row_count(parent) {
            let id = tree.index(parent, row).expect("Row should resolve");
            lines.push(tree.full_path(id).expect("Live node").to_string());
            if tree.is_directory(id) {
                walk(tree, Some(id), lines);
            }
        }
    }

    let mut lines = Vec::new();
    walk(tree, None, &mut lines);
    lines
}

fn root_path<O: TreeObserver>(tree: &PathTree<u32, O>) -> Option<&str> {
    tree.main_root().and_then(|root| tree.full_path(root))
}

/// Checks sibling ordering in every directory and that the row projection
/// agrees in both directions.
fn assert_consistent<O: TreeObserver>(tree: &PathTree<u32, O>) {
    let collator = NaturalCollator::default();
    let mut pending: Vec<NodeId> = tree
        .main_root()
        .into_iter()
        .chain(tree.scratch_root())
        .collect();

    while let Some(dir) = pending.pop() {
        let children: Vec<NodeId> = tree.children(dir).collect();
        assert!(!children.is_empty(), "Empty directory left in the tree");

        let split = children
            .iter()
            .position(|&id| !tree.is_directory(id))
            .unwrap_or(children.len());
        let (dirs, files) = children.split_at(split);
        assert!(files.iter().all(|&id| !tree.is_directory(id)));

        for group in [dirs, files] {
            for pair in group.windows(2) {
                let left = tree.name(pair[0]).expect("Live node");
                let right = tree.name(pair[1]).expect("Live node");
                assert_eq!(
                    sibling_order(&collator, left, right),
                    std::cmp::Ordering::Less,
                    "{left} should sort before {right}"
                );
            }
        }

        for &child in &children {
            assert_eq!(tree.index(tree.parent(child), tree.row(child).expect("Row")), Some(child));
            if Some(dir) != tree.main_root() && Some(dir) != tree.scratch_root() {
                assert_eq!(tree.parent(child), Some(dir));
            }
        }
        pending.extend(dirs.iter().copied());
    }

    for row in 0..tree.row_count(None) {
        let id = tree.index(None, row).expect("Top-level row should resolve");
        assert_eq!(tree.row(id), Some(row));
        assert_eq!(tree.parent(id), None);
    }
    assert_eq!(tree.index(None, tree.row_count(None)), None);
}

#[test]
fn first_insert_roots_tree_at_file_directory() {
    let mut tree = tree();
    let id = tree
        .insert("/a/b/c.txt", 7, None)
        .expect("Failed to insert path");

    assert_eq!(root_path(&tree), Some("/a/b"));
    assert_eq!(tree.find_file("/a/b/c.txt"), Ok(id));
    assert_eq!(tree.row(id), Some(0));
    assert_eq!(tree.parent(id), None);
    assert_eq!(tree.payload(id), Some(&7));
    assert_eq!(tree.observer().events(), inserted(None, 0, 0));
}

#[test]
fn common_ancestor_becomes_root_for_sibling_branches() {
    let mut tree = tree_with(&["/a/b/x"]);
    tree.insert("/a/y/w", 1, None).expect("Failed to insert path");

    assert_eq!(root_path(&tree), Some("/a"));
    assert_eq!(outline(&tree), ["/a/b", "/a/b/x", "/a/y", "/a/y/w"]);
    assert_eq!(
        tree.observer().events(),
        [removed(None, 0, 0), inserted(None, 0, 1)].concat()
    );
    assert_consistent(&tree);
}

#[test]
fn file_in_parent_of_root_joins_as_sibling() {
    let mut tree = tree_with(&["/a/b/x"]);
    tree.insert("/a/y", 1, None).expect("Failed to insert path");

    assert_eq!(root_path(&tree), Some("/a"));
    assert_eq!(outline(&tree), ["/a/b", "/a/b/x", "/a/y"]);
    assert_consistent(&tree);
}

#[test]
fn unrelated_paths_meet_at_filesystem_root() {
    let mut tree = tree_with(&["/a/b/x"]);
    tree.insert("/z/w", 1, None).expect("Failed to insert path");

    let root = tree.main_root().expect("Tree should have a root");
    assert_eq!(tree.full_path(root), Some("/"));
    assert_eq!(tree.name(root), Some(""));
    assert_eq!(outline(&tree), ["/a", "/a/b", "/a/b/x", "/z", "/z/w"]);
    assert_consistent(&tree);
}

#[test]
fn file_above_root_promotes_its_directory() {
    let mut tree = tree_with(&["/a/b/c/x"]);
    let old_root = tree.main_root().expect("Tree should have a root");

    let id = tree.insert("/a/b/y", 1, None).expect("Failed to insert path");

    assert_eq!(root_path(&tree), Some("/a/b"));
    assert_eq!(outline(&tree), ["/a/b/c", "/a/b/c/x", "/a/b/y"]);
    assert_eq!(tree.row(old_root), Some(0));
    assert_eq!(tree.row(id), Some(1));
    assert_eq!(
        tree.observer().events(),
        [removed(None, 0, 0), inserted(None, 0, 1)].concat()
    );
}

#[test]
fn promotion_builds_intermediate_directories() {
    let mut tree = tree_with(&["/a/b/c/d/x", "/a/b/c/d/y"]);
    tree.insert("/a/top.txt", 2, None).expect("Failed to insert path");

    assert_eq!(root_path(&tree), Some("/a"));
    assert_eq!(
        outline(&tree),
        ["/a/b", "/a/b/c", "/a/b/c/d", "/a/b/c/d/x", "/a/b/c/d/y", "/a/top.txt"]
    );
    assert_eq!(
        tree.observer().events(),
        [removed(None, 0, 1), inserted(None, 0, 1)].concat()
    );
    assert_consistent(&tree);
}

#[test]
fn deeper_paths_extend_the_tree_with_one_notification() {
    let mut tree = tree_with(&["/a/m.txt", "/a/b/n.txt"]);
    let id = tree
        .insert("/a/c/d/e/f.txt", 2, None)
        .expect("Failed to insert path");

    assert_eq!(root_path(&tree), Some("/a"));
    assert_eq!(tree.observer().events(), inserted(None, 1, 1));
    let deepest = tree.find_directory("/a/c/d/e").expect("Directory should exist");
    assert_eq!(tree.parent(id), Some(deepest));
    assert_eq!(
        outline(&tree),
        [
            "/a/b",
            "/a/b/n.txt",
            "/a/c",
            "/a/c/d",
            "/a/c/d/e",
            "/a/c/d/e/f.txt",
            "/a/m.txt"
        ]
    );
    assert_consistent(&tree);
}

#[test]
fn existing_directories_are_reused() {
    let mut tree = tree_with(&["/a/x.txt", "/a/b/c/y.txt"]);
    let nodes_before = tree.node_count();
    let id = tree
        .insert("/a/b/c/z.txt", 2, None)
        .expect("Failed to insert path");

    let dir = tree.find_directory("/a/b/c").expect("Directory should exist");
    assert_eq!(tree.parent(id), Some(dir));
    assert_eq!(tree.node_count(), nodes_before + 1);
    assert_eq!(tree.observer().events(), inserted(Some(dir), 1, 1));
}

#[test]
fn sibling_prefix_is_not_an_ancestor() {
    let mut tree = tree_with(&["/a/b/x"]);
    tree.insert("/a/bc/y", 1, None).expect("Failed to insert path");

    assert_eq!(root_path(&tree), Some("/a"));
    assert_eq!(outline(&tree), ["/a/b", "/a/b/x", "/a/bc", "/a/bc/y"]);
}

#[test]
fn children_sort_naturally_with_directories_first() {
    let tree = tree_with(&[
        "/d/file10.txt",
        "/d/file2.txt",
        "/d/File1.txt",
        "/d/sub9/a",
        "/d/sub10/a",
        "/d/Sub1/a",
    ]);

    let top: Vec<&str> = (0..tree.row_count(None))
        .filter_map(|row| tree.index(None, row))
        .filter_map(|id| tree.name(id))
        .collect();
    assert_eq!(
        top,
        ["Sub1", "sub9", "sub10", "File1.txt", "file2.txt", "file10.txt"]
    );
    assert_consistent(&tree);
}

#[test]
fn injected_collator_controls_order() {
    let mut tree: PathTree<u32> =
        PathTree::with_collator(&config(), BinaryCollator, crate::observer::NullObserver);
    for (payload, path) in ["/d/b", "/d/a10", "/d/a9", "/d/B"].iter().enumerate() {
        tree.insert(path, payload as u32, None)
            .expect("Failed to insert path");
    }

    let names: Vec<&str> = (0..tree.row_count(None))
        .filter_map(|row| tree.index(None, row))
        .filter_map(|id| tree.name(id))
        .collect();
    assert_eq!(names, ["B", "a10", "a9", "b"]);
}

#[test]
fn removing_last_file_prunes_empty_ancestors() {
    let mut tree = tree_with(&["/r/keep.txt", "/r/a/b/c/file"]);
    let id = tree.find_file("/r/a/b/c/file").expect("File should exist");

    let removed_node = tree.remove(id).expect("Failed to remove node");

    assert_eq!(removed_node.path, "/r/a");
    assert!(removed_node.is_directory);
    assert_eq!(removed_node.payloads, [1]);
    assert_eq!(outline(&tree), ["/r/keep.txt"]);
    assert_eq!(tree.observer().events(), removed(None, 0, 0));
    assert!(!tree.contains(id));
    assert_eq!(tree.find_directory("/r/a"), Err(TreeError::NotFound {
        path: "/r/a".to_string(),
    }));
}

#[test]
fn removing_only_content_clears_tree() {
    let mut tree = tree_with(&["/a/b/c/file"]);
    let id = tree.find_file("/a/b/c/file").expect("File should exist");

    let removed_node = tree.remove(id).expect("Failed to remove node");

    assert_eq!(removed_node.path, "/a/b/c");
    assert!(removed_node.is_directory);
    assert!(tree.is_empty());
    assert_eq!(tree.main_root(), None);
    assert_eq!(tree.node_count(), 0);
    assert_eq!(tree.observer().events(), removed(None, 0, 0));
}

#[test]
fn removing_one_of_several_files_keeps_directory() {
    let mut tree = tree_with(&["/a/sub/x", "/a/sub/y", "/a/z"]);
    let sub = tree.find_directory("/a/sub").expect("Directory should exist");
    let y = tree.find_file("/a/sub/y").expect("File should exist");

    let removed_node = tree.remove(y).expect("Failed to remove node");

    assert_eq!(removed_node.path, "/a/sub/y");
    assert!(!removed_node.is_directory);
    assert_eq!(tree.observer().events(), removed(Some(sub), 1, 1));
    assert_eq!(outline(&tree), ["/a/sub", "/a/sub/x", "/a/z"]);
}

#[test]
fn removing_a_directory_releases_all_payloads() {
    let mut tree = tree_with(&["/a/sub/x", "/a/sub/deeper/y", "/a/z"]);
    let sub = tree.find_directory("/a/sub").expect("Directory should exist");

    let mut removed_node = tree.remove(sub).expect("Failed to remove node");
    removed_node.payloads.sort();

    assert!(removed_node.is_directory);
    assert_eq!(removed_node.payloads, [0, 1]);
    assert_eq!(outline(&tree), ["/a/z"]);
    assert_eq!(tree.node_count(), 2);
}

#[test]
fn insert_then_remove_restores_previous_shape() {
    let mut tree = tree_with(&["/p/one.txt", "/p/sub/two.txt"]);
    let before = outline(&tree);

    for path in ["/p/sub/three.txt", "/p/new/deep/f.txt", "/p/zero.txt"] {
        let id = tree.insert(path, 9, None).expect("Failed to insert path");
        tree.remove(id).expect("Failed to remove node");
        assert_eq!(outline(&tree), before);
    }
    assert!(tree.observer().is_balanced());
}

#[test]
fn stale_handles_are_rejected() {
    let mut tree = tree_with(&["/a/x", "/a/y"]);
    let x = tree.find_file("/a/x").expect("File should exist");
    tree.remove(x).expect("Failed to remove node");
    tree.observer_mut().take_events();

    assert_eq!(tree.remove(x), Err(TreeError::InvalidHandle { id: x }));
    assert_eq!(tree.row(x), None);
    assert_eq!(tree.name(x), None);
    assert!(tree.observer().events().is_empty());

    let reused = tree.insert("/a/w", 5, None).expect("Failed to insert path");
    assert_ne!(reused, x);
    assert_eq!(tree.payload(x), None);
}

#[test]
fn duplicate_insert_is_rejected_without_changes() {
    let mut tree = tree_with(&["/a/x"]);
    let before = outline(&tree);

    assert_eq!(
        tree.insert("/a/./x", 1, None),
        Err(TreeError::AlreadyExists {
            path: "/a/x".to_string()
        })
    );
    assert_eq!(outline(&tree), before);
    assert!(tree.observer().events().is_empty());
}

#[rstest]
#[case("", PathError::Empty)]
#[case("relative/file.txt", PathError::Relative { path: "relative/file.txt".to_string() })]
#[case("/a/dir/", PathError::NoFileName { path: "/a/dir/".to_string() })]
#[case("/a/b/..", PathError::NoFileName { path: "/a/b/..".to_string() })]
#[case("   ", PathError::Empty)]
fn malformed_paths_leave_tree_untouched(#[case] path: &str, #[case] expected: PathError) {
    let mut tree = tree();
    assert_eq!(
        tree.insert(path, 0, None),
        Err(TreeError::MalformedPath { source: expected.clone() })
    );
    assert_eq!(
        tree.find(path, false),
        Err(TreeError::MalformedPath { source: expected })
    );
    assert!(tree.is_empty());
    assert!(tree.observer().events().is_empty());
}

#[test]
fn surrounding_spaces_name_distinct_files() {
    let mut tree = tree();
    let spaced = tree.insert("/a/x ", 0, None).expect("Failed to insert path");
    let plain = tree.insert("/a/x", 1, None).expect("Failed to insert path");

    assert_ne!(spaced, plain);
    assert_eq!(tree.full_path(spaced), Some("/a/x "));
    assert_eq!(tree.full_path(plain), Some("/a/x"));
    assert_eq!(tree.find_file("/a/x "), Ok(spaced));
    assert_eq!(tree.find_file("/a/x"), Ok(plain));
    assert_consistent(&tree);
}

#[test]
fn scratch_lookups_match_the_full_path() {
    let mut tree = tree_with(&["/scratch/a/x"]);
    let existing = tree.find_file("/scratch/a/x").expect("File should exist");

    assert_eq!(
        tree.find_file("/scratch/b/x"),
        Err(TreeError::NotFound {
            path: "/scratch/b/x".to_string()
        })
    );
    assert_eq!(
        tree.insert("/scratch/b/x", 1, None),
        Err(TreeError::ScratchNameTaken {
            path: "/scratch/b/x".to_string(),
            existing: "/scratch/a/x".to_string(),
        })
    );
    assert_eq!(
        tree.insert("/scratch/a/x", 2, None),
        Err(TreeError::AlreadyExists {
            path: "/scratch/a/x".to_string()
        })
    );
    assert!(tree.observer().events().is_empty());
    assert_eq!(outline(&tree), ["/scratch/a/x"]);
    assert_eq!(tree.payload(existing), Some(&0));
}

#[rstest]
#[case("/a/missing.txt")]
#[case("/a/b/missing.txt")]
#[case("/elsewhere/x")]
#[case("/scratch/x")]
fn lookups_outside_the_tree_fail(#[case] path: &str) {
    let tree = tree_with(&["/a/b/x", "/a/y"]);
    assert!(matches!(
        tree.find_file(path),
        Err(TreeError::NotFound { .. })
    ));
}

#[test]
fn files_and_directories_are_looked_up_separately() {
    let tree = tree_with(&["/a/b/x", "/a/b"]);
    let file = tree.find_file("/a/b").expect("File should exist");
    let dir = tree.find_directory("/a/b").expect("Directory should exist");

    assert_ne!(file, dir);
    assert!(tree.is_directory(dir));
    assert!(!tree.is_directory(file));
    assert_eq!(tree.row(dir), Some(0));
    assert_eq!(tree.row(file), Some(1));
}

#[test]
fn scratch_paths_stay_in_scratch_tree() {
    let mut tree = tree();
    let a = tree.insert("/scratch/a.txt", 0, None).expect("Failed to insert path");
    let b = tree.insert("/home/u/b.txt", 1, None).expect("Failed to insert path");
    let c = tree
        .insert("/scratch/sub/c.txt", 2, None)
        .expect("Failed to insert path");

    let scratch = tree.scratch_root().expect("Scratch root should exist");
    assert_eq!(tree.full_path(scratch), Some("/scratch"));
    assert_eq!(tree.name(scratch), Some("scratch"));
    assert_eq!(root_path(&tree), Some("/home/u"));

    assert_eq!(outline(&tree), ["/home/u/b.txt", "/scratch/a.txt", "/scratch/sub/c.txt"]);
    assert_eq!(tree.row(b), Some(0));
    assert_eq!(tree.row(a), Some(1));
    assert_eq!(tree.row(c), Some(2));
    assert!(tree.is_scratch(a) && tree.is_scratch(c));
    assert!(!tree.is_scratch(b));
    assert_eq!(tree.find_file("/scratch/sub/c.txt"), Ok(c));

    assert_eq!(
        tree.observer().events(),
        [inserted(None, 0, 0), inserted(None, 0, 0), inserted(None, 2, 2)].concat()
    );
    assert_consistent(&tree);
}

#[test]
fn removing_last_scratch_file_drops_scratch_root() {
    let mut tree = tree_with(&["/home/u/a.txt", "/home/u/b.txt", "/scratch/t.txt"]);
    let t = tree.find_file("/scratch/t.txt").expect("File should exist");

    let removed_node = tree.remove(t).expect("Failed to remove node");

    assert_eq!(removed_node.path, "/scratch");
    assert_eq!(tree.scratch_root(), None);
    assert_eq!(tree.observer().events(), removed(None, 2, 2));
    assert_eq!(outline(&tree), ["/home/u/a.txt", "/home/u/b.txt"]);
}

#[test]
fn reroot_keeps_scratch_rows_after_main_rows() {
    let mut tree = tree_with(&["/scratch/t.txt", "/a/b/x"]);
    tree.insert("/a/c/y", 2, None).expect("Failed to insert path");

    assert_eq!(outline(&tree), ["/a/b", "/a/b/x", "/a/c", "/a/c/y", "/scratch/t.txt"]);
    assert_eq!(
        tree.observer().events(),
        [removed(None, 0, 0), inserted(None, 0, 1)].concat()
    );
    assert_consistent(&tree);
}

#[test]
fn clear_discards_everything() {
    let mut tree = tree_with(&["/a/x", "/a/y", "/scratch/t"]);
    let x = tree.find_file("/a/x").expect("File should exist");

    let mut payloads = tree.clear();
    payloads.sort();

    assert_eq!(payloads, [0, 1, 2]);
    assert!(tree.is_empty());
    assert_eq!(tree.row_count(None), 0);
    assert!(!tree.contains(x));
    assert_eq!(tree.observer().events(), removed(None, 0, 2));

    tree.observer_mut().take_events();
    assert!(tree.clear().is_empty());
    assert!(tree.observer().events().is_empty());
}

#[test]
fn platform_spellings_share_nodes() {
    let mut tree = tree();
    let first = tree
        .insert("C:\\data\\a.txt", 0, None)
        .expect("Failed to insert path");
    let second = tree
        .insert("/C:/data/b.txt", 1, None)
        .expect("Failed to insert path");

    assert_eq!(root_path(&tree), Some("/C:/data"));
    assert_eq!(tree.parent(first), tree.parent(second));
    assert_eq!(tree.find_file("C:/data/a.txt"), Ok(first));
}

#[test]
fn file_attributes() {
    let mut tree = tree();
    let id = tree
        .insert("/docs/scan-001.png", 3, Some("Page 1"))
        .expect("Failed to insert path");
    let plain = tree
        .insert("/docs/scan-002.png", 4, Some(""))
        .expect("Failed to insert path");

    assert_eq!(tree.display_name(id), Some("Page 1"));
    assert_eq!(tree.display_name(plain), Some("scan-002.png"));
    assert_eq!(tree.name(id), Some("scan-001.png"));
    assert!(!tree.is_editable(id));

    tree.set_editable(id, true).expect("Live handle");
    assert!(tree.is_editable(id));

    let root = tree.main_root().expect("Tree should have a root");
    tree.set_editable(root, true).expect("Live handle");
    assert!(!tree.is_editable(root));

    if let Some(payload) = tree.payload_mut(id) {
        *payload = 30;
    }
    assert_eq!(tree.payload(id), Some(&30));
    assert_eq!(tree.payload(root), None);
}

#[test]
fn roots_have_no_row() {
    let tree = tree_with(&["/a/b/x"]);
    let root = tree.main_root().expect("Tree should have a root");

    assert_eq!(tree.row(root), None);
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.index(Some(root), 0), None);
    assert_eq!(tree.row_count(Some(root)), 0);
    assert_eq!(tree.child_count(root), 1);
}

/// Minimal deterministic generator for shuffled insertion orders.
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(2024)]
fn invariants_hold_for_any_insertion_order(#[case] seed: u64) {
    let mut paths = vec![
        "/home/ann/docs/report10.txt",
        "/home/ann/docs/report2.txt",
        "/home/ann/docs/old/report1.txt",
        "/home/ann/pics/2023/img9.png",
        "/home/ann/pics/2023/img10.png",
        "/home/bob/notes.md",
        "/home/readme",
        "/srv/data/a/b/c/d.bin",
        "/srv/data/e.bin",
        "/scratch/one.tmp",
        "/scratch/nested/two.tmp",
        "/opt/tool/bin/run",
        "/x",
    ];
    let mut rng = Lcg(seed);
    for i in (1..paths.len()).rev() {
        paths.swap(i, rng.below(i + 1));
    }

    let mut tree = tree();
    let mut handles = Vec::new();
    for (payload, path) in paths.iter().enumerate() {
        let id = tree
            .insert(path, payload as u32, None)
            .expect("Failed to insert path");
        assert_eq!(tree.find_file(path), Ok(id));
        assert!(tree.observer().is_balanced());
        assert_consistent(&tree);
        if let Some(root) = tree.main_root() {
            assert!(!tree.is_scratch(root));
        }
        handles.push((path, id));
    }

    assert_eq!(root_path(&tree), Some("/"));
    for (path, id) in &handles {
        assert_eq!(tree.is_scratch(*id), path.starts_with("/scratch/"));
        assert_eq!(tree.find_file(path), Ok(*id));
    }

    while !handles.is_empty() {
        let (path, id) = handles.swap_remove(rng.below(handles.len()));
        tree.remove(id).expect("Failed to remove node");
        assert!(tree.find_file(path).is_err());
        assert!(tree.observer().is_balanced());
        assert_consistent(&tree);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 0);
}
