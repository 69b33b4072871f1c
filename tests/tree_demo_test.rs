//! Tests for BinaryTreeDemo

use rstest::{fixture, rstest};

use dsdemo::application::services::{BinaryTreeDemo, TREE_CLEARED_MESSAGE, TREE_READY_MESSAGE};
use dsdemo::application::StatusKind;
use dsdemo::domain::{DomainError, TraversalKind};
use dsdemo::util::testing;

#[fixture]
fn demo() -> BinaryTreeDemo {
    testing::init_test_setup();
    let mut demo = BinaryTreeDemo::default();
    demo.reset();
    demo
}

#[rstest]
#[case(TraversalKind::Inorder, vec![30, 50, 70], "INORDER Traversal: 30 -> 50 -> 70")]
#[case(TraversalKind::Preorder, vec![50, 30, 70], "PREORDER Traversal: 50 -> 30 -> 70")]
#[case(TraversalKind::Postorder, vec![30, 70, 50], "POSTORDER Traversal: 30 -> 70 -> 50")]
fn given_demo_tree_when_traversing_then_yields_expected_order(
    mut demo: BinaryTreeDemo,
    #[case] kind: TraversalKind,
    #[case] expected: Vec<i64>,
    #[case] message: &str,
) {
    let report = demo.traverse(kind);

    assert_eq!(report.value(), Some(&expected));
    assert_eq!(report.status.kind, StatusKind::Success);
    assert_eq!(report.status.message, message);
}

#[rstest]
fn given_demo_tree_when_traversing_twice_then_results_are_identical(mut demo: BinaryTreeDemo) {
    for kind in TraversalKind::ALL {
        let first = demo.traverse(kind);
        let second = demo.traverse(kind);
        assert_eq!(first, second);
    }
}

#[rstest]
fn given_cleared_tree_when_traversing_then_reports_empty_tree(mut demo: BinaryTreeDemo) {
    let cleared = demo.clear();
    assert_eq!(cleared.status.message, TREE_CLEARED_MESSAGE);

    for kind in TraversalKind::ALL {
        let report = demo.traverse(kind);
        assert_eq!(report.error(), Some(&DomainError::EmptyTree));
        assert_eq!(report.status.message, "Tree is empty.");
        assert!(!report.status.is_error());
    }
}

#[rstest]
fn given_cleared_tree_when_resetting_then_traversals_match_again(mut demo: BinaryTreeDemo) {
    demo.clear();

    let reset = demo.reset();

    assert_eq!(reset.status.message, TREE_READY_MESSAGE);
    assert_eq!(
        demo.traverse(TraversalKind::Inorder).value(),
        Some(&vec![30, 50, 70])
    );
    assert_eq!(
        demo.traverse(TraversalKind::Preorder).value(),
        Some(&vec![50, 30, 70])
    );
    assert_eq!(
        demo.traverse(TraversalKind::Postorder).value(),
        Some(&vec![30, 70, 50])
    );
}

#[rstest]
fn given_custom_separator_when_traversing_then_output_uses_it() {
    let mut demo = BinaryTreeDemo::new(", ");
    demo.reset();

    let report = demo.traverse(TraversalKind::Inorder);

    assert_eq!(report.status.message, "INORDER Traversal: 30, 50, 70");
}

#[rstest]
fn given_demo_tree_when_rendering_shape_then_shows_all_values(demo: BinaryTreeDemo) {
    let shape = demo.to_tree_string().to_string();

    for value in ["50", "30", "70"] {
        assert!(shape.contains(value), "missing {} in\n{}", value, shape);
    }
    assert!(shape.starts_with("50"));
}

#[rstest]
fn given_demo_tree_when_describing_then_reports_depth_and_leaves(demo: BinaryTreeDemo) {
    let description = demo.describe();

    let last = description.lines().last().unwrap();
    assert_eq!(last, "depth: 2, leaves: 30, 70");
}

#[rstest]
fn given_cleared_tree_when_describing_then_shows_only_sentinel(mut demo: BinaryTreeDemo) {
    demo.clear();

    assert_eq!(demo.describe(), "Tree is empty.");
}
