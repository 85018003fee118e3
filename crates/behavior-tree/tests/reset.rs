//! `reset` returns every node to its freshly constructed state.

mod common;

use behavior_tree::builder::*;
use behavior_tree::{Behavior, Status};
use common::{Probe, scripted, tick_n};

use Status::{Failure, Running, Success, Unknown};

/// Builds a fresh tree from scripted leaves.
type Factory = fn() -> Box<dyn Behavior>;

fn assert_reset_replays(name: &str, build: Factory, ticks: usize) {
    let mut fresh = build();
    let expected = tick_n(fresh.as_mut(), ticks);

    let mut tree = build();
    let first = tick_n(tree.as_mut(), ticks);
    tree.reset();
    let second = tick_n(tree.as_mut(), ticks);

    assert_eq!(first, expected, "{name} first run");
    assert_eq!(second, expected, "{name} after reset");
}

#[test]
fn every_node_replays_after_reset() {
    let cases: [(&str, Factory, usize); 8] = [
        (
            "sequence",
            || {
                sequence(vec![
                    scripted(&[Running, Success]),
                    scripted(&[Running, Running, Failure]),
                ])
            },
            4,
        ),
        (
            "selection",
            || {
                selection(vec![
                    scripted(&[Running, Failure]),
                    scripted(&[Running, Success]),
                ])
            },
            3,
        ),
        (
            "psequence",
            || {
                psequence(vec![
                    scripted(&[Success]),
                    scripted(&[Running, Running, Success]),
                ])
            },
            3,
        ),
        (
            "pselection",
            || {
                pselection(vec![
                    scripted(&[Failure]),
                    scripted(&[Running, Failure]),
                ])
            },
            2,
        ),
        ("invert", || invert(scripted(&[Running, Success])), 2),
        ("repeat", || repeat(scripted(&[Success, Unknown])), 2),
        (
            "until",
            || until(sequence(vec![scripted(&[Success]), scripted(&[Failure, Success])])),
            3,
        ),
        (
            "while",
            || while_(selection(vec![scripted(&[Failure]), scripted(&[Success, Failure])])),
            3,
        ),
    ];

    for (name, build, ticks) in cases {
        assert_reset_replays(name, build, ticks);
    }
}

#[test]
fn reset_reaches_every_descendant() {
    let (leaf_a, a) = Probe::wrap(scripted(&[Success]));
    let (leaf_b, b) = Probe::wrap(scripted(&[Running]));
    let (leaf_c, c) = Probe::wrap(scripted(&[Failure]));
    let mut tree = force_success(sequence(vec![
        psequence(vec![leaf_a, leaf_b]),
        selection(vec![invert(leaf_c)]),
    ]));

    tree.reset();
    assert_eq!((a.resets(), b.resets(), c.resets()), (1, 1, 1));

    tree.reset();
    assert_eq!((a.resets(), b.resets(), c.resets()), (2, 2, 2));
}

#[test]
fn reset_is_idempotent() {
    let mut tree = sequence(vec![scripted(&[Success]), scripted(&[Running, Success])]);

    assert_eq!(tree.execute(), Running);
    tree.reset();
    tree.reset();
    assert_eq!(tick_n(tree.as_mut(), 2), vec![Running, Success]);
}
