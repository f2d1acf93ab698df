//! Scenario: Stateful tree menu driven by view intents
//!
//! Journey: A view reports clicks and collapse toggles as lineages; the
//! menu applies them and notifies the host.
//!
//! Success Criteria:
//! - Clicks on checkbox nodes check the whole subtree
//! - Collapsing hides descendants from the visible rows
//! - Handlers see the full lineage of the affected node

use std::cell::RefCell;
use std::rc::Rc;

use treemenu::{DeclarativeNode, IntentKind, Lineage, NodeDefaults, TreeIntent, TreeMenu};

/// SCENARIO: Check a folder, collapse it, render
#[test]
fn scenario_checkbox_menu() {
    let checks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&checks);

    let mut menu = TreeMenu::builder()
        .children([
            DeclarativeNode::new("src")
                .child(DeclarativeNode::new("lib.rs"))
                .child(DeclarativeNode::new("main.rs")),
            DeclarativeNode::new("Cargo.toml"),
        ])
        .defaults(NodeDefaults {
            checkbox: true,
            ..NodeDefaults::default()
        })
        .stateful(true)
        .on_check_change(move |lineage| sink.borrow_mut().push(lineage.clone()))
        .build()
        .unwrap();

    menu.click(&Lineage::from([0]));
    assert_eq!(*checks.borrow(), vec![Lineage::from([0])]);
    assert_eq!(
        menu.snapshot().checked_lineages(),
        vec![Lineage::from([0]), Lineage::from([0, 0]), Lineage::from([0, 1])]
    );

    menu.dispatch(TreeIntent::new(Lineage::from([0]), IntentKind::CollapseChange));
    assert_eq!(menu.render(true), "  ▶ ● src\n    ○ Cargo.toml\n");
}

/// SCENARIO: Stateless menu leaves state to the host
#[test]
fn scenario_stateless_menu_reports_only() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);

    let mut menu = TreeMenu::builder()
        .children([DeclarativeNode::new("a").child(DeclarativeNode::new("b"))])
        .on_click(move |lineage| sink.borrow_mut().push(lineage.to_path_string()))
        .build()
        .unwrap();
    let before = menu.snapshot().clone();

    menu.click(&Lineage::from([0, 0]));
    menu.dispatch(TreeIntent::new(Lineage::from([0]), IntentKind::CollapseChange));

    assert_eq!(*clicks.borrow(), vec!["0/0".to_string()]);
    assert_eq!(menu.snapshot(), &before);
}
