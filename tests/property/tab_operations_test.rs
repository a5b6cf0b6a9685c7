//! Property-based tests for Tab Manager operations.
//!
//! For any sequence of tab creations, closures and selections, the tab list
//! is never empty and the active id always names a tab in it.

use proptest::prelude::*;
use tabshell::managers::tab_manager::{TabManager, TabManagerTrait};

/// Operations that can be performed on the TabManager.
#[derive(Debug, Clone)]
enum TabOp {
    Create,
    Close(usize), // index into the current tab list
    Select(usize),
    Edit(String),
    Submit,
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Create),
            3 => (0..20usize).prop_map(TabOp::Close),
            2 => (0..20usize).prop_map(TabOp::Select),
            1 => "[a-z. ]{0,12}".prop_map(TabOp::Edit),
            1 => Just(TabOp::Submit),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tabs_never_empty_and_active_always_member(ops in arb_tab_ops()) {
        let mut manager = TabManager::default();

        for op in &ops {
            let before: Vec<String> = manager.get_all_tabs().iter().map(|t| t.id.clone()).collect();
            let active_before = manager.active_tab_id().to_string();

            match op {
                TabOp::Create => {
                    manager.new_tab();
                    prop_assert_eq!(manager.tab_count(), before.len() + 1);
                }
                TabOp::Close(idx) => {
                    let tab_id = before[idx % before.len()].clone();
                    manager.close_tab(&tab_id).unwrap();

                    if before.len() == 1 {
                        prop_assert_eq!(manager.tab_count(), 1);
                        prop_assert_ne!(manager.active_tab_id(), tab_id.as_str());
                    } else {
                        prop_assert_eq!(manager.tab_count(), before.len() - 1);
                        if tab_id == active_before {
                            prop_assert_eq!(manager.active_tab_id(), manager.get_all_tabs()[0].id.as_str());
                        } else {
                            prop_assert_eq!(manager.active_tab_id(), active_before.as_str());
                        }
                    }
                }
                TabOp::Select(idx) => {
                    let tab_id = before[idx % before.len()].clone();
                    manager.select_tab(&tab_id).unwrap();
                    let url = manager.get_active_tab().url.clone();
                    prop_assert_eq!(manager.address_bar_text(), url.as_str());
                }
                TabOp::Edit(text) => manager.edit_address_bar(text),
                TabOp::Submit => {
                    let url = manager.submit();
                    prop_assert_eq!(manager.get_active_tab().url.as_str(), url.as_str());
                }
            }

            prop_assert!(manager.tab_count() >= 1, "tab list empty after {:?}", op);
            let active = manager.active_tab_id().to_string();
            prop_assert!(
                manager.get_tab(&active).is_some(),
                "active id {} not in tabs after {:?}",
                active,
                op
            );
        }
    }
}
