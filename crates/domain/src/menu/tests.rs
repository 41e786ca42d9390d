use proptest::prelude::*;

use super::*;

fn menu(menu_id: &str, parent_id: Option<&str>, sort_order: i32) -> Menu {
    styled_menu(
        menu_id,
        parent_id,
        sort_order,
        true,
        Some(MenuStatus::Active),
    )
}

fn styled_menu(
    menu_id: &str,
    parent_id: Option<&str>,
    sort_order: i32,
    visible: bool,
    status: Option<MenuStatus>,
) -> Menu {
    Menu::new(
        MenuId::new(),
        menu_id,
        MenuAttributes {
            parent_id: parent_id.map(str::to_owned),
            name: format!("Menu {menu_id}"),
            path: Some(format!("/{menu_id}")),
            icon: None,
            sort_order,
            menu_type: Some(MenuType::Menu),
            permission: None,
            visible,
            status,
        },
    )
    .unwrap_or_else(|_| panic!("test"))
}

fn ids(nodes: &[MenuNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.menu().menu_id()).collect()
}

fn count_nodes(nodes: &[MenuNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_nodes(node.children()))
        .sum()
}

#[test]
fn dangling_parent_becomes_root() {
    let forest = build_menu_forest(vec![
        menu("a", None, 0),
        menu("b", Some("a"), 0),
        menu("c", Some("x"), 1),
    ]);

    assert_eq!(ids(&forest), vec!["a", "c"]);
    assert_eq!(ids(forest[0].children()), vec!["b"]);
    assert!(forest[1].children().is_empty());
}

#[test]
fn empty_parent_id_is_treated_as_root() {
    let forest = build_menu_forest(vec![menu("a", Some(""), 0)]);
    assert_eq!(ids(&forest), vec!["a"]);
}

#[test]
fn first_duplicate_menu_id_receives_children() {
    let forest = build_menu_forest(vec![
        menu("a", None, 0),
        menu("a", None, 1),
        menu("b", Some("a"), 2),
    ]);

    assert_eq!(ids(&forest), vec!["a", "a"]);
    assert_eq!(ids(forest[0].children()), vec!["b"]);
    assert!(forest[1].children().is_empty());
}

#[test]
fn children_follow_input_order() {
    let forest = build_menu_forest(vec![
        menu("root", None, 0),
        menu("second", Some("root"), 5),
        menu("first", Some("root"), 1),
    ]);

    assert_eq!(ids(forest[0].children()), vec!["second", "first"]);
}

#[test]
fn full_forest_sorts_siblings() {
    let forest = build_full_menu_forest(vec![
        menu("root", None, 0),
        menu("second", Some("root"), 5),
        menu("first", Some("root"), 1),
        menu("hidden", Some("root"), 3),
    ]);

    assert_eq!(ids(forest[0].children()), vec!["first", "hidden", "second"]);
}

#[test]
fn cyclic_menus_are_left_out_of_the_forest() {
    let forest = build_menu_forest(vec![
        menu("a", Some("b"), 0),
        menu("b", Some("a"), 0),
        menu("c", None, 0),
    ]);

    assert_eq!(ids(&forest), vec!["c"]);
}

#[test]
fn visible_forest_promotes_children_of_hidden_parents() {
    let forest = build_visible_menu_forest(vec![
        styled_menu("settings", None, 0, false, Some(MenuStatus::Active)),
        menu("profile", Some("settings"), 2),
        menu("security", Some("settings"), 1),
        menu("posts", None, 3),
    ]);

    assert_eq!(ids(&forest), vec!["security", "profile", "posts"]);
}

#[test]
fn visible_forest_drops_disabled_but_keeps_unset_status() {
    let forest = build_visible_menu_forest(vec![
        styled_menu("disabled", None, 0, true, Some(MenuStatus::Disabled)),
        styled_menu("unset", None, 1, true, None),
    ]);

    assert_eq!(ids(&forest), vec!["unset"]);
}

#[test]
fn cascade_order_lists_descendants_first() {
    let menus = vec![
        menu("root", None, 0),
        menu("child", Some("root"), 0),
        menu("grandchild", Some("child"), 0),
        menu("sibling", Some("root"), 1),
        menu("other", None, 1),
    ];

    assert_eq!(
        cascade_deletion_order("root", &menus),
        vec!["grandchild", "child", "sibling", "root"]
    );
}

#[test]
fn cascade_order_terminates_on_cycles() {
    let menus = vec![menu("a", Some("b"), 0), menu("b", Some("a"), 0)];

    assert_eq!(cascade_deletion_order("a", &menus), vec!["b", "a"]);
}

#[test]
fn generated_menu_id_has_stable_shape() {
    let generated = generate_menu_id("Dashboard", 1_700_000_004_321);
    let again = generate_menu_id("Dashboard", 1_700_000_004_321);

    assert_eq!(generated, again);
    assert!(generated.starts_with("m-"));
    assert!(generated.ends_with("4321"));
    assert_eq!(generated.len(), 2 + 4 + 4);
    assert!(generated[2..6].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn menu_type_and_status_parse_storage_values() {
    assert!(matches!(
        MenuType::parse("DIRECTORY"),
        Ok(MenuType::Directory)
    ));
    assert!(MenuType::parse("LINK").is_err());
    assert!(matches!(MenuStatus::from_code(1), Ok(MenuStatus::Active)));
    assert!(MenuStatus::from_code(2).is_err());
}

#[test]
fn menu_requires_name() {
    let result = Menu::new(
        MenuId::new(),
        "m-1",
        MenuAttributes {
            parent_id: None,
            name: "  ".to_owned(),
            path: None,
            icon: None,
            sort_order: 0,
            menu_type: None,
            permission: None,
            visible: true,
            status: None,
        },
    );

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Generates menus where each node's parent is an earlier node or absent.
fn well_formed_menus() -> impl Strategy<Value = Vec<(Option<usize>, i32)>> {
    prop::collection::vec(
        (any::<prop::sample::Index>(), any::<bool>(), -5_i32..5),
        0..40,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(position, (parent, is_root, sort_order))| {
                let parent = (position > 0 && !is_root).then(|| parent.index(position));
                (parent, sort_order)
            })
            .collect()
    })
}

fn check_parents(nodes: &[MenuNode], parent: Option<&str>, seen: &mut Vec<String>) {
    for node in nodes {
        assert_eq!(node.menu().parent_id(), parent);
        seen.push(node.menu().menu_id().to_owned());
        check_parents(node.children(), Some(node.menu().menu_id()), seen);
    }
}

proptest! {
    #[test]
    fn full_forest_keeps_every_node_under_its_parent(shape in well_formed_menus()) {
        let menus: Vec<Menu> = shape
            .iter()
            .enumerate()
            .map(|(position, (parent, sort_order))| {
                let parent_id = parent.map(|parent| format!("n{parent}"));
                menu(&format!("n{position}"), parent_id.as_deref(), *sort_order)
            })
            .collect();

        let forest = build_full_menu_forest(menus);
        prop_assert_eq!(count_nodes(&forest), shape.len());

        let mut seen = Vec::new();
        check_parents(&forest, None, &mut seen);
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), shape.len());
    }

    #[test]
    fn visible_forest_is_filtered_and_sorted(
        flags in prop::collection::vec((any::<bool>(), any::<bool>(), -5_i32..5), 0..30)
    ) {
        let menus: Vec<Menu> = flags
            .iter()
            .enumerate()
            .map(|(position, (visible, active, sort_order))| {
                let parent_id = (position > 0).then(|| format!("n{}", position / 2));
                let status = if *active {
                    Some(MenuStatus::Active)
                } else {
                    Some(MenuStatus::Disabled)
                };
                styled_menu(
                    &format!("n{position}"),
                    parent_id.as_deref(),
                    *sort_order,
                    *visible,
                    status,
                )
            })
            .collect();

        fn assert_level(nodes: &[MenuNode]) {
            for pair in nodes.windows(2) {
                assert!(pair[0].menu().sort_order() <= pair[1].menu().sort_order());
            }
            for node in nodes {
                assert!(node.menu().is_displayable());
                assert_level(node.children());
            }
        }

        let expected = menus.iter().filter(|menu| menu.is_displayable()).count();
        let forest = build_visible_menu_forest(menus);
        assert_level(&forest);
        prop_assert_eq!(count_nodes(&forest), expected);
    }
}
