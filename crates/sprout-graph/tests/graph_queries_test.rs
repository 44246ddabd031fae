use sprout_graph::{Edge, MindMap, Node, Side};

fn sample() -> MindMap {
    // root
    //   a (y=10)
    //     a1
    //   b (y=100)
    //     b1 (y=5)
    //     b2 (y=-5)
    MindMap::from_parts(
        vec![
            Node::new("root", "Root"),
            Node::new("b", "B").at(0.0, 100.0),
            Node::new("a", "A").at(0.0, 10.0),
            Node::new("a1", "A1"),
            Node::new("b1", "B1").at(0.0, 5.0),
            Node::new("b2", "B2").at(0.0, -5.0),
        ],
        vec![
            Edge::new("root", "b"),
            Edge::new("root", "a"),
            Edge::new("a", "a1"),
            Edge::new("b", "b1"),
            Edge::new("b", "b2"),
        ],
    )
}

#[test]
fn parent_of_returns_incoming_source() {
    let map = sample();
    assert_eq!(map.parent_of("a1"), Some("a"));
    assert_eq!(map.parent_of("b"), Some("root"));
    assert_eq!(map.parent_of("root"), None);
    assert_eq!(map.parent_of("missing"), None);
}

#[test]
fn children_of_lists_children_top_to_bottom() {
    let map = sample();
    assert_eq!(map.children_of("root"), vec!["a", "b"]);
    assert_eq!(map.children_of("b"), vec!["b2", "b1"]);
    assert_eq!(map.children_of("a1"), Vec::<&str>::new());
    assert_eq!(map.children_of("missing"), Vec::<&str>::new());
}

#[test]
fn dangling_edges_do_not_give_the_root_a_parent() {
    let map = MindMap::from_parts(
        vec![Node::new("r", "R"), Node::new("a", "A")],
        vec![Edge::new("ghost", "r"), Edge::new("r", "a")],
    );
    let root = map.root_id().unwrap();
    assert_eq!(root, "r");
    assert_eq!(map.parent_of(root), None);
    assert_eq!(map.parent_of("a"), Some("r"));
    assert_eq!(map.children_of("ghost"), Vec::<&str>::new());
    assert_eq!(map.traversal_order(), vec!["r", "a"]);
}

#[test]
fn parent_and_children_agree_on_malformed_edges() {
    // a2 has two incoming edges; a self loop and a dangling target hang off a.
    let map = MindMap::from_parts(
        vec![
            Node::new("root", "Root"),
            Node::new("a", "A"),
            Node::new("b", "B"),
            Node::new("a2", "A2"),
        ],
        vec![
            Edge::new("root", "a"),
            Edge::new("root", "b"),
            Edge::new("a", "a2"),
            Edge::new("b", "a2"),
            Edge::new("a", "a"),
            Edge::new("a", "nowhere"),
        ],
    );
    assert_eq!(map.parent_of("a2"), Some("a"));
    assert_eq!(map.children_of("a"), vec!["a2"]);
    assert_eq!(map.children_of("b"), Vec::<&str>::new());
    for id in ["a", "b", "a2"] {
        let parent = map.parent_of(id).unwrap();
        assert!(map.children_of(parent).contains(&id), "{id}");
    }
}

#[test]
fn index_children_are_sorted_by_y() {
    let map = sample();
    let index = map.index();
    let root = index.root().unwrap();
    let ids: Vec<&str> = index.children(root).iter().map(|&c| index.id(c)).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn y_ties_fall_back_to_node_order() {
    let map = MindMap::from_parts(
        vec![
            Node::new("root", "Root"),
            Node::new("second", "S"),
            Node::new("first", "F"),
        ],
        vec![Edge::new("root", "first"), Edge::new("root", "second")],
    );
    let index = map.index();
    let ids: Vec<&str> = index.children(0).iter().map(|&c| index.id(c)).collect();
    assert_eq!(ids, vec!["second", "first"]);
}

#[test]
fn root_is_node_without_incoming_edge() {
    let map = sample();
    assert_eq!(map.root_id(), Some("root"));

    let mut reordered = sample();
    reordered.nodes.rotate_left(2);
    assert_eq!(reordered.root_id(), Some("root"));
}

#[test]
fn root_falls_back_to_first_node_when_all_have_parents() {
    let map = MindMap::from_parts(
        vec![Node::new("x", "X"), Node::new("y", "Y")],
        vec![Edge::new("x", "y"), Edge::new("y", "x")],
    );
    assert_eq!(map.root_id(), Some("x"));
    assert_eq!(MindMap::new().root_id(), None);
}

#[test]
fn traversal_order_is_preorder_by_y() {
    let map = sample();
    assert_eq!(
        map.traversal_order(),
        vec!["root", "a", "a1", "b", "b2", "b1"]
    );
}

#[test]
fn traversal_order_appends_orphans_in_original_order() {
    let mut map = sample();
    map.nodes.insert(1, Node::new("orphan-1", "O1"));
    map.nodes.push(Node::new("orphan-2", "O2"));
    map.edges.push(Edge::new("ghost", "orphan-2"));

    let order = map.traversal_order();
    assert_eq!(order.len(), map.node_count());
    assert_eq!(&order[order.len() - 2..], &["orphan-1", "orphan-2"]);
}

#[test]
fn traversal_survives_cycles() {
    let map = MindMap::from_parts(
        vec![
            Node::new("root", "R"),
            Node::new("a", "A"),
            Node::new("b", "B"),
        ],
        vec![
            Edge::new("root", "a"),
            Edge::new("a", "b"),
            Edge::new("b", "a"),
        ],
    );
    assert_eq!(map.traversal_order(), vec!["root", "a", "b"]);
}

#[test]
fn subtree_is_breadth_first_closure() {
    let map = sample();
    assert_eq!(map.subtree_of("b"), vec!["b", "b2", "b1"]);
    assert_eq!(map.subtree_of("a1"), vec!["a1"]);
    assert!(map.subtree_of("missing").is_empty());
    assert_eq!(map.subtree_of("root").len(), map.node_count());
}

#[test]
fn depth_follows_parent_links() {
    let map = sample();
    assert_eq!(map.depth_of("root"), Some(0));
    assert_eq!(map.depth_of("b1"), Some(2));
    assert_eq!(map.depth_of("missing"), None);
}

#[test]
fn heights_measure_longest_downward_path() {
    let map = sample();
    let index = map.index();
    let heights = index.heights();
    assert_eq!(heights[index.position("root").unwrap()], 2);
    assert_eq!(heights[index.position("a").unwrap()], 1);
    assert_eq!(heights[index.position("a1").unwrap()], 0);
}

#[test]
fn select_is_exclusive_and_ignores_unknown_ids() {
    let mut map = sample();
    map.select(Some("a"));
    assert_eq!(map.selected_id(), Some("a"));
    assert_eq!(map.nodes.iter().filter(|n| n.selected).count(), 1);

    map.select(Some("missing"));
    assert_eq!(map.selected_id(), Some("a"));

    map.select(None);
    assert_eq!(map.selected_id(), None);
}

#[test]
fn side_helpers() {
    assert_eq!(Side::Left.direction(), -1.0);
    assert_eq!(Side::Right.opposite(), Side::Left);
    assert_eq!(Side::Center.as_branch(), None);
    assert_eq!(Side::Left.as_branch(), Some(Side::Left));
}

#[test]
fn nodes_round_trip_through_json() {
    let map = sample();
    let json = serde_json::to_string(&map).unwrap();
    assert!(json.contains("\"label\":\"Root\""));
    let back: MindMap = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);

    let minimal: MindMap =
        serde_json::from_str(r#"{"nodes":[{"id":"r","label":"R","side":"center"}]}"#).unwrap();
    assert_eq!(minimal.nodes[0].side, Some(Side::Center));
    assert!(minimal.edges.is_empty());
}
