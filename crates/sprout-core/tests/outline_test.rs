use sprout_core::outline::{
    from_outline_text, outline_text, parse, serialize, to_graph, to_outline,
};
use sprout_core::{
    Edge, IdFactory, MindMap, Node, OutlineItem, ROOT_ID, SequentialIds, Side, SproutConfig,
    Viewport,
};

fn depths(items: &[OutlineItem]) -> Vec<usize> {
    items.iter().map(|i| i.depth).collect()
}

fn texts(items: &[OutlineItem]) -> Vec<&str> {
    items.iter().map(|i| i.text.as_str()).collect()
}

fn graph(text: &str) -> MindMap {
    from_outline_text(
        text,
        Viewport::default(),
        &SproutConfig::default(),
        &mut SequentialIds::default(),
    )
}

fn label_of<'a>(map: &'a MindMap, id: &str) -> &'a str {
    map.node(id).map(|n| n.label.as_str()).unwrap()
}

/// `(parent label, child label)` for every edge, sorted.
fn label_edges(map: &MindMap) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = map
        .edges
        .iter()
        .map(|e| {
            (
                label_of(map, &e.source).to_string(),
                label_of(map, &e.target).to_string(),
            )
        })
        .collect();
    pairs.sort();
    pairs
}

#[test]
fn parses_nested_bullets() {
    let items = parse("- Root\n  - A\n  - B\n    - B1");
    assert_eq!(texts(&items), vec!["Root", "A", "B", "B1"]);
    assert_eq!(depths(&items), vec![0, 1, 1, 2]);
}

#[test]
fn over_indented_lines_are_clamped() {
    let items = parse("- Root\n      - Child\n            - TooDeep\n  - Sibling");
    assert_eq!(depths(&items), vec![0, 1, 2, 1]);
}

#[test]
fn first_line_is_root_and_later_lines_never_reach_depth_zero() {
    let items = parse("    - Root\n- A\n- B\n    - B1\n- C");
    assert_eq!(depths(&items), vec![0, 1, 1, 2, 1]);
}

#[test]
fn dedent_may_drop_several_levels() {
    let items = parse("- R\n  - a\n    - b\n      - c\n  - d");
    assert_eq!(depths(&items), vec![0, 1, 2, 3, 1]);
}

#[test]
fn lenient_input_is_normalized() {
    let text = "Root\n\n\t* Tabbed\n   \n\t\t-Tight\r\n  plain line  \n";
    let items = parse(text);
    assert_eq!(texts(&items), vec!["Root", "Tabbed", "Tight", "plain line"]);
    assert_eq!(depths(&items), vec![0, 1, 2, 1]);
}

#[test]
fn only_one_bullet_is_removed() {
    let items = parse("- - dash\n  - * star");
    assert_eq!(texts(&items), vec!["- dash", "* star"]);
}

#[test]
fn blank_input_has_no_items() {
    assert!(parse("").is_empty());
    assert!(parse("\n   \n\t\n").is_empty());
}

#[test]
fn depth_never_jumps_more_than_one_level() {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    for _ in 0..50 {
        let mut text = String::new();
        for line in 0..40 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let indent = (state % 23) as usize;
            let ch = if state & 1 == 0 { " " } else { "\t" };
            text.push_str(&ch.repeat(indent));
            text.push_str(&format!("- item {line}\n"));
        }
        let items = parse(&text);
        assert_eq!(items[0].depth, 0);
        for pair in items.windows(2) {
            assert!(pair[1].depth <= pair[0].depth + 1);
            assert!(pair[1].depth >= 1);
        }
    }
}

#[test]
fn serializes_with_two_space_indent() {
    let items = vec![
        OutlineItem::new("Root", 0),
        OutlineItem::new("A", 1),
        OutlineItem::new("A1", 2),
        OutlineItem::new("B", 1),
    ];
    assert_eq!(serialize(&items), "- Root\n  - A\n    - A1\n  - B");
    assert_eq!(serialize(&[]), "");
}

#[test]
fn reserialization_is_stable() {
    let inputs = [
        "- Root\n  - A\n  - B\n    - B1",
        "Root\n\t\tdeep\n  * mid\n        - deeper\n\n  - back",
        "   indented root\n-\n  - - nested dash",
        "- R\n      - Child\n            - TooDeep\n  - Sibling",
    ];
    for input in inputs {
        let once = serialize(&parse(input));
        let twice = serialize(&parse(&once));
        assert_eq!(once, twice, "input: {input:?}");
    }
}

#[test]
fn builds_tree_from_outline() {
    let map = graph("- Root\n  - A\n  - B\n    - B1");
    assert_eq!(map.node_count(), 4);
    assert_eq!(map.edge_count(), 3);
    assert_eq!(map.nodes[0].id, ROOT_ID);
    assert_eq!(map.root_id(), Some(ROOT_ID));

    let id_of = |label: &str| map.nodes.iter().find(|n| n.label == label).unwrap().id.clone();
    assert_eq!(map.parent_of(&id_of("B1")), Some(id_of("B").as_str()));
    assert_eq!(map.parent_of(&id_of("A")), Some(ROOT_ID));
    assert_eq!(map.validate(), Ok(()));
}

#[test]
fn generated_ids_are_sequential_and_unique() {
    let map = graph("- R\n  - a\n  - b");
    let ids: Vec<&str> = map.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["root", "node-1", "node-2"]);
}

#[test]
fn converted_graph_is_laid_out() {
    let viewport = Viewport::new(500.0, 300.0, 1000.0);
    let map = from_outline_text(
        "- R\n  - a\n  - b",
        viewport,
        &SproutConfig::default(),
        &mut SequentialIds::default(),
    );
    let root = map.node(ROOT_ID).unwrap();
    assert_eq!((root.position.x, root.position.y), (500.0, 300.0));
    assert_eq!(root.side, Some(Side::Center));
    assert_eq!(map.nodes[1].side, Some(Side::Right));
    assert_eq!(map.nodes[2].side, Some(Side::Left));
}

#[test]
fn empty_outline_yields_default_root() {
    let map = graph("\n\n");
    assert_eq!(map.node_count(), 1);
    assert_eq!(map.edge_count(), 0);
    assert_eq!(map.nodes[0].id, ROOT_ID);
    assert_eq!(map.nodes[0].label, "Central Topic");
    assert_eq!(map.nodes[0].side, Some(Side::Center));
}

#[test]
fn unnormalized_items_still_form_one_tree() {
    let items = vec![
        OutlineItem::new("R", 0),
        OutlineItem::new("stray root", 0),
        OutlineItem::new("under stray", 1),
        OutlineItem::new("deep jump", 5),
    ];
    let map = to_graph(
        &items,
        Viewport::default(),
        &SproutConfig::default(),
        &mut SequentialIds::default(),
    );
    assert_eq!(map.validate(), Ok(()));
    assert_eq!(map.parent_of("node-1"), Some(ROOT_ID));
    assert_eq!(map.parent_of("node-2"), Some("node-1"));
    assert_eq!(map.parent_of("node-3"), Some("node-2"));
}

#[test]
fn outline_follows_vertical_order() {
    let map = MindMap::from_parts(
        vec![
            Node::new("root", "Root"),
            Node::new("b", "B").at(0.0, 100.0),
            Node::new("a", "A").at(0.0, 10.0),
        ],
        vec![Edge::new("root", "b"), Edge::new("root", "a")],
    );
    assert_eq!(
        to_outline(&map),
        vec![
            OutlineItem::new("Root", 0),
            OutlineItem::new("A", 1),
            OutlineItem::new("B", 1),
        ]
    );
}

#[test]
fn outline_skips_unreachable_nodes_and_folds_line_breaks() {
    let map = MindMap::from_parts(
        vec![
            Node::new("root", "Root"),
            Node::new("a", "two\nlines"),
            Node::new("lost", "Lost"),
        ],
        vec![Edge::new("root", "a")],
    );
    assert_eq!(outline_text(&map), "- Root\n  - two lines");
}

#[test]
fn graph_outline_graph_preserves_topology() {
    let text = "- Plan\n  - Goals\n    - Ship\n    - Learn\n  - Risks\n    - Time\n      - Scope\n  - People";
    let map = graph(text);

    let rebuilt = to_graph(
        &to_outline(&map),
        Viewport::default(),
        &SproutConfig::default(),
        &mut SequentialIds::new("copy"),
    );
    assert_eq!(rebuilt.node_count(), map.node_count());
    assert_eq!(rebuilt.edge_count(), map.edge_count());
    assert_eq!(label_edges(&rebuilt), label_edges(&map));
    assert_eq!(outline_text(&rebuilt), outline_text(&map));
    assert_eq!(outline_text(&map), text);
}

struct Repeating(&'static str);

impl IdFactory for Repeating {
    fn next_id(&mut self) -> String {
        self.0.to_string()
    }
}

#[test]
fn repeating_id_factories_still_yield_unique_ids() {
    let items: Vec<OutlineItem> = (0..6).map(|i| OutlineItem::new(format!("n{i}"), 1)).collect();
    let map = to_graph(
        &items,
        Viewport::default(),
        &SproutConfig::default(),
        &mut Repeating(ROOT_ID),
    );
    let ids: Vec<&str> = map.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["root", "root-1", "root-2", "root-3", "root-4", "root-5"]);
    assert_eq!(map.validate(), Ok(()));
}

#[test]
fn long_outlines_convert_with_distinct_ids() {
    let mut text = String::from("- Root\n");
    for i in 0..5_000 {
        text.push_str(&format!("  - item {i}\n    - detail {i}\n"));
    }
    let map = graph(&text);
    assert_eq!(map.node_count(), 10_001);
    assert_eq!(map.edge_count(), 10_000);

    let ids: std::collections::HashSet<&str> = map.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), map.node_count());
    assert_eq!(map.validate(), Ok(()));
}
