//! Tests for the in-memory canvas host.

use canvasbind_host::mock::{CanvasFixture, HostCall, MemoryCanvas, NodeSpec};
use canvasbind_host::{CanvasHost, CanvasNode, HostError, NodeKind};
use canvasbind_types::{CollectionId, NodeId};

const FIXTURE: &str = r##"{
    "collections": [{
        "id": "posts",
        "name": "Posts",
        "fields": [
            {"id": "title", "name": "Title", "type": "string"},
            {"id": "cover", "name": "Cover", "type": "image"}
        ],
        "items": [{
            "id": "i1",
            "slug": "hello",
            "fieldData": {
                "title": {"type": "string", "value": "Hello"},
                "cover": {"type": "image", "value": {"url": "https://cdn/h.png"}}
            }
        }]
    }],
    "canvas": [{
        "id": "card",
        "name": "Card",
        "type": "frame",
        "backgroundColor": {"name": "Primary Color", "light": "#000"},
        "children": [
            {"id": "title", "name": "Title", "type": "text", "text": "Placeholder"},
            {"id": "cover", "name": "Cover", "type": "frame", "backgroundImage": "https://cdn/x.png"}
        ]
    }],
    "selection": ["card"]
}"##;

#[tokio::test]
async fn fixture_loads_collections_and_tree() {
    let canvas = MemoryCanvas::from_fixture(CanvasFixture::from_json(FIXTURE).unwrap());

    let collections = canvas.collections().await.unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].name, "Posts");

    let fields = canvas.fields(&CollectionId::new("posts")).await.unwrap();
    assert_eq!(fields.len(), 2);
    let items = canvas.items(&CollectionId::new("posts")).await.unwrap();
    assert_eq!(items[0].slug, "hello");

    let tree = canvas.tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].children.len(), 2);
    assert_eq!(tree[0].children[0].node.id, NodeId::new("title"));
}

#[tokio::test]
async fn fixture_publishes_selection() {
    let canvas = MemoryCanvas::from_fixture(CanvasFixture::from_json(FIXTURE).unwrap());
    let rx = canvas.subscribe_to_selection();
    let selected = rx.borrow().clone();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name.as_deref(), Some("Card"));
    assert_eq!(canvas.active_selection(), vec![NodeId::new("card")]);
}

#[tokio::test]
async fn fixture_nodes_without_id_get_one() {
    let json = r#"{
        "canvas": [{
            "id": "list",
            "type": "frame",
            "children": [
                {"name": "Row", "type": "text", "text": "a"},
                {"name": "Row", "type": "text", "text": "b"}
            ]
        }]
    }"#;
    let canvas = MemoryCanvas::from_fixture(CanvasFixture::from_json(json).unwrap());

    let rows = canvas.children(&NodeId::new("list")).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].id, rows[1].id);
    assert!(!rows[0].id.as_str().is_empty());
    assert!(canvas.node(&rows[1].id).is_some());
}

#[test]
fn malformed_fixture_is_an_error() {
    let err = CanvasFixture::from_json(r#"{"canvas": [{"id": "x", "type": "blob"}]}"#).unwrap_err();
    assert!(matches!(err, HostError::Serialization(_)));
}

#[tokio::test]
async fn unknown_collection_is_an_error() {
    let canvas = MemoryCanvas::new();
    let err = canvas.items(&CollectionId::new("missing")).await.unwrap_err();
    assert!(matches!(err, HostError::CollectionNotFound(_)));
}

#[tokio::test]
async fn children_of_unknown_node_is_an_error() {
    let canvas = MemoryCanvas::new();
    let err = canvas.children(&NodeId::new("ghost")).await.unwrap_err();
    assert!(matches!(err, HostError::NodeNotFound(_)));
}

#[tokio::test]
async fn set_text_on_frame_is_rejected() {
    let canvas = MemoryCanvas::new();
    let id = canvas.add_root(NodeSpec::leaf(CanvasNode::frame("f", "Frame")));
    assert!(canvas.set_text(&id, "x").await.is_err());
}

#[tokio::test]
async fn set_image_targets_active_selection() {
    let canvas = MemoryCanvas::new();
    let a = canvas.add_root(NodeSpec::leaf(CanvasNode::frame("a", "A")));
    let b = canvas.add_root(NodeSpec::leaf(CanvasNode::frame("b", "B")));

    canvas.set_selection(std::slice::from_ref(&b)).await.unwrap();
    canvas.set_image("https://cdn/i.png").await.unwrap();

    assert!(matches!(
        canvas.node(&a).unwrap().kind,
        NodeKind::Frame { background_image: None, .. }
    ));
    assert!(matches!(
        canvas.node(&b).unwrap().kind,
        NodeKind::Frame { background_image: Some(_), .. }
    ));
    assert_eq!(
        canvas.calls().last(),
        Some(&HostCall::SetImage {
            image: "https://cdn/i.png".into(),
            targets: vec![b],
        })
    );
}

#[tokio::test]
async fn set_selection_notifies_subscribers() {
    let canvas = MemoryCanvas::new();
    let a = canvas.add_root(NodeSpec::leaf(CanvasNode::text("a", "A", "")));
    let mut rx = canvas.subscribe_to_selection();

    canvas.set_selection(std::slice::from_ref(&a)).await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow()[0].id, a);
}

#[test]
fn tree_serializes_back_to_fixture_shape() {
    let canvas = MemoryCanvas::from_fixture(CanvasFixture::from_json(FIXTURE).unwrap());
    let json = serde_json::to_value(canvas.tree()).unwrap();
    assert_eq!(json[0]["type"], "frame");
    assert_eq!(json[0]["children"][0]["text"], "Placeholder");
    assert_eq!(json[0]["children"][1]["backgroundImage"], "https://cdn/x.png");
}
