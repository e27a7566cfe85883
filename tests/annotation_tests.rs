use dotplot_rs::extensions::{
    Annotation, AnnotationConnector, AnnotationStyle, ConnectorEnd, ConnectorLineType,
    draw_annotations,
};
use dotplot_rs::render::{Element, NodeId, SvgDocument};

fn layer() -> (SvgDocument, NodeId) {
    let mut document = SvgDocument::new("chart-1");
    let root = document.root();
    let svg = document.append(root, Element::new("svg")).expect("svg");
    (document, svg)
}

fn attr<'a>(document: &'a SvgDocument, id: NodeId, name: &str) -> Option<&'a str> {
    document
        .element(id)
        .expect("known node")
        .attributes
        .get(name)
        .map(String::as_str)
}

#[test]
fn annotation_groups_follow_subject_and_note_offsets() {
    let (mut document, svg) = layer();
    let annotations = vec![
        Annotation::label("Widest gap", 90.0)
            .at(480.0, 120.0)
            .with_note_offset(30.0, -20.0),
    ];
    let group = draw_annotations(&mut document, svg, &annotations, AnnotationStyle::default())
        .expect("draw");

    assert_eq!(attr(&document, group, "class"), Some("annotations"));
    let annotation = document.children(group)[0];
    assert_eq!(attr(&document, annotation, "transform"), Some("translate(480,120)"));

    let note = document.select_class(annotation, "annotation-note")[0];
    assert_eq!(attr(&document, note, "transform"), Some("translate(30,-20)"));

    // No connector requested: the connector group stays empty.
    let connector = document.select_class(annotation, "annotation-connector")[0];
    assert!(document.children(connector).is_empty());
}

#[test]
fn long_labels_wrap_into_tspans() {
    let (mut document, svg) = layer();
    let annotations = vec![Annotation::label("one two three four", 44.0)];
    draw_annotations(&mut document, svg, &annotations, AnnotationStyle::default())
        .expect("draw");

    let tspans = document.select_class_tag(svg, "annotation-note-label", "tspan");
    let lines: Vec<&str> = tspans
        .iter()
        .map(|id| document.element(*id).expect("tspan").text.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(lines, vec!["one two", "three", "four"]);
    assert_eq!(attr(&document, tspans[0], "dy"), Some("0.8em"));
    assert_eq!(attr(&document, tspans[1], "dy"), Some("1.2em"));

    let background = document.select_class(svg, "annotation-note-bg")[0];
    assert_eq!(attr(&document, background, "height"), Some("36"));
    assert_eq!(attr(&document, background, "width"), Some("38.5"));
}

#[test]
fn straight_connector_with_arrow_end() {
    let (mut document, svg) = layer();
    let annotations = vec![
        Annotation::label("note", 90.0)
            .at(10.0, 10.0)
            .with_note_offset(20.0, 0.0)
            .with_connector(AnnotationConnector {
                end: ConnectorEnd::Arrow,
                line_type: ConnectorLineType::Straight,
            }),
    ];
    draw_annotations(&mut document, svg, &annotations, AnnotationStyle::default())
        .expect("draw");

    let connector = document.select_class(svg, "annotation-connector")[0];
    let parts = document.children(connector);
    assert_eq!(parts.len(), 2);
    assert_eq!(attr(&document, parts[0], "d"), Some("M0,0L20,0"));
    assert_eq!(attr(&document, parts[0], "stroke"), Some("grey"));
    assert!(
        document
            .element(parts[1])
            .expect("arrow")
            .has_class("connector-arrow")
    );
    // 10px long along the connector, 4px to either side.
    assert_eq!(attr(&document, parts[1], "d"), Some("M0,0L10,4L10,-4Z"));
}

#[test]
fn elbow_connector_with_dot_end() {
    let (mut document, svg) = layer();
    let annotations = vec![
        Annotation::label("note", 90.0)
            .with_note_offset(20.0, -10.0)
            .with_connector(AnnotationConnector {
                end: ConnectorEnd::Dot,
                line_type: ConnectorLineType::Horizontal,
            }),
    ];
    draw_annotations(&mut document, svg, &annotations, AnnotationStyle::default())
        .expect("draw");

    let connector = document.select_class(svg, "annotation-connector")[0];
    let parts = document.children(connector);
    assert_eq!(attr(&document, parts[0], "d"), Some("M0,0L20,0L20,-10"));
    assert_eq!(attr(&document, parts[1], "r"), Some("3"));
}

#[test]
fn titled_note_shifts_label_down() {
    let (mut document, svg) = layer();
    let mut annotation = Annotation::label("body", 90.0);
    annotation.note.title = Some("Heading".to_owned());
    draw_annotations(&mut document, svg, &[annotation], AnnotationStyle::default())
        .expect("draw");

    let title = document.select_class(svg, "annotation-note-title")[0];
    assert_eq!(
        document.element(title).expect("title").text.as_deref(),
        Some("Heading")
    );
    let label = document.select_class(svg, "annotation-note-label")[0];
    assert_eq!(attr(&document, label, "y"), Some("12"));
}

#[test]
fn invalid_annotation_is_rejected() {
    let (mut document, svg) = layer();
    let annotations = vec![Annotation::label("note", 90.0).at(f64::NAN, 0.0)];
    assert!(
        draw_annotations(&mut document, svg, &annotations, AnnotationStyle::default()).is_err()
    );
}
