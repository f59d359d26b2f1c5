use std::{fmt, rc::Rc, sync::Arc};

use pp::Inspect;

/// Arbitrary-precision stand-in: renders through its decimal digits.
#[derive(Inspect)]
#[inspect(display)]
struct BigInt(u64);

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Inspect)]
struct S {
    pub a: i64,
    pub b: i64,
    pub c: Vec<f64>,
    pub d: T,
    pub e: String,
    pub f: Box<BigInt>,
}

#[derive(Inspect)]
struct T {
    pub x: f64,
    pub y: Vec<String>,
    pub z: f64,
}

fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

#[test]
fn nested_document() {
    let s = S {
        a: 5,
        b: 6,
        c: vec![3.25, 2.8],
        d: T {
            x: 0.0,
            y: vec!["foo".to_string(), "bar".to_string()],
            z: 1.3838,
        },
        e: "Hello, Friends".to_string(),
        f: Box::new(BigInt(1891284)),
    };

    assert_eq!(
        pp::dot_string(&s),
        lines(&[
            "digraph {",
            "\tn0 [label=\"S\"]",
            "\tn1 [label=\"5\"]",
            "\tn0 -> n1 [label=\"a\"]",
            "\tn2 [label=\"6\"]",
            "\tn0 -> n2 [label=\"b\"]",
            "\tn3 [label=\"f64[]\"]",
            "\tn4 [label=\"3.250000\"]",
            "\tn3 -> n4",
            "\tn5 [label=\"2.800000\"]",
            "\tn3 -> n5",
            "\tn0 -> n3 [label=\"c\"]",
            "\tn6 [label=\"T\"]",
            "\tn7 [label=\"0.000000\"]",
            "\tn6 -> n7 [label=\"x\"]",
            "\tn8 [label=\"String[]\"]",
            "\tn9 [label=\"\\\"foo\\\"\"]",
            "\tn8 -> n9",
            "\tn10 [label=\"\\\"bar\\\"\"]",
            "\tn8 -> n10",
            "\tn6 -> n8 [label=\"y\"]",
            "\tn11 [label=\"1.383800\"]",
            "\tn6 -> n11 [label=\"z\"]",
            "\tn0 -> n6 [label=\"d\"]",
            "\tn12 [label=\"\\\"Hello, Friends\\\"\"]",
            "\tn0 -> n12 [label=\"e\"]",
            "\tn13 [label=\"1891284\"]",
            "\tn0 -> n13 [label=\"f\"]",
            "}",
        ])
    );
}

#[derive(Inspect)]
struct Vertex {
    pub name: &'static str,
    pub out: Vec<Rc<Vertex>>,
}

fn vertex(name: &'static str, out: Vec<Rc<Vertex>>) -> Rc<Vertex> {
    Rc::new(Vertex { name, out })
}

#[test]
fn diamond_shares_the_bottom_node() {
    let bottom = vertex("d", vec![]);
    let top = vertex(
        "a",
        vec![
            vertex("b", vec![bottom.clone()]),
            vertex("c", vec![bottom]),
        ],
    );

    let out = pp::dot_string(&top);
    assert_eq!(out.matches("[label=\"Vertex\"]").count(), 4);
    assert_eq!(out.matches("[label=\"\\\"d\\\"\"]").count(), 1);
    assert!(out.contains("\tn6 [label=\"Vertex\"]\n\tn7 [label=\"\\\"d\\\"\"]\n"));
    assert!(out.contains("\tn5 -> n6\n"));
    assert!(out.contains("\tn11 -> n6\n"));
    assert_eq!(out.matches("-> n6\n").count(), 2);

    // The text renderer prints the shared vertex under both parents.
    assert_eq!(pp::to_string(&top).matches("name: \"d\"").count(), 2);
}

#[test]
fn arc_sharing_is_detected_too() {
    let leaf = Arc::new(vec![1u8]);
    let both = vec![leaf.clone(), leaf];
    let out = pp::dot_string(&both);
    assert_eq!(
        out,
        lines(&[
            "digraph {",
            "\tn0 [label=\"Arc<Vec<u8>>[]\"]",
            "\tn1 [label=\"u8[]\"]",
            "\tn2 [label=\"1\"]",
            "\tn1 -> n2",
            "\tn0 -> n1",
            "\tn0 -> n1",
            "}",
        ])
    );
}

#[test]
fn fdot_matches_dot_string() {
    let value = vec![Some(1), None];
    let mut out = Vec::new();
    pp::fdot(&mut out, &value).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), pp::dot_string(&value));
}

#[test]
fn every_call_numbers_from_zero() {
    let printer = pp::Printer::new();
    assert_eq!(printer.dot_string(&1), printer.dot_string(&1));
    assert_eq!(printer.dot_string(&1), "digraph {\n\tn0 [label=\"1\"]\n}");
}

#[derive(Inspect)]
struct Reading {
    pub sensor: String,
    pub value: f64,
    pub count: u32,
    pub offset: i8,
    pub ok: bool,
    pub unit: Option<char>,
    pub note: Option<String>,
}

/// `name: value` pairs from the first level of a text-rendered record.
fn text_fields(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| line.strip_prefix('\t'))
        .filter_map(|line| line.split_once(": "))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// `edge label -> target node label` pairs leaving the root node `n0`.
fn dot_fields(dot: &str) -> Vec<(String, String)> {
    let unescape = |label: &str| label.replace("\\\"", "\"").replace("\\\\", "\\");
    let mut nodes = std::collections::HashMap::new();
    let mut edges = Vec::new();
    for line in dot.lines().map(str::trim) {
        if let Some((from, rest)) = line.split_once(" -> ") {
            let (to, label) = rest.split_once(" [label=\"").unwrap();
            if from == "n0" {
                edges.push((to.to_string(), unescape(label.strip_suffix("\"]").unwrap())));
            }
        } else if let Some((id, label)) = line.split_once(" [label=\"") {
            nodes.insert(id.to_string(), unescape(label.strip_suffix("\"]").unwrap()));
        }
    }
    edges
        .into_iter()
        .map(|(to, name)| (name, nodes[&to].clone()))
        .collect()
}

#[test]
fn text_and_graph_agree_on_fields() {
    let reading = Reading {
        sensor: "t-\"1\"".to_string(),
        value: -2.25,
        count: 7,
        offset: -3,
        ok: true,
        unit: Some('C'),
        note: None,
    };
    let text = pp::to_string(&reading);
    let dot = pp::dot_string(&reading);

    let fields = text_fields(&text);
    assert_eq!(fields.len(), 7);
    assert_eq!(fields, dot_fields(&dot));
    assert!(text.starts_with("Reading {\n"));
    assert!(dot.contains("\tn0 [label=\"Reading\"]\n"));
}
