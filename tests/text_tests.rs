use std::{cell::RefCell, collections::HashMap, rc::Rc};

use insta::assert_snapshot;
use pp::{Complex, Config, Inspect, Printer, Record, Shape};

#[derive(Inspect)]
struct T {
    pub x: Option<Rc<RefCell<T>>>,
}

fn self_loop() -> Rc<RefCell<T>> {
    let t = Rc::new(RefCell::new(T { x: None }));
    t.borrow_mut().x = Some(t.clone());
    t
}

fn unlink(t: &Rc<RefCell<T>>) {
    t.borrow_mut().x = None;
}

#[test]
fn cycle_through_pointer_is_cut_at_the_first_revisit() {
    let t = self_loop();
    assert_eq!(pp::to_string(&t), "T {\n\tx: <cycle>\n}");
    unlink(&t);
}

#[test]
fn copy_of_a_cyclic_value_prints_one_level_deeper() {
    let t = self_loop();
    let copy = T {
        x: t.borrow().x.clone(),
    };
    assert_eq!(
        pp::to_string(&copy),
        "T {\n\tx: T {\n\t\tx: <cycle>\n\t}\n}"
    );
    unlink(&t);
}

#[derive(Inspect)]
struct List {
    pub value: i32,
    pub next: Option<Box<List>>,
}

#[test]
fn absent_references_print_nil_at_any_depth() {
    let list = List {
        value: 1,
        next: Some(Box::new(List {
            value: 2,
            next: None,
        })),
    };
    assert_snapshot!(Printer::new().indent("  ").to_string(&list), @r"
    List {
      value: 1
      next: List {
        value: 2
        next: nil
      }
    }
    ");
}

#[test]
fn scalars() {
    assert_eq!(pp::to_string(&1.3838), "1.383800");
    assert_eq!(pp::to_string(&f64::NAN), "NaN");
    assert_eq!(pp::to_string(&-7i8), "-7");
    assert_eq!(pp::to_string(&Complex::new(3.0, 5.0)), "(3.000000+5.000000i)");
    assert_eq!(pp::to_string(&Complex::new(3.0, -5.0)), "(3.000000-5.000000i)");
    assert_eq!(pp::to_string("tab\there"), "\"tab\\there\"");
}

#[test]
fn map_keys_print_in_ascending_order() {
    let map: HashMap<i32, &str> = [(4, "four"), (1, "one"), (2, "two")].into_iter().collect();
    assert_eq!(
        pp::to_string(&map),
        "HashMap {\n\t1: \"one\"\n\t2: \"two\"\n\t4: \"four\"\n}"
    );
}

#[test]
fn mixed_key_classes_group_in_order() {
    struct Mixed;

    impl Inspect for Mixed {
        fn shape(&self) -> Shape<'_> {
            pp::Map::new("Mixed")
                .entry(&"b", &1)
                .entry(&2.5, &2)
                .entry(&true, &3)
                .entry(&"a", &4)
                .entry(&-1, &5)
                .into()
        }
    }

    assert_eq!(
        pp::to_string(&Mixed),
        "Mixed {\n\ttrue: 3\n\t-1: 5\n\t2.500000: 2\n\t\"a\": 4\n\t\"b\": 1\n}"
    );
}

/// A record that prints itself, wherever it appears.
struct Token(&'static str);

impl Inspect for Token {
    fn shape(&self) -> Shape<'_> {
        Record::new("Token").field("text", &self.0).into()
    }

    fn pretty_print(&self) -> Option<String> {
        Some(format!("<{}>", self.0))
    }
}

#[test]
fn custom_rendering_wins_everywhere() {
    assert_eq!(pp::to_string(&Token("if")), "<if>");
    assert_eq!(pp::to_string(&Box::new(Token("if"))), "<if>");
    assert_eq!(
        pp::to_string(&vec![Token("a"), Token("b")]),
        "[\n\t<a>\n\t<b>\n]"
    );

    let map: HashMap<&str, Token> = [("k", Token("v"))].into_iter().collect();
    assert_eq!(pp::to_string(&map), "HashMap {\n\t\"k\": <v>\n}");
}

#[test]
fn config_drives_the_indent() {
    let config: Config = serde_json::from_str(r#"{"indent": "--"}"#).unwrap();
    let printer = Printer::with_config(config);
    assert_eq!(printer.config().indent, "--");
    assert_eq!(printer.to_string(&[[1]]), "[\n--[\n----1\n--]\n]");
}

#[test]
fn fprint_streams_into_any_writer() {
    let mut out = Vec::new();
    pp::fprint(&mut out, &vec!["x"]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[\n\t\"x\"\n]");
}

#[test]
fn print_writes_to_stdout() {
    assert!(pp::print(&42).is_ok());
}

#[test]
fn renders_are_independent() {
    let shared = Rc::new(vec![1]);
    let pair = (shared.clone(), shared);
    let printer = Printer::new();
    let first = printer.to_string(&[&pair.0, &pair.1]);
    let second = printer.to_string(&[&pair.0, &pair.1]);
    assert_eq!(first, second);
    assert_eq!(first, "[\n\t[\n\t\t1\n\t]\n\t[\n\t\t1\n\t]\n]");
}
