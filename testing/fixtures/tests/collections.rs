use mutlog_testing_fixtures::*;
use std::collections::{BTreeSet, HashMap};

fn render(acme: &mut Acme, f: impl FnOnce(&mut AcmeMutator<'_>)) -> Vec<String> {
    let mut mutator = AcmeMutator::new(acme);
    f(&mut mutator);

    mutator.render_changes()
}

#[test]
fn append_logs_one_change_per_element() {
    let mut acme = Acme::default();

    let changes = render(&mut acme, |m| {
        m.append_tags(["red".to_string(), "green".to_string(), "blue".to_string()]);
    });

    assert_eq!(
        changes,
        vec![
            "Tags added with value 'red'",
            "Tags added with value 'green'",
            "Tags added with value 'blue'",
        ]
    );
    assert_eq!(acme.tags, vec!["red", "green", "blue"]);
}

#[test]
fn remove_keeps_order_and_logs_old_value() {
    let mut acme = Acme {
        tags: vec!["a".into(), "b".into(), "c".into()],
        ..Default::default()
    };

    let changes = render(&mut acme, |m| {
        assert!(m.remove_tags(1));
        assert!(!m.remove_tags(5));
    });

    assert_eq!(changes, vec!["Tags removed, value was 'b'"]);
    assert_eq!(acme.tags, vec!["a", "c"]);
}

#[test]
fn whole_collection_set_and_clear() {
    let mut acme = Acme::default();

    let changes = render(&mut acme, |m| {
        assert!(!m.set_tags(Vec::new()));
        assert!(m.set_tags(vec!["x".into(), "y".into()]));
        assert!(m.set_tags(Vec::new()));
    });

    assert_eq!(
        changes,
        vec!["Tags set to '[x, y]'", "Tags cleared, value was '[x, y]'"]
    );
    assert!(acme.tags.is_empty());
}

#[test]
fn sets_only_support_whole_value_replacement() {
    let mut acme = Acme::default();
    let labels: BTreeSet<String> = ["beta", "alpha"].into_iter().map(String::from).collect();

    let changes = render(&mut acme, |m| {
        assert!(m.set_labels(labels.clone()));
    });

    assert_eq!(changes, vec!["Labels set to '[alpha, beta]'"]);
    assert_eq!(acme.labels, labels);
}

#[test]
fn map_insert_and_remove_carry_the_key() {
    let mut acme = Acme::default();

    let changes = render(&mut acme, |m| {
        assert!(m.insert_equity("alice".to_string(), 10));
        assert!(!m.insert_equity("alice".to_string(), 99));
        assert!(m.remove_equity(&"alice".to_string()));
        assert!(!m.remove_equity(&"bob".to_string()));
    });

    assert_eq!(
        changes,
        vec![
            "Equity[alice] added with value '10'",
            "Equity[alice] removed, value was '10'",
        ]
    );
    assert!(acme.equity.is_empty());
}

#[test]
fn hash_map_renders_in_key_order() {
    let mut acme = Acme::default();
    let equity: HashMap<String, u32> = [("carol", 3), ("alice", 1), ("bob", 2)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let changes = render(&mut acme, |m| {
        assert!(m.set_equity(equity));
    });

    assert_eq!(changes, vec!["Equity set to '{alice: 1, bob: 2, carol: 3}'"]);
}

#[test]
fn record_sequences_render_elements_with_display() {
    let mut acme = Acme::default();

    let changes = render(&mut acme, |m| {
        m.append_employees([
            Employee::new("Jane", "Dev", 100),
            Employee::new("John", "Ops", 90),
        ]);
        assert!(m.remove_employees(0));
    });

    assert_eq!(
        changes,
        vec![
            "Employees added with value 'Jane (Dev)'",
            "Employees added with value 'John (Ops)'",
            "Employees removed, value was 'Jane (Dev)'",
        ]
    );
    assert_eq!(acme.employees, vec![Employee::new("John", "Ops", 90)]);
}

#[test]
fn record_maps_insert_with_key() {
    let mut acme = Acme::default();

    let changes = render(&mut acme, |m| {
        assert!(m.insert_nicknames("boss".to_string(), Employee::new("Bob", "CEO", 1)));
    });

    assert_eq!(changes, vec!["Nicknames[boss] added with value 'Bob (CEO)'"]);
}
