use mutlog::{DefaultLogger, Operation};
use mutlog_testing_fixtures::*;

fn acme() -> Acme {
    Acme {
        name: "Acme Corp".to_string(),
        year_of_birth: 2018,
        address: Some(Box::new(Address {
            street: "Main".to_string(),
            number: 1,
            city: "Springfield".to_string(),
            zip: "12345".to_string(),
            location: None,
        })),
        employees: vec![
            Employee::new("Jane", "Dev", 100),
            Employee::new("John", "Ops", 90),
        ],
        nicknames: [("boss".to_string(), Employee::new("Bob", "CEO", 1))]
            .into_iter()
            .collect(),
        ..Default::default()
    }
}

#[test]
fn year_and_street_updates_render_in_order() {
    let mut acme = acme();

    let changes = {
        let mut mutator = AcmeMutator::new(&mut acme);
        assert!(mutator.update_year_of_birth(2019));
        assert!(mutator.mutate_address().update_street("Baker Street".to_string()));

        mutator.render_changes()
    };

    assert_eq!(
        changes,
        vec![
            "Year updated from '2018' to '2019'",
            "Address Street updated from 'Main' to 'Baker Street'",
        ]
    );
    assert_eq!(acme.year_of_birth, 2019);
    assert_eq!(
        acme.address.as_ref().map(|a| a.street.as_str()),
        Some("Baker Street")
    );
}

#[test]
fn nested_prefixes_compose_root_to_leaf() {
    let mut acme = acme();

    let changes = {
        let mut mutator = AcmeMutator::new(&mut acme);
        // location starts absent and is initialised on entry
        assert!(mutator.mutate_address().mutate_location().update_lat(51.5));

        mutator.render_changes()
    };

    assert_eq!(changes, vec!["Address Location Lat updated from '0' to '51.5'"]);
    let location = acme.address.and_then(|a| a.location).expect("location");
    assert!((location.lat - 51.5).abs() < f64::EPSILON);
}

#[test]
fn keyed_elements_carry_their_key() {
    let mut acme = acme();

    let changes = {
        let mut mutator = AcmeMutator::new(&mut acme);

        let mut boss = mutator
            .mutate_nicknames_with(&"boss".to_string())
            .expect("boss nickname");
        assert!(boss.update_wage(10));
        drop(boss);

        let mut jane = mutator.mutate_employees_by("Jane").expect("Jane");
        assert!(jane.update_position("Lead".to_string()));
        drop(jane);

        let mut second = mutator.mutate_employees_at(1).expect("second employee");
        assert!(second.update_wage(95));
        drop(second);

        mutator.render_changes()
    };

    assert_eq!(
        changes,
        vec![
            "Nicknames[boss] Wage updated from '1' to '10'",
            "Employees[Jane] Position updated from 'Dev' to 'Lead'",
            "Employees Wage updated from '90' to '95'",
        ]
    );
    assert_eq!(acme.employees[0].position, "Lead");
    assert_eq!(acme.employees[1].wage, 95);
}

#[test]
fn key_lookup_accepts_a_record_probe() {
    let mut acme = acme();
    let probe = Employee::new("John", "anything", 0);

    let changes = {
        let mut mutator = AcmeMutator::new(&mut acme);
        let mut john = mutator.mutate_employees_by(&probe).expect("John");
        john.update_wage(91);
        drop(john);

        mutator.render_changes()
    };

    assert_eq!(changes, vec!["Employees[John] Wage updated from '90' to '91'"]);
}

#[test]
fn lookup_misses_change_nothing() {
    let mut acme = acme();
    let before = acme.clone();

    let changes = {
        let mut mutator = AcmeMutator::new(&mut acme);
        assert!(mutator.mutate_employees_at(9).is_none());
        assert!(mutator.mutate_employees_by("Nobody").is_none());
        assert!(mutator.mutate_nicknames_with(&"nobody".to_string()).is_none());
        assert!(mutator.mutate_nicknames_by("Nobody").is_none());

        mutator.render_changes()
    };

    assert!(changes.is_empty());
    assert_eq!(acme, before);
}

#[test]
fn recursive_records_nest_through_cycles() {
    let mut acme = acme();

    let changes = {
        let mut mutator = AcmeMutator::new(&mut acme);
        let mut jane = mutator.mutate_employees_by("Jane").expect("Jane");
        assert!(jane.mutate_manager().update_name("Boss".to_string()));
        jane.append_projects([Project {
            title: "Apollo".to_string(),
            budget: 1,
        }]);
        drop(jane);

        mutator.render_changes()
    };

    assert_eq!(
        changes,
        vec![
            "Employees[Jane] Manager Name updated from '' to 'Boss'",
            "Employees[Jane] Projects added with value 'Project { title: \"Apollo\", budget: 1 }'",
        ]
    );
}

#[test]
fn caller_owned_logger_exposes_structured_changes() {
    let mut acme = acme();
    let mut log = DefaultLogger::root();

    {
        let mut mutator = AcmeMutator::with_logger(&mut acme, &mut log);
        assert!(mutator.mutate_vat().update_kind(VatKind::Reduced));
    }

    assert_eq!(log.len(), 1);
    let change = &log.changes()[0];
    assert_eq!(change.operation, Operation::Updated);
    assert_eq!(change.prefix.render(), "Vat ");
    assert_eq!(change.field_name, "Kind");
    assert_eq!(change.old_value, "Standard");
    assert_eq!(change.new_value, "Reduced");
    assert_eq!(acme.vat.kind, VatKind::Reduced);
}

#[test]
fn nested_mutator_renders_the_whole_log() {
    let mut acme = acme();
    let mut mutator = AcmeMutator::new(&mut acme);

    assert!(mutator.update_name("Acme Ltd".to_string()));
    let mut vat = mutator.mutate_vat();
    assert!(vat.update_number("GB1".to_string()));

    assert_eq!(
        vat.render_changes(),
        vec![
            "Name updated from 'Acme Corp' to 'Acme Ltd'",
            "Vat Number updated from '' to 'GB1'",
        ]
    );
}

#[test]
fn changes_serialize_for_callers_that_persist_them() {
    let mut acme = acme();
    let mut log = DefaultLogger::root();

    {
        let mut mutator = AcmeMutator::with_logger(&mut acme, &mut log);
        assert!(mutator.insert_equity("alice".to_string(), 10));
    }

    let json = serde_json::to_value(log.changes()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!([{
            "prefix": [{ "name": "" }],
            "field_name": "Equity",
            "operation": "added",
            "new_value": "10",
            "key": "alice",
        }])
    );
}
