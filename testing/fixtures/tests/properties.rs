use mutlog_testing_fixtures::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn scalar_update_logs_only_real_changes(start in any::<i32>(), next in any::<i32>()) {
        let mut acme = Acme { year_of_birth: start, ..Default::default() };

        let (changed, lines) = {
            let mut m = AcmeMutator::new(&mut acme);
            let changed = m.update_year_of_birth(next);
            (changed, m.render_changes())
        };

        prop_assert_eq!(changed, start != next);
        prop_assert_eq!(lines.len(), usize::from(start != next));
        if changed {
            prop_assert_eq!(&lines[0], &format!("Year updated from '{start}' to '{next}'"));
        }
        prop_assert_eq!(acme.year_of_birth, next);
    }

    #[test]
    fn rendering_is_repeatable_and_append_only(tags in prop::collection::vec("[a-z]{1,8}", 0..16)) {
        let mut acme = Acme::default();
        let mut m = AcmeMutator::new(&mut acme);
        let mut seen: Vec<String> = Vec::new();

        for tag in &tags {
            m.append_tags([tag.clone()]);
            let lines = m.render_changes();

            prop_assert_eq!(&lines, &m.render_changes());
            prop_assert_eq!(&lines[..seen.len()], &seen[..]);
            seen = lines;
        }

        prop_assert_eq!(seen.len(), tags.len());
    }
}
