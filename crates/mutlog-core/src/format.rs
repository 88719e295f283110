use crate::change::{Change, Operation};

///
/// ChangeFormatter
///
/// Strategy for turning one change into one line of text.
///

pub trait ChangeFormatter {
    fn format(&self, change: &Change) -> String;
}

impl<F> ChangeFormatter for F
where
    F: Fn(&Change) -> String,
{
    fn format(&self, change: &Change) -> String {
        self(change)
    }
}

///
/// DefaultFormatter
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFormatter;

impl ChangeFormatter for DefaultFormatter {
    fn format(&self, change: &Change) -> String {
        let path = change.prefix.render();
        let field = change.field_label();
        let op = change.operation;

        match op {
            Operation::Added => format!("{path}{field} {op} with value '{}'", change.new_value),
            Operation::Removed | Operation::Cleared => {
                format!("{path}{field} {op}, value was '{}'", change.old_value)
            }
            Operation::Updated => format!(
                "{path}{field} {op} from '{}' to '{}'",
                change.old_value, change.new_value
            ),
            Operation::Set => format!("{path}{field} {op} to '{}'", change.new_value),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::{Prefix, PrefixPath};

    fn nested(change: Change) -> Change {
        Change {
            prefix: PrefixPath::from(vec![Prefix::root(), Prefix::new("Address")]),
            ..change
        }
    }

    #[test]
    fn formats_every_operation() {
        let f = DefaultFormatter;

        let cases = [
            (
                Change::new("Tags", Operation::Added).with_new_value("blue"),
                "Tags added with value 'blue'",
            ),
            (
                Change::new("Tags", Operation::Removed).with_old_value("red"),
                "Tags removed, value was 'red'",
            ),
            (
                Change::new("Year", Operation::Updated)
                    .with_old_value("2018")
                    .with_new_value("2019"),
                "Year updated from '2018' to '2019'",
            ),
            (
                Change::new("Location", Operation::Set).with_new_value("UK"),
                "Location set to 'UK'",
            ),
            (
                Change::new("Location", Operation::Cleared).with_old_value("UK"),
                "Location cleared, value was 'UK'",
            ),
        ];

        for (change, expected) in cases {
            assert_eq!(f.format(&change), expected);
        }
    }

    #[test]
    fn prefix_path_is_prepended() {
        let change = nested(
            Change::new("Street", Operation::Updated)
                .with_old_value("Main")
                .with_new_value("Baker Street"),
        );

        assert_eq!(
            DefaultFormatter.format(&change),
            "Address Street updated from 'Main' to 'Baker Street'"
        );
    }

    #[test]
    fn keyed_field_renders_with_brackets() {
        let change = Change::new("Nicknames", Operation::Added)
            .with_key("Janey")
            .with_new_value("Jane Doe");

        assert_eq!(
            DefaultFormatter.format(&change),
            "Nicknames[Janey] added with value 'Jane Doe'"
        );
    }

    #[test]
    fn closures_act_as_formatters() {
        let terse = |change: &Change| format!("{}:{}", change.field_name, change.operation);
        let change = Change::new("Year", Operation::Updated);

        assert_eq!(terse.format(&change), "Year:updated");
    }
}
