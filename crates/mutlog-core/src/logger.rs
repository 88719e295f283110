use crate::{
    change::{Change, Prefix},
    format::{ChangeFormatter, DefaultFormatter},
};

///
/// ChangeLogger
///
/// Two-method contract every generated mutator is driven through.
/// `append` attaches the logger's own prefix to the front of the change path
/// before recording or forwarding it; `render` returns one line per change in
/// append order.
///

pub trait ChangeLogger {
    fn append(&mut self, change: Change);

    fn render(&self) -> Vec<String>;
}

impl<L> ChangeLogger for &mut L
where
    L: ChangeLogger + ?Sized,
{
    fn append(&mut self, change: Change) {
        (**self).append(change);
    }

    fn render(&self) -> Vec<String> {
        (**self).render()
    }
}

impl<L> ChangeLogger for Box<L>
where
    L: ChangeLogger + ?Sized,
{
    fn append(&mut self, change: Change) {
        (**self).append(change);
    }

    fn render(&self) -> Vec<String> {
        (**self).render()
    }
}

///
/// DefaultLogger
///
/// Owning logger: holds the single change list of a mutation session.
///

#[derive(Clone, Debug)]
pub struct DefaultLogger<F = DefaultFormatter> {
    prefix: Prefix,
    changes: Vec<Change>,
    formatter: F,
}

impl DefaultLogger<DefaultFormatter> {
    /// Logger for a root mutation session (empty prefix, default formatter).
    #[must_use]
    pub const fn root() -> Self {
        Self::new(Prefix::root())
    }

    #[must_use]
    pub const fn new(prefix: Prefix) -> Self {
        Self::with_formatter(prefix, DefaultFormatter)
    }
}

impl<F: ChangeFormatter> DefaultLogger<F> {
    #[must_use]
    pub const fn with_formatter(prefix: Prefix, formatter: F) -> Self {
        Self {
            prefix,
            changes: Vec::new(),
            formatter,
        }
    }

    #[must_use]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl Default for DefaultLogger<DefaultFormatter> {
    fn default() -> Self {
        Self::root()
    }
}

impl<F: ChangeFormatter> ChangeLogger for DefaultLogger<F> {
    fn append(&mut self, mut change: Change) {
        change.prefix.push_front(self.prefix.clone());
        self.changes.push(change);
    }

    fn render(&self) -> Vec<String> {
        self.changes
            .iter()
            .map(|change| self.formatter.format(change))
            .collect()
    }
}

///
/// ChainedLogger
///
/// Non-owning logger used by nested mutators. Adds one path segment and hands
/// the change to its parent, so the whole mutator tree shares one change list.
///

pub struct ChainedLogger<'a> {
    prefix: Prefix,
    parent: &'a mut dyn ChangeLogger,
}

impl<'a> ChainedLogger<'a> {
    pub fn new(prefix: Prefix, parent: &'a mut dyn ChangeLogger) -> Self {
        Self { prefix, parent }
    }
}

impl ChangeLogger for ChainedLogger<'_> {
    fn append(&mut self, mut change: Change) {
        change.prefix.push_front(self.prefix.clone());
        self.parent.append(change);
    }

    fn render(&self) -> Vec<String> {
        self.parent.render()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::Operation;
    use proptest::prelude::*;

    fn updated(field: &str, old: &str, new: &str) -> Change {
        Change::new(field, Operation::Updated)
            .with_old_value(old)
            .with_new_value(new)
    }

    #[test]
    fn default_logger_renders_in_append_order() {
        let mut log = DefaultLogger::root();
        log.append(updated("Year", "2018", "2019"));
        log.append(Change::new("Tags", Operation::Cleared).with_old_value("[a]"));

        assert_eq!(
            log.render(),
            vec![
                "Year updated from '2018' to '2019'".to_string(),
                "Tags cleared, value was '[a]'".to_string(),
            ]
        );
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn chain_prepends_root_to_leaf() {
        let mut root = DefaultLogger::root();
        {
            let mut address = ChainedLogger::new(Prefix::new("Address"), &mut root);
            let mut location = ChainedLogger::new(Prefix::new("Location"), &mut address);
            location.append(updated("City", "York", "London"));
        }

        assert_eq!(
            root.render(),
            vec!["Address Location City updated from 'York' to 'London'".to_string()]
        );

        let names: Vec<&str> = root.changes()[0]
            .prefix
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["", "Address", "Location"]);
    }

    #[test]
    fn keyed_chain_segment_renders_key() {
        let mut root = DefaultLogger::root();
        {
            let mut janey = ChainedLogger::new(Prefix::with_key("Nicknames", "Janey"), &mut root);
            janey.append(updated("Wage", "80000", "50000"));
        }

        assert_eq!(
            root.render(),
            vec!["Nicknames[Janey] Wage updated from '80000' to '50000'".to_string()]
        );
    }

    #[test]
    fn chained_render_delegates_to_owner() {
        let mut root = DefaultLogger::root();
        let mut vat = ChainedLogger::new(Prefix::new("Vat"), &mut root);
        vat.append(updated("Type", "Company", "Company Ltd."));

        assert_eq!(
            vat.render(),
            vec!["Vat Type updated from 'Company' to 'Company Ltd.'".to_string()]
        );
    }

    #[test]
    fn owning_logger_prefix_is_rendered_first() {
        let mut log = DefaultLogger::new(Prefix::new("Acme"));
        {
            let mut vat = ChainedLogger::new(Prefix::new("Vat"), &mut log);
            vat.append(updated("Number", "1", "2"));
        }

        assert_eq!(
            log.render(),
            vec!["Acme Vat Number updated from '1' to '2'".to_string()]
        );
    }

    #[test]
    fn custom_formatter_replaces_default() {
        let mut log = DefaultLogger::with_formatter(Prefix::root(), |change: &Change| {
            format!("{}={}", change.field_label(), change.new_value)
        });
        log.append(updated("Year", "2018", "2019"));

        assert_eq!(log.render(), vec!["Year=2019".to_string()]);
    }

    #[test]
    fn boxed_and_borrowed_loggers_forward() {
        let mut owner = DefaultLogger::root();
        {
            let mut boxed: Box<dyn ChangeLogger + '_> = Box::new(&mut owner);
            boxed.append(updated("Year", "1", "2"));
        }

        assert_eq!(owner.len(), 1);
    }

    proptest! {
        #[test]
        fn render_is_idempotent_and_append_only(
            fields in prop::collection::vec("[A-Z][a-z]{0,6}", 1..12),
        ) {
            let mut log = DefaultLogger::root();
            let mut seen: Vec<String> = Vec::new();

            for (i, field) in fields.iter().enumerate() {
                log.append(updated(field, &i.to_string(), &(i + 1).to_string()));

                let first = log.render();
                let second = log.render();
                prop_assert_eq!(&first, &second);

                // earlier lines never change once rendered
                prop_assert_eq!(&first[..seen.len()], &seen[..]);
                seen = first;
            }

            prop_assert_eq!(seen.len(), fields.len());
            for (line, field) in seen.iter().zip(&fields) {
                prop_assert!(line.starts_with(field.as_str()));
            }
        }
    }
}
