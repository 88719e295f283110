use crate::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// SchemaError
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("record '{0}' is defined more than once")]
    DuplicateRecord(String),

    #[error("invalid schema:\n{0}")]
    Validation(ErrorTree),
}

///
/// Schema
///
/// Every record known to one generation run, in definition order, plus the
/// namespace they were loaded from.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(try_from = "SchemaDef")]
pub struct Schema {
    #[serde(default)]
    pub namespace: Namespace,

    #[serde(default)]
    records: Vec<Record>,

    #[serde(skip)]
    index: BTreeMap<String, usize>,
}

impl Schema {
    #[must_use]
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            ..Default::default()
        }
    }

    /// Add a record; identifiers must be unique.
    pub fn insert(&mut self, record: Record) -> Result<(), SchemaError> {
        if self.index.contains_key(&record.ident) {
            return Err(SchemaError::DuplicateRecord(record.ident));
        }

        self.index.insert(record.ident.clone(), self.records.len());
        self.records.push(record);

        Ok(())
    }

    /// Builder form of [`Schema::insert`] for tests and fixtures.
    pub fn with_record(mut self, record: Record) -> Result<Self, SchemaError> {
        self.insert(record)?;

        Ok(self)
    }

    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Record> {
        self.index.get(ident).map(|&i| &self.records[i])
    }

    /// Look up a type path, stripping qualifiers that point at the schema's
    /// own namespace.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Record> {
        self.namespace
            .local_ident(path)
            .and_then(|ident| self.get(ident))
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

///
/// SchemaDef
/// serialized form, indexed on the way in
///

#[derive(Deserialize)]
struct SchemaDef {
    #[serde(default)]
    namespace: Namespace,

    #[serde(default)]
    records: Vec<Record>,
}

impl TryFrom<SchemaDef> for Schema {
    type Error = SchemaError;

    fn try_from(def: SchemaDef) -> Result<Self, Self::Error> {
        let mut schema = Self::new(def.namespace);
        for record in def.records {
            schema.insert(record)?;
        }

        Ok(schema)
    }
}

///
/// TESTS
///
