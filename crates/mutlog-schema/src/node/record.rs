use crate::prelude::*;

///
/// Record
///
/// A named composite type with ordered fields.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    pub ident: String,

    #[serde(default)]
    pub fields: FieldList,

    /// The record implements `ChangeKey`.
    #[serde(default)]
    pub derives_key: bool,

    #[serde(default)]
    pub display: RecordDisplay,
}

impl Record {
    #[must_use]
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            fields: FieldList::new(),
            derives_key: false,
            display: RecordDisplay::default(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub const fn with_key(mut self) -> Self {
        self.derives_key = true;
        self
    }

    #[must_use]
    pub const fn with_display(mut self, display: RecordDisplay) -> Self {
        self.display = display;
        self
    }
}
