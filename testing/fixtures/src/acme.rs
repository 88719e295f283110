use mutlog::{ChangeKey, Mutable};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
};

///
/// Acme
///

#[derive(Clone, Debug, Default, Mutable, PartialEq)]
pub struct Acme {
    pub name: String,
    #[mutlog(rename = "Year")]
    pub year_of_birth: i32,
    pub address: Option<Box<Address>>,
    pub vat: Vat,
    pub employees: Vec<Employee>,
    pub nicknames: BTreeMap<String, Employee>,
    pub equity: HashMap<String, u32>,
    pub tags: Vec<String>,
    pub labels: BTreeSet<String>,
    pub website: Option<String>,
    #[mutlog(skip)]
    pub revision: u64,
}

///
/// Address
///

#[derive(Clone, Debug, Default, Mutable, PartialEq)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub city: String,
    pub zip: String,
    pub location: Option<Location>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

///
/// Location
///

#[derive(Clone, Debug, Default, Mutable, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

///
/// Vat
///

#[derive(Clone, Debug, Default, Mutable, PartialEq)]
pub struct Vat {
    pub number: String,
    pub kind: VatKind,
}

///
/// VatKind
/// not a record, so fields of this type are plain values
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VatKind {
    #[default]
    Standard,
    Reduced,
    Exempt,
}

///
/// Employee
///

#[derive(Clone, Debug, Default, Mutable, PartialEq)]
pub struct Employee {
    pub name: String,
    pub position: String,
    pub wage: u32,
    pub projects: Vec<Project>,
    pub manager: Option<Box<Employee>>,
}

impl Employee {
    #[must_use]
    pub fn new(name: &str, position: &str, wage: u32) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            wage,
            ..Default::default()
        }
    }
}

impl ChangeKey for Employee {
    fn change_key(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}

///
/// Project
///

#[derive(Clone, Debug, Default, Mutable, PartialEq)]
pub struct Project {
    pub title: String,
    pub budget: u64,
}

include!(concat!(env!("OUT_DIR"), "/acme_mutator.rs"));
