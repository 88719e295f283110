///
/// ChangeKey
///
/// Optional capability: derive a stable string key from a value.
/// Generated mutators use it to locate collection elements by value and to
/// label keyed path segments, e.g. `Employees[Jane Doe]`.
///

pub trait ChangeKey {
    fn change_key(&self) -> String;
}

impl<T: ChangeKey + ?Sized> ChangeKey for &T {
    fn change_key(&self) -> String {
        (**self).change_key()
    }
}

impl<T: ChangeKey + ?Sized> ChangeKey for Box<T> {
    fn change_key(&self) -> String {
        (**self).change_key()
    }
}

impl ChangeKey for str {
    fn change_key(&self) -> String {
        self.to_string()
    }
}

impl ChangeKey for String {
    fn change_key(&self) -> String {
        self.clone()
    }
}

///
/// TESTS
///
