//! Display helpers for capturing values inside generated mutators.
//!
//! The generator decides at build time how each leaf type renders (`Display`,
//! `Debug` or a fixed label) and wraps containers with these helpers, so a
//! change always stores a plain string snapshot.

/// Render an optional value; absent values render as an empty string.
pub fn optional<T, F>(value: Option<&T>, render: F) -> String
where
    T: ?Sized,
    F: FnOnce(&T) -> String,
{
    value.map(render).unwrap_or_default()
}

/// Render a sequence (or set) as `[a, b, c]`, keeping iteration order.
pub fn sequence<'a, T, I, F>(items: I, mut render: F) -> String
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> String,
{
    let parts: Vec<String> = items.into_iter().map(|item| render(item)).collect();

    format!("[{}]", parts.join(", "))
}

/// Render an unordered set as `[a, b, c]`, sorted by rendered item.
pub fn sequence_sorted<'a, T, I, F>(items: I, mut render: F) -> String
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> String,
{
    let mut parts: Vec<String> = items.into_iter().map(|item| render(item)).collect();
    parts.sort();

    format!("[{}]", parts.join(", "))
}

/// Render an ordered map as `{k: v, ...}`, keeping iteration order.
pub fn map<'a, K, V, I, FK, FV>(entries: I, key: FK, value: FV) -> String
where
    K: 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    FK: FnMut(&K) -> String,
    FV: FnMut(&V) -> String,
{
    let parts = render_entries(entries, key, value);

    join_entries(&parts)
}

/// Render an unordered map as `{k: v, ...}`, sorted by rendered key so that
/// the captured string does not depend on hash order.
pub fn map_sorted<'a, K, V, I, FK, FV>(entries: I, key: FK, value: FV) -> String
where
    K: 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    FK: FnMut(&K) -> String,
    FV: FnMut(&V) -> String,
{
    let mut parts = render_entries(entries, key, value);
    parts.sort();

    join_entries(&parts)
}

fn render_entries<'a, K, V, I, FK, FV>(
    entries: I,
    mut key: FK,
    mut value: FV,
) -> Vec<(String, String)>
where
    K: 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    FK: FnMut(&K) -> String,
    FV: FnMut(&V) -> String,
{
    entries
        .into_iter()
        .map(|(k, v)| (key(k), value(v)))
        .collect()
}

fn join_entries(parts: &[(String, String)]) -> String {
    let joined: Vec<String> = parts.iter().map(|(k, v)| format!("{k}: {v}")).collect();

    format!("{{{}}}", joined.join(", "))
}

///
/// TESTS
///
