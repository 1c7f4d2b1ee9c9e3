/// The values stored for one header name.
///
/// Converts from a single value or from any list of values, so header
/// operations accept `"text/plain"` and `["a=1", "b=2"]` alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderValues(Vec<String>);

impl HeaderValues {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for HeaderValues {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for HeaderValues {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for HeaderValues {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for HeaderValues {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for HeaderValues {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

/// One header name with all of its values, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    values: Vec<String>,
}

/// An ordered, case-insensitive multi-map of HTTP headers.
///
/// Names are normalized to ASCII lower case on the way in, so each name
/// appears at most once regardless of the casing callers use. Every name
/// maps to a list of values (e.g. several `Set-Cookie` headers) whose
/// order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<Entry>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Replace every value stored for `name`.
    pub fn set(&mut self, name: &str, values: impl Into<HeaderValues>) {
        let values = values.into().into_vec();
        match self.position(name) {
            Some(idx) => self.entries[idx].values = values,
            None => self.entries.push(Entry {
                name: name.to_ascii_lowercase(),
                values,
            }),
        }
    }

    /// Append to the values stored for `name`, creating it when absent.
    pub fn append(&mut self, name: &str, values: impl Into<HeaderValues>) {
        match self.position(name) {
            Some(idx) => self.entries[idx].values.extend(values.into().into_vec()),
            None => self.set(name, values),
        }
    }

    /// Get the first value for `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Get all values for `name` (case-insensitive), empty when absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        match self.position(name) {
            Some(idx) => self.entries[idx].values.as_slice(),
            None => &[],
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove `name`, returning the values it held.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let idx = self.position(name)?;
        Some(self.entries.remove(idx).values)
    }

    /// Iterate over `(name, values)` with names in lower case.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.values.as_slice()))
    }

    /// Iterate over one `(name, value)` pair per stored value, repeating the
    /// name for multi-valued headers. This is the order headers go on the wire.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|e| e.values.iter().map(|v| (e.name.as_str(), v.as_str())))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: AsRef<str>,
    V: Into<HeaderValues>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HeaderMap::new();
        for (name, values) in iter {
            map.set(name.as_ref(), values);
        }
        map
    }
}
