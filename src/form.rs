use std::collections::HashMap;

use crate::error::ForwardError;

/// Decoded key/value pairs of a submitted form.
///
/// A key submitted more than once keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        url::form_urlencoded::parse(body)
            .into_owned()
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a key that must be present.
    pub fn require(&self, key: &'static str) -> Result<&str, ForwardError> {
        self.get(key).ok_or(ForwardError::FieldMissing(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FormFields::default();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}
