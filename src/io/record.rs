use serde::Deserialize;

/// Raw `key,value` record as read from CSV input
///
/// Empty fields are read as `None`, which is how null keys and values enter
/// a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Record {
    pub fn new(key: Option<&str>, value: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_string),
            value: value.map(str::to_string),
        }
    }

    pub fn into_pair(self) -> (Option<String>, Option<String>) {
        (self.key, self.value)
    }
}
