use derive_builder::Builder;
use schemars::JsonSchema;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::io::{self, Error, ErrorKind};

/// Ordered `flag value` pairs appended after the set type.
///
/// Pairs keep the order they were pushed in (or the document order when
/// loaded from JSON). Duplicated flags are kept as given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateOptions {
    pairs: Vec<(String, String)>,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((flag.into(), value.into()));
    }
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(f, v)| (f.as_str(), v.as_str()))
    }
}

impl<F: Into<String>, V: Into<String>> Extend<(F, V)> for CreateOptions {
    fn extend<I: IntoIterator<Item = (F, V)>>(&mut self, iter: I) {
        for (flag, value) in iter {
            self.push(flag, value);
        }
    }
}

/// Renders a JSON option value as a single command token.
fn option_token(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

struct CreateOptionsVisitor;

impl<'de> Visitor<'de> for CreateOptionsVisitor {
    type Value = CreateOptions;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of option flags to string, number or boolean values")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CreateOptions::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut options = CreateOptions::new();
        while let Some((flag, value)) = map.next_entry::<String, Value>()? {
            let token = option_token(value).ok_or_else(|| {
                de::Error::custom(format!(
                    "create option `{flag}` must be a string, number or boolean"
                ))
            })?;
            options.push(flag, token);
        }
        Ok(options)
    }
}

impl<'de> Deserialize<'de> for CreateOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `deserialize_any` lets an explicit `null` stand for "no options"
        deserializer.deserialize_any(CreateOptionsVisitor)
    }
}

/// Request to create one ipset set.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[builder(default)]
pub struct CreateRequest {
    /// Name of the set
    #[builder(setter(into, strip_option))]
    #[serde(rename = "setname", default)]
    pub set_name: Option<String>,
    /// Set type, passed to ipset as is (e.g. `hash:ip`)
    #[builder(setter(into, strip_option))]
    #[serde(rename = "type", default)]
    pub set_type: Option<String>,
    /// Extra `flag value` pairs for the chosen set type
    #[serde(default)]
    #[schemars(schema_with = "create_options_schema")]
    pub create_options: CreateOptions,
}

fn create_options_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": ["object", "null"],
        "additionalProperties": { "type": ["string", "number", "boolean"] }
    })
}

impl CreateRequestBuilder {
    /// Appends one `flag value` pair to the create options.
    pub fn create_option(
        &mut self,
        flag: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.create_options
            .get_or_insert_with(CreateOptions::new)
            .push(flag, value);
        self
    }
}

impl CreateRequest {
    /// Loads a request from a JSON document.
    ///
    /// The document must be a JSON object. Anything else (a string, a
    /// number, `null`, an array) is rejected with `InvalidInput` before
    /// any command is built.
    pub fn from_json(text: &str) -> io::Result<Self> {
        // Deserialized straight from the text so option keys keep document order
        if !text.trim_start().starts_with('{') {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Invalid arguments. The request must be a JSON object",
            ));
        }
        serde_json::from_str(text).map_err(|e| {
            log::debug!("Request is not a valid create request: {e}");
            Error::new(ErrorKind::InvalidInput, format!("Invalid request: {e}"))
        })
    }
}

/// Documentation of the JSON request format.
#[derive(Default)]
pub struct RequestDoc;

impl RequestDoc {
    pub fn get_full_scheme(&self) -> io::Result<String> {
        let schema = schemars::schema_for!(CreateRequest);
        serde_json::to_string_pretty(&schema).map_err(|e| Error::new(ErrorKind::Other, e))
    }
    pub fn get_examples(&self) -> String {
        let example_hash = "{ \"setname\": \"blocked\", \"type\": \"hash:ip\" }";
        let example_opts = "{ \"setname\": \"peers\", \"type\": \"hash:net\", \
                            \"create_options\": { \"family\": \"inet6\", \"timeout\": 300 } }";
        format!(
            "{}: {}\n{}: {}",
            "Minimal request", example_hash, "Request with create options", example_opts
        )
    }
}
