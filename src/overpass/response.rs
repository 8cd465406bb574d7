use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

const RELATION: &str = "relation";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OverpassElement {
    pub r#type: String,
    /// Anything other than an object carries no name.
    #[serde(default)]
    pub tags: Option<Value>,
}

impl OverpassElement {
    pub fn name(&self) -> Option<&str> {
        self.tags
            .as_ref()?
            .get("name")?
            .as_str()
            .filter(|it| !it.is_empty())
    }
}

#[derive(Deserialize)]
struct Response {
    elements: Vec<OverpassElement>,
}

/// Street names found in a response, relations are skipped since their member ways are
/// already there. With `dedupe` set, names are unique and sorted, otherwise they are
/// returned in response order, repeats included.
pub fn extract(response: &Value, dedupe: bool) -> Result<Vec<String>> {
    let elements = elements(response)?;
    let names = elements
        .iter()
        .filter(|it| it.r#type != RELATION)
        .filter_map(|it| it.name());
    if dedupe {
        let mut seen = HashSet::new();
        let mut res: Vec<String> = names
            .filter(|it| seen.insert(*it))
            .map(Into::into)
            .collect();
        res.sort();
        Ok(res)
    } else {
        Ok(names.map(Into::into).collect())
    }
}

fn elements(response: &Value) -> Result<Vec<OverpassElement>> {
    match response.get("elements") {
        Some(Value::Array(_)) => {}
        Some(_) => Err(Error::MalformedResponse("elements is not an array".into()))?,
        None => Err(Error::MalformedResponse("elements are missing".into()))?,
    }
    Response::deserialize(response)
        .map(|it| it.elements)
        .map_err(|e| Error::MalformedResponse(e.to_string()))
}
