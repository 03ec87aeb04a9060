use serde::Deserialize;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field omitted => keep the stored value
// - Null: explicit null => clear the stored value
// - Value(v): replace with v
//
// Fields must carry #[serde(default)] so an omitted key lands on Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Draft {
        #[serde(default)]
        title: PatchField<String>,
    }

    #[test]
    fn omitted_key_is_unset() {
        let draft: Draft = serde_json::from_str("{}").unwrap();
        assert!(draft.title.is_unset());
    }

    #[test]
    fn explicit_null_is_null() {
        let draft: Draft = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(draft.title.is_null());
    }

    #[test]
    fn value_is_value() {
        let draft: Draft = serde_json::from_str(r#"{"title": "Rust"}"#).unwrap();
        assert_eq!(draft.title.as_value().map(String::as_str), Some("Rust"));
    }
}
