use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

/// Loaded translation resources, one JSON tree per namespace.
pub struct LocaleCatalog {
    default_namespace: String,
    namespaces: RwLock<HashMap<String, Value>>,
}

impl LocaleCatalog {
    pub fn new(default_namespace: impl Into<String>) -> Self {
        Self {
            default_namespace: default_namespace.into(),
            namespaces: RwLock::new(HashMap::new()),
        }
    }

    /// Replace all namespaces at once.
    pub(crate) fn install(&self, namespaces: HashMap<String, Value>) {
        let mut guard = self
            .namespaces
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = namespaces;
    }

    pub fn is_loaded(&self) -> bool {
        !self
            .namespaces
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_empty()
    }

    /// Translate `key`, written `namespace:dotted.path` or `dotted.path` for
    /// the default namespace. Unknown keys translate to themselves.
    pub fn translate(&self, key: &str) -> String {
        let (namespace, path) = match key.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (self.default_namespace.as_str(), key),
        };

        let namespaces = self
            .namespaces
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        namespaces
            .get(namespace)
            .and_then(|tree| path.split('.').try_fold(tree, |node, part| node.get(part)))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}
