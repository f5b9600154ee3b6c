//! Ordered parameter accumulation and the single-slot build cache.

use crate::value::Value;

/// Accumulates bound parameters in placeholder order and memoizes at most
/// one built `(sql, params)` pair.
///
/// Not synchronized: a manager belongs to exactly one builder and one
/// query-construction session at a time.
#[derive(Debug, Clone, Default)]
pub struct ParameterManager {
    params: Vec<Value>,
    cached_sql: Option<String>,
    cached_params: Option<Vec<Value>>,
}

impl ParameterManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated parameters, in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Append one parameter.
    pub fn add_param(&mut self, value: impl Into<Value>) {
        self.params.push(value.into());
    }

    /// Append a sequence of parameters.
    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.params.extend(values);
    }

    /// Comma-joined run of `?`, one per accumulated parameter.
    pub fn generate_placeholders(&self) -> String {
        vec!["?"; self.params.len()].join(", ")
    }

    /// `:name` placeholders for the given columns.
    pub fn named_placeholders(columns: &[String]) -> String {
        columns
            .iter()
            .map(|col| format!(":{col}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Snapshot the query text and a copy of the current parameters into the
    /// memo slot.
    pub fn cache(&mut self, sql: impl Into<String>) {
        self.cached_sql = Some(sql.into());
        self.cached_params = Some(self.params.clone());
    }

    /// The memoized pair, if one exists.
    pub fn get_cached(&self) -> Option<(String, Vec<Value>)> {
        match (&self.cached_sql, &self.cached_params) {
            (Some(sql), Some(params)) => Some((sql.clone(), params.clone())),
            _ => None,
        }
    }

    /// Drop the memo slot.
    pub fn reset_cache(&mut self) {
        self.cached_sql = None;
        self.cached_params = None;
    }

    /// Drop parameters and the memo slot.
    pub fn clear(&mut self) {
        self.params.clear();
        self.reset_cache();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_match_param_count() {
        let mut pm = ParameterManager::new();
        assert_eq!(pm.generate_placeholders(), "");
        pm.add_param(1);
        pm.add_param("x");
        pm.add_param(2.5);
        assert_eq!(pm.generate_placeholders(), "?, ?, ?");
    }

    #[test]
    fn extend_preserves_order() {
        let mut pm = ParameterManager::new();
        pm.add_param(1);
        pm.extend([Value::Text("a".to_string()), Value::Integer(2)]);
        assert_eq!(
            pm.params(),
            &[
                Value::Integer(1),
                Value::Text("a".to_string()),
                Value::Integer(2)
            ]
        );
    }

    #[test]
    fn named_placeholders() {
        let cols = vec!["a".to_string(), "b".to_string()];
        assert_eq!(ParameterManager::named_placeholders(&cols), ":a, :b");
    }

    #[test]
    fn cache_snapshots_params() {
        let mut pm = ParameterManager::new();
        pm.add_param(1);
        pm.cache("SELECT 1");
        pm.add_param(2);
        let (sql, params) = pm.get_cached().unwrap();
        assert_eq!(sql, "SELECT 1");
        // The snapshot holds the params as of cache time.
        assert_eq!(params, vec![Value::Integer(1)]);
    }

    #[test]
    fn reset_cache_clears_slot_only() {
        let mut pm = ParameterManager::new();
        pm.add_param(1);
        pm.cache("SELECT 1");
        pm.reset_cache();
        assert!(pm.get_cached().is_none());
        assert_eq!(pm.len(), 1);
    }
}
