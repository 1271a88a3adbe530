use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Value;

/// A name-to-value mapping plus a link to an optional outer scope.
///
/// Lookup walks outward through `outer`; `set` always writes to the
/// current scope, never to an ancestor — this is what makes `let`
/// shadow rather than mutate an outer binding.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// A child scope whose lookups fall back to `outer` — used both for
    /// block scopes and for a function call's captured environment.
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_outer_chain() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(1));

        let inner = Environment::enclosed(outer.clone());
        assert!(matches!(inner.borrow().get("x"), Some(Value::Integer(1))));
        assert!(inner.borrow().get("y").is_none());
    }

    #[test]
    fn set_writes_only_to_current_scope() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(1));

        let inner = Environment::enclosed(outer.clone());
        inner.borrow_mut().set("x", Value::Integer(2));

        assert!(matches!(inner.borrow().get("x"), Some(Value::Integer(2))));
        assert!(matches!(outer.borrow().get("x"), Some(Value::Integer(1))));
    }
}
