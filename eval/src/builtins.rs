//! Named host-implemented functions callable from user code.
//!
//! The registry is a process-wide, read-only mapping from name to
//! callable; adding a built-in means extending the table here, nothing
//! in the evaluator needs to change.

use common::CantteError;

use crate::object::{Builtin, Value};

const REGISTRY: &[Builtin] = &[Builtin {
    name: "size",
    func: size,
}];

/// Looks up a built-in by name, for identifiers the environment
/// doesn't already bind.
pub fn lookup(name: &str) -> Option<Builtin> {
    REGISTRY.iter().copied().find(|b| b.name == name)
}

fn size(args: &[Value]) -> Value {
    if args.len() != 1 {
        return Value::Error(CantteError::runtime(format!(
            "Wrong number of arguments. {} received, 1 expected",
            args.len()
        )));
    }

    match &args[0] {
        Value::String(text) => Value::Integer(text.chars().count() as i64),
        other => Value::Error(CantteError::runtime(format!(
            "Argument of type '{}' is not supported",
            other.type_tag()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_counts_string_characters() {
        let result = size(&[Value::String("hello".to_string())]);
        assert!(matches!(result, Value::Integer(5)));
    }

    #[test]
    fn size_rejects_wrong_arity() {
        let result = size(&[]);
        assert!(matches!(result, Value::Error(_)));
    }

    #[test]
    fn size_rejects_unsupported_argument_type() {
        let result = size(&[Value::Integer(1)]);
        match result {
            Value::Error(error) => {
                assert_eq!(error.message(), "Argument of type 'INTEGER' is not supported")
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn lookup_finds_registered_builtin() {
        assert!(lookup("size").is_some());
        assert!(lookup("nope").is_none());
    }
}
