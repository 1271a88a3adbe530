//! Walks the AST, producing a value or an error value, managing scopes
//! and `return` short-circuiting along the way.

use std::cell::RefCell;
use std::rc::Rc;

use ast::{Block, Expression, Identifier, Program, Statement};
use common::CantteError;

use crate::builtins;
use crate::environment::Environment;
use crate::object::{FunctionValue, Value};

/// Evaluates a whole program against `env`. A top-level `Return`
/// unwraps to its payload here — this is the program/function call
/// boundary the spec's `Return` wrapper never escapes past.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Value::Return(value) => return *value,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a block's statements in order. Unlike `eval_program`, a
/// `Return` is propagated unchanged so the enclosing function call can
/// see and unwrap it — this is what makes `return` inside nested `if`
/// blocks escape to the call site instead of just the block.
fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> Value {
    match statement {
        Statement::Let { name, value, .. } => eval_let(name, value, env),
        Statement::Return { value, .. } => eval_return(value, env),
        Statement::ExpressionStatement { expression, .. } => eval_expression(expression, env),
        Statement::Block(block) => eval_block(block, env),
    }
}

fn eval_let(name: &Identifier, value: &Expression, env: &Rc<RefCell<Environment>>) -> Value {
    let evaluated = eval_expression(value, env);
    if evaluated.is_error() {
        return evaluated;
    }
    env.borrow_mut().set(name.name.clone(), evaluated);
    Value::Null
}

fn eval_return(value: &Expression, env: &Rc<RefCell<Environment>>) -> Value {
    let evaluated = eval_expression(value, env);
    if evaluated.is_error() {
        return evaluated;
    }
    Value::Return(Box::new(evaluated))
}

fn eval_expression(expression: &Expression, env: &Rc<RefCell<Environment>>) -> Value {
    match expression {
        Expression::IntegerLiteral { value, .. } => Value::Integer(*value),
        Expression::BooleanLiteral { value, .. } => Value::Boolean(*value),
        Expression::StringLiteral { value, .. } => Value::String(value.clone()),
        Expression::Identifier(identifier) => eval_identifier(identifier, env),
        Expression::Prefix { operator, right, .. } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix(operator, right)
        }
        Expression::Infix {
            left,
            operator,
            right,
            ..
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix(operator, left, right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expression::FunctionLiteral {
            parameters, body, ..
        } => Value::Function(Rc::new(FunctionValue {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
        })),
        Expression::Call {
            function,
            arguments,
            ..
        } => eval_call(function, arguments, env),
    }
}

fn eval_identifier(identifier: &Identifier, env: &Rc<RefCell<Environment>>) -> Value {
    if let Some(value) = env.borrow().get(&identifier.name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(&identifier.name) {
        return Value::Builtin(builtin);
    }
    Value::Error(CantteError::runtime(format!(
        "Unknown identifier: {}",
        identifier.name
    )))
}

fn eval_prefix(operator: &str, right: Value) -> Value {
    match operator {
        "!" => Value::Boolean(!right.is_truthy()),
        "-" => match right {
            Value::Integer(value) => Value::Integer(-value),
            other => Value::Error(CantteError::runtime(format!(
                "Unknown operator: -{}",
                other.type_tag()
            ))),
        },
        _ => Value::Error(CantteError::runtime(format!(
            "Unknown operator: {operator}{}",
            right.type_tag()
        ))),
    }
}

fn eval_infix(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_infix(operator, *l, *r),
        _ if left.type_tag() != right.type_tag() => Value::Error(CantteError::runtime(format!(
            "Type mismatch: {} {operator} {}",
            left.type_tag(),
            right.type_tag()
        ))),
        _ => Value::Error(CantteError::runtime(format!(
            "Unknown operator: {} {operator} {}",
            left.type_tag(),
            right.type_tag()
        ))),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left + right),
        "-" => Value::Integer(left - right),
        "*" => Value::Integer(left * right),
        "/" => {
            if right == 0 {
                Value::Error(CantteError::runtime("Division by zero"))
            } else {
                Value::Integer(left / right)
            }
        }
        "<" => Value::Boolean(left < right),
        ">" => Value::Boolean(left > right),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        _ => Value::Error(CantteError::runtime(format!(
            "Unknown operator: INTEGER {operator} INTEGER"
        ))),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::String(format!("{left}{right}")),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        _ => Value::Error(CantteError::runtime(format!(
            "Unknown operator: STRING {operator} STRING"
        ))),
    }
}

fn eval_boolean_infix(operator: &str, left: bool, right: bool) -> Value {
    match operator {
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        _ => Value::Error(CantteError::runtime(format!(
            "Unknown operator: BOOLEAN {operator} BOOLEAN"
        ))),
    }
}

fn eval_if(
    condition: &Expression,
    consequence: &Block,
    alternative: Option<&Block>,
    env: &Rc<RefCell<Environment>>,
) -> Value {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Value::Null
    }
}

fn eval_call(
    function: &Expression,
    arguments: &[Expression],
    env: &Rc<RefCell<Environment>>,
) -> Value {
    let callee = eval_expression(function, env);
    if callee.is_error() {
        return callee;
    }

    let mut values = Vec::with_capacity(arguments.len());
    for argument in arguments {
        let value = eval_expression(argument, env);
        if value.is_error() {
            return value;
        }
        values.push(value);
    }

    apply_function(callee, &values)
}

fn apply_function(callee: Value, arguments: &[Value]) -> Value {
    match callee {
        Value::Function(function) => {
            let call_env = Environment::enclosed(function.env.clone());
            for (index, parameter) in function.parameters.iter().enumerate() {
                let bound = arguments.get(index).cloned().unwrap_or(Value::Null);
                call_env.borrow_mut().set(parameter.name.clone(), bound);
            }

            match eval_block(&function.body, &call_env) {
                Value::Return(value) => *value,
                other => other,
            }
        }
        Value::Builtin(builtin) => (builtin.func)(arguments),
        other => Value::Error(CantteError::runtime(format!(
            "It's not a function: {}",
            other.type_tag()
        ))),
    }
}
