use std::rc::Rc;

use crate::{
    ast::{Argument, Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::{Bindings, invoke, lookup, normalize_name},
        value::{core::Value, origin::Origin},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default relative tolerance used for approximate comparisons.
pub const REL_TOLERANCE: f64 = 1e-10;
/// Default absolute tolerance used for approximate comparisons.
pub const ABS_TOLERANCE: f64 = 1e-9;

/// Stores the evaluation context.
///
/// Builtins are stateless, so the context only carries the name of the
/// source being evaluated. Every value it produces is stamped with that
/// file and the line of the expression it came from.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Name of the source file, if the input came from one.
    pub file: Option<Rc<str>>,
}

impl Context {
    /// Creates a context for input with no file name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose origins name `file`.
    #[must_use]
    pub fn with_file(file: &str) -> Self {
        Self { file: Some(Rc::from(file)) }
    }

    fn origin(&self, line: usize) -> Origin {
        Origin::new(line, self.file.clone())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals become values directly, lists evaluate their items in order,
    /// and calls evaluate every argument before the builtin runs.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, line } => Ok(self.eval_literal(value, *line)),
            Expr::List { items,
                         separator,
                         line, } => {
                let values = items.iter().map(|item| self.eval(item)).collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::list(values, *separator, self.origin(*line)))
            },
            Expr::Call { name, args, line } => self.eval_call(name, args, *line),
        }
    }

    fn eval_literal(&self, literal: &LiteralValue, line: usize) -> Value {
        let origin = self.origin(line);

        match literal {
            LiteralValue::Nil => Value::nil(origin),
            LiteralValue::Number(n) => Value::number(*n, origin),
            LiteralValue::Dimension(n, unit) => Value::dimension(*n, unit.as_str(), origin),
            LiteralValue::Percentage(p) => Value::percentage(*p, origin),
            LiteralValue::Color(c) => Value::color(*c, origin),
            LiteralValue::String { text, quoted } => Value::string(text.as_str(), *quoted, origin),
            LiteralValue::Bool(b) => Value::boolean(*b, origin),
        }
    }

    /// Evaluates a builtin call.
    ///
    /// The overload is chosen by the total argument count. Positional
    /// arguments bind to parameters in declaration order; `$name: value`
    /// arguments bind by name and must come after every positional one.
    ///
    /// # Errors
    /// - `UnknownFunction` or `ArgumentCountMismatch` from overload lookup.
    /// - `InvalidArgument` for an undeclared, repeated or misplaced keyword.
    /// - Any error raised while evaluating an argument or by the builtin.
    pub fn eval_call(&self, name: &str, args: &[Argument], line: usize) -> EvalResult<Value> {
        let origin = self.origin(line);
        let descriptor = lookup(name, args.len(), &origin)?;

        let mut bindings = Bindings::with_capacity(args.len());
        let mut seen_keyword = false;

        for (position, argument) in args.iter().enumerate() {
            let value = self.eval(&argument.value)?;

            let param = match &argument.name {
                None if seen_keyword => {
                    return Err(RuntimeError::invalid_argument(format!("positional argument to {name} follows a keyword argument"),
                                                              &value));
                },
                // lookup matched the arity, so every position has a parameter
                None => descriptor.params[position].to_string(),
                Some(keyword) => {
                    seen_keyword = true;
                    let wanted = normalize_name(keyword);
                    match descriptor.params.iter().find(|p| **p == wanted) {
                        Some(param) => (*param).to_string(),
                        None => {
                            return Err(RuntimeError::invalid_argument(format!("{name} has no parameter named {keyword}"),
                                                                      &value));
                        },
                    }
                },
            };

            if bindings.contains_key(&param) {
                return Err(RuntimeError::invalid_argument(format!("argument {param} to {name} given twice"),
                                                          &value));
            }
            bindings.insert(param, value);
        }

        invoke(descriptor, &bindings, &origin)
    }
}
