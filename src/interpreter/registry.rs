use std::{collections::HashMap, f64::consts, rc::Rc};

use crate::{
    error::{Error, RegistryError},
    interpreter::{
        evaluator,
        operation::{Associativity, Operation},
        parser::Parser,
    },
};

/// Stores the constants and operations an expression can refer to.
///
/// A registry holds two independent mappings: constant values by name, and
/// shared operations by name (functions, single-character operators and the
/// two parenthesis markers under the keys `"("` and `")"`). Registration is
/// append-only in practice and overwrites silently, so the last
/// registration of a name wins.
///
/// ## Usage
///
/// A `Registry` is created once and reused for evaluating expressions.
/// [`Registry::new`] returns the pre-populated default table;
/// [`Registry::empty`] returns a blank registry for isolated setups. The
/// borrow checker keeps registration (`&mut self`) and evaluation
/// (`&self`) from interleaving, so no internal locking is needed.
pub struct Registry {
    /// A mapping from constant names to their values.
    constants:  HashMap<String, f64>,
    /// A mapping from names to shared operations: functions, operators and
    /// the parenthesis markers.
    operations: HashMap<String, Rc<Operation>>,
}

impl Registry {
    /// Creates a registry pre-populated with the default table: the
    /// constants `PI`, `E` and `e`, the operators `+ - * / ^`, and the
    /// built-in functions.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.install_defaults();
        registry
    }

    /// Creates a registry containing only the two parenthesis markers.
    ///
    /// The markers are structural and always present; everything else can
    /// be registered on top.
    #[must_use]
    pub fn empty() -> Self {
        let mut operations = HashMap::new();
        operations.insert("(".to_string(), Rc::new(Operation::Parenthesis { left: true }));
        operations.insert(")".to_string(), Rc::new(Operation::Parenthesis { left: false }));

        Self { constants: HashMap::new(),
               operations }
    }

    /// Computes the numeric value of an expression against this registry.
    ///
    /// This is the primary entry point: it scans and parses the expression
    /// into an RPN sequence, then reduces the sequence to a number. The
    /// first error encountered aborts the whole computation.
    ///
    /// # Example
    /// ```
    /// use calcyard::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry.register_constant("answer", 42.0).unwrap();
    ///
    /// assert_eq!(registry.compute("answer / 2").unwrap(), 21.0);
    /// ```
    pub fn compute(&self, expression: &str) -> Result<f64, Error> {
        let mut rpn = Parser::parse(self, expression)?;
        let value = evaluator::evaluate(&mut rpn)?;
        Ok(value)
    }

    /// Registers a constant value under `name`, overwriting any previous
    /// registration.
    ///
    /// # Errors
    /// Returns `InvalidConstantName` if the name's first character is not
    /// an ASCII letter.
    ///
    /// # Example
    /// ```
    /// use calcyard::Registry;
    ///
    /// let mut registry = Registry::new();
    ///
    /// registry.register_constant("tau", 6.283185307179586).unwrap();
    /// assert!(registry.register_constant("2tau", 0.0).is_err());
    /// ```
    pub fn register_constant(&mut self, name: &str, value: f64) -> Result<(), RegistryError> {
        if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(RegistryError::InvalidConstantName { name: name.to_string() });
        }

        self.insert_constant(name, value);
        Ok(())
    }

    /// Registers a function under `name`, overwriting any previous
    /// registration.
    ///
    /// The function receives its arguments as a slice; the evaluator
    /// supplies exactly one element per call.
    ///
    /// # Errors
    /// Returns `InvalidFunctionName` if the name's first character is not
    /// an ASCII letter.
    ///
    /// # Example
    /// ```
    /// use calcyard::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry.register_func("double", |args| {
    ///             2.0 * args.first().copied().unwrap_or(f64::NAN)
    ///         })
    ///         .unwrap();
    ///
    /// assert_eq!(registry.compute("double(21)").unwrap(), 42.0);
    /// ```
    pub fn register_func(&mut self,
                         name: &str,
                         apply: impl Fn(&[f64]) -> f64 + 'static)
                         -> Result<(), RegistryError> {
        if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(RegistryError::InvalidFunctionName { name: name.to_string() });
        }

        self.insert_func(name, apply);
        Ok(())
    }

    /// Registers a binary operator under `symbol`, overwriting any
    /// previous registration.
    ///
    /// The operator is applied as `apply(left, right)`. Higher precedence
    /// binds tighter; associativity breaks ties between operators of equal
    /// precedence.
    ///
    /// # Errors
    /// Returns `InvalidOperatorSymbol` if `symbol` is not exactly one
    /// character long, or if that character is not an ASCII special
    /// character.
    ///
    /// # Example
    /// ```
    /// use calcyard::{Associativity, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.register_operator("%", 10, |a, b| a % b, Associativity::Left)
    ///         .unwrap();
    ///
    /// assert_eq!(registry.compute("7 % 4").unwrap(), 3.0);
    /// assert!(registry.register_operator("ab", 1, |a, _| a, Associativity::Left)
    ///                 .is_err());
    /// ```
    pub fn register_operator(&mut self,
                             symbol: &str,
                             precedence: u32,
                             apply: impl Fn(f64, f64) -> f64 + 'static,
                             associativity: Associativity)
                             -> Result<(), RegistryError> {
        let mut chars = symbol.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(RegistryError::InvalidOperatorSymbol {
                symbol:  symbol.to_string(),
                details: "must be 1 char long".to_string(),
            });
        };
        if !c.is_ascii_punctuation() {
            return Err(RegistryError::InvalidOperatorSymbol {
                symbol:  symbol.to_string(),
                details: "must be a special character".to_string(),
            });
        }

        self.insert_operator(c, precedence, associativity, apply);
        Ok(())
    }

    /// Looks up a constant's value.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Looks up a shared operation: a function, an operator or a
    /// parenthesis marker.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&Rc<Operation>> {
        self.operations.get(name)
    }

    fn insert_constant(&mut self, name: &str, value: f64) {
        self.constants.insert(name.to_string(), value);
    }

    fn insert_func(&mut self, name: &str, apply: impl Fn(&[f64]) -> f64 + 'static) {
        self.operations.insert(name.to_string(),
                               Rc::new(Operation::Function { name:  name.to_string(),
                                                             apply: Box::new(apply), }));
    }

    fn insert_operator(&mut self,
                       symbol: char,
                       precedence: u32,
                       associativity: Associativity,
                       apply: impl Fn(f64, f64) -> f64 + 'static) {
        self.operations.insert(symbol.to_string(),
                               Rc::new(Operation::Operator { symbol,
                                                             precedence,
                                                             associativity,
                                                             apply: Box::new(apply) }));
    }

    fn install_defaults(&mut self) {
        self.insert_constant("PI", consts::PI);
        self.insert_constant("E", consts::E);
        self.insert_constant("e", consts::E);

        self.insert_operator('+', 1, Associativity::Left, |a, b| a + b);
        self.insert_operator('-', 1, Associativity::Left, |a, b| a - b);
        self.insert_operator('*', 10, Associativity::Left, |a, b| a * b);
        self.insert_operator('/', 10, Associativity::Left, |a, b| a / b);
        self.insert_operator('^', 100, Associativity::Right, f64::powf);

        self.insert_func("log", |args| first(args).ln());
        self.insert_func("log2", |args| first(args).log2());
        // log10 is bound to the natural log for compatibility with the
        // historical table.
        self.insert_func("log10", |args| first(args).ln());
        self.insert_func("pow10", |args| 10f64.powf(first(args)));

        self.insert_func("ln", |args| first(args).ln());
        self.insert_func("exp", |args| first(args).exp());

        self.insert_func("sin", |args| first(args).sin());
        self.insert_func("arcsin", |args| first(args).asin());
        self.insert_func("cos", |args| first(args).cos());
        self.insert_func("arccos", |args| first(args).acos());
        self.insert_func("tan", |args| first(args).tan());
        self.insert_func("arctan", |args| first(args).atan());

        self.insert_func("pow2", |args| {
                let x = first(args);
                x * x
            });
        self.insert_func("sqrt", |args| first(args).sqrt());

        self.insert_func("fac", |args| factorial(first(args)));

        self.insert_func("max", |args| args.iter().copied().fold(f64::NEG_INFINITY, f64::max));
        self.insert_func("min", |args| args.iter().copied().fold(f64::INFINITY, f64::min));
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the first argument of a builtin call, or NaN when none was
/// supplied.
fn first(args: &[f64]) -> f64 {
    args.first().copied().unwrap_or(f64::NAN)
}

/// Recursive factorial over reals: `fac(n) = 1` for `n <= 0`, otherwise
/// `n * fac(n - 1)`.
fn factorial(n: f64) -> f64 {
    if n <= 0.0 { 1.0 } else { n * factorial(n - 1.0) }
}
