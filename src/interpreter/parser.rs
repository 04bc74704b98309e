use std::rc::Rc;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{self, Token, TokenKind},
        operation::{Associativity, Operation, RpnItem},
        registry::Registry,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Converts a token sequence into Reverse Polish Notation.
///
/// The parser implements the Shunting-Yard algorithm. It maintains two
/// stacks: `output`, the growing RPN sequence, and `stack`, the pending
/// operators, functions and parenthesis markers that have not been emitted
/// yet. Identifiers are resolved through the registry; constants become
/// numbers immediately, functions wait on the operator stack until their
/// argument group closes.
///
/// See <https://en.wikipedia.org/wiki/Shunting-yard_algorithm>.
pub struct Parser<'r> {
    registry: &'r Registry,
    tokens:   Vec<Token>,
    output:   Vec<RpnItem>,
    stack:    Vec<Rc<Operation>>,
    pos:      usize,
}

impl<'r> Parser<'r> {
    /// Creates a parser over a pre-scanned token sequence.
    #[must_use]
    pub fn new(registry: &'r Registry, tokens: Vec<Token>) -> Self {
        Self { registry,
               tokens,
               output: Vec::new(),
               stack: Vec::new(),
               pos: 0 }
    }

    /// Scans and parses an expression into an RPN sequence.
    ///
    /// # Errors
    /// Fails on the first illegal token, unknown identifier or unknown
    /// operator.
    ///
    /// # Example
    /// ```
    /// use calcyard::{Parser, Registry, RpnItem};
    ///
    /// let registry = Registry::new();
    /// let rpn = Parser::parse(&registry, "(1 + 3) * 5").unwrap();
    ///
    /// // RPN: 1 3 + 5 *
    /// assert_eq!(rpn.len(), 5);
    /// assert!(matches!(rpn[0], RpnItem::Number(n) if n == 1.0));
    /// assert!(matches!(rpn[1], RpnItem::Number(n) if n == 3.0));
    /// ```
    pub fn parse(registry: &'r Registry, source: &str) -> ParseResult<Vec<RpnItem>> {
        Self::new(registry, lexer::scan(source)).into_rpn()
    }

    /// Runs the parser to completion and returns the RPN sequence.
    pub fn into_rpn(mut self) -> ParseResult<Vec<RpnItem>> {
        self.run()?;
        Ok(self.output)
    }

    fn run(&mut self) -> ParseResult<()> {
        while let Some(token) = self.read_token() {
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Illegal => {
                    return Err(ParseError::InvalidToken { text:  token.text,
                                                          start: token.start,
                                                          end:   token.end, });
                },
                TokenKind::Number => {
                    let value = Self::parse_number(&token)?;
                    self.output.push(RpnItem::Number(value));
                },
                TokenKind::Ident => self.push_ident(&token)?,
                TokenKind::LParen => self.open_group(),
                TokenKind::RParen => self.close_group(),
                TokenKind::Operator => self.push_operator(&token)?,
            }
        }

        // Drain the pending operators. An unmatched left marker ends up in
        // the output here and is rejected by the evaluator.
        while let Some(op) = self.stack.pop() {
            self.output.push(RpnItem::Operation(op));
        }

        Ok(())
    }

    /// Consumes and returns the next token.
    fn read_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        Some(token)
    }

    /// Returns the next token without consuming it.
    fn next_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token before the one just consumed.
    fn previous_token(&self) -> Option<&Token> {
        self.pos.checked_sub(2).and_then(|i| self.tokens.get(i))
    }

    fn parse_number(token: &Token) -> ParseResult<f64> {
        token.text.parse().map_err(|_| ParseError::InvalidToken { text:  token.text.clone(),
                                                                  start: token.start,
                                                                  end:   token.end, })
    }

    /// Resolves an identifier: a constant's value goes straight to the
    /// output, a function waits on the operator stack until its argument
    /// group closes.
    fn push_ident(&mut self, token: &Token) -> ParseResult<()> {
        if let Some(value) = self.registry.constant(&token.text) {
            self.output.push(RpnItem::Number(value));
            return Ok(());
        }

        if let Some(op) = self.registry.operation(&token.text) {
            self.stack.push(Rc::clone(op));
            return Ok(());
        }

        Err(ParseError::UnknownIdentifier { text:  token.text.clone(),
                                            start: token.start,
                                            end:   token.end, })
    }

    fn open_group(&mut self) {
        let marker = self.registry
                         .operation("(")
                         .cloned()
                         .unwrap_or_else(|| Rc::new(Operation::Parenthesis { left: true }));
        self.stack.push(marker);
    }

    /// Closes a parenthesized group: pops pending operators to the output
    /// until the matching left marker, discards the marker, and emits a
    /// function sitting directly beneath it.
    ///
    /// A right parenthesis with no matching marker drains the stack and is
    /// otherwise ignored.
    fn close_group(&mut self) {
        while let Some(top) = self.stack.pop() {
            if matches!(top.as_ref(), Operation::Parenthesis { left: true }) {
                let func_on_top =
                    matches!(self.stack.last().map(Rc::as_ref), Some(Operation::Function { .. }));
                if func_on_top && let Some(func) = self.stack.pop() {
                    self.output.push(RpnItem::Operation(func));
                }
                return;
            }
            self.output.push(RpnItem::Operation(top));
        }
    }

    /// Handles an operator token: folds `-NUMBER` into a negative literal
    /// where no left operand can exist, otherwise applies precedence
    /// climbing and pushes the operator.
    fn push_operator(&mut self, token: &Token) -> ParseResult<()> {
        // Negative number: `-` directly before a number, at the start of
        // the input or right after another operator.
        if token.text == "-"
           && self.next_token().is_some_and(|next| next.kind == TokenKind::Number)
           && self.previous_token().is_none_or(|prev| prev.kind == TokenKind::Operator)
        {
            if let Some(number) = self.read_token() {
                let value = Self::parse_number(&number)?;
                self.output.push(RpnItem::Number(-value));
            }
            return Ok(());
        }

        let Some(op) = self.registry.operation(&token.text) else {
            return Err(ParseError::UnknownOperator { text:  token.text.clone(),
                                                     start: token.start,
                                                     end:   token.end, });
        };
        let Operation::Operator { precedence,
                                  associativity,
                                  .. } = op.as_ref()
        else {
            return Err(ParseError::UnknownOperator { text:  token.text.clone(),
                                                     start: token.start,
                                                     end:   token.end, });
        };

        let precedence = *precedence;
        let left_associative = *associativity == Associativity::Left;
        let op = Rc::clone(op);

        loop {
            // Pop while the stack top is an operator that binds tighter,
            // or binds equally and the new operator is left-associative.
            // Markers and functions stop the popping.
            let pop = match self.stack.last().map(Rc::as_ref) {
                Some(Operation::Operator { precedence: top, .. }) => {
                    *top > precedence || (*top == precedence && left_associative)
                },
                _ => false,
            };
            if !pop {
                break;
            }
            if let Some(top) = self.stack.pop() {
                self.output.push(RpnItem::Operation(top));
            }
        }

        self.stack.push(op);
        Ok(())
    }
}
