// Copyright (c) 2018 Fabian Schuiki

//! A backtracking recursive-descent parser for grammar descriptions.
//!
//! There is one parsing function per production of the surface grammar:
//!
//! ```text
//! grammar          := (non_terminal_rule | terminal_rule)+ END_OF_INPUT
//! non_terminal_rule:= NON_TERMINAL '{' rule_element+ '}'
//! terminal_rule    := TERMINAL_SYMBOL TERMINAL_EXPR
//! rule_element     := NON_TERMINAL | TERMINAL_NAME | TERMINAL_OPER
//!                    | TERMINAL_SYMBOL | or_func | zero_or_more_func
//!                    | zero_or_one_func | one_or_more_func | group_func
//! one_or_more_func := '+' rule_element
//! zero_or_one_func := '?' rule_element
//! zero_or_more_func:= '*' rule_element
//! or_func          := '|' rule_element
//! group_func       := '(' rule_element+ ')'
//! ```
//!
//! Every function follows the same pattern: save the token cursor, then work
//! through the production's decision points in order. A failure before any
//! token has been consumed is a *no-match*: the cursor is restored and `None`
//! returned without reporting anything, so the caller may try the next
//! alternative. A failure after the production has committed to an
//! interpretation is a *hard error*: a diagnostic is reported, `None` is
//! returned, and the cursor is left where the violation was found. Ordered
//! choice takes the first alternative that succeeds.

use ast::{Func, Grammar, NonTerminalRule, Rule, RuleElement, TerminalRule};
use errors::Reporter;
use lexer;
use token::{TokenKind, TokenStream};

/// A parser for grammar descriptions.
///
/// Owns the token stream and the error reporter for one input file, keeping
/// parses independent and testable in isolation.
pub struct Parser {
    tokens: TokenStream,
    reporter: Reporter,
}

impl Parser {
    /// Create a parser for an input string, lexing it up front.
    pub fn new(file_name: &str, input: &str) -> Parser {
        let mut reporter = Reporter::new(file_name);
        let tokens = lexer::tokenize(input, &mut reporter);
        Parser {
            tokens: tokens,
            reporter: reporter,
        }
    }

    /// Parse the input into a grammar description tree.
    ///
    /// Returns `None` if no complete grammar could be formed. A tree may be
    /// returned even though syntax errors were reported along the way, so
    /// callers must also consult `error_count`.
    pub fn parse(&mut self) -> Option<Grammar> {
        self.parse_grammar()
    }

    /// The number of errors reported so far, lexical and syntactic.
    pub fn error_count(&self) -> usize {
        self.reporter.error_count()
    }

    /// The diagnostics reported so far, in order of occurrence.
    pub fn diagnostics(&self) -> &[String] {
        self.reporter.diagnostics()
    }

    /// Report an `expected X but got "Y"` hard error at the current token.
    fn expected(&mut self, what: &str) {
        let (line, text) = {
            let token = self.tokens.current();
            (token.line, token.text.clone())
        };
        self.reporter
            .syntax_error(line, &format!("expected {} but got \"{}\"", what, text));
    }

    /// Report a hard error with a bare message at the current token.
    fn error(&mut self, message: &str) {
        let line = self.tokens.current().line;
        self.reporter.syntax_error(line, message);
    }

    /// grammar := (non_terminal_rule | terminal_rule)+ END_OF_INPUT
    fn parse_grammar(&mut self) -> Option<Grammar> {
        trace!("grammar: at {:?}", self.tokens.current().kind);
        let mut rules = Vec::new();
        match self.parse_rule() {
            Some(rule) => rules.push(rule),
            None => {
                self.error("grammar must contain at least one rule");
                return None;
            }
        }
        while let Some(rule) = self.parse_rule() {
            rules.push(rule);
        }
        if self.tokens.current().kind == TokenKind::EndOfInput {
            self.tokens.advance();
            trace!("grammar: matched {} rules", rules.len());
            Some(Grammar { rules: rules })
        } else {
            self.expected("end of input");
            None
        }
    }

    /// Ordered choice between the two top-level rule forms.
    fn parse_rule(&mut self) -> Option<Rule> {
        if let Some(rule) = self.parse_non_terminal_rule() {
            return Some(Rule::NonTerminal(rule));
        }
        if let Some(rule) = self.parse_terminal_rule() {
            return Some(Rule::Terminal(rule));
        }
        None
    }

    /// non_terminal_rule := NON_TERMINAL '{' rule_element+ '}'
    fn parse_non_terminal_rule(&mut self) -> Option<NonTerminalRule> {
        let mark = self.tokens.mark();
        if self.tokens.current().kind != TokenKind::NonTerminal {
            self.tokens.reset(mark);
            return None;
        }
        let name = self.tokens.advance().clone();
        trace!("non_terminal_rule: {}", name.text);
        if self.tokens.current().kind != TokenKind::OpenCurly {
            self.expected("a \"{\"");
            return None;
        }
        self.tokens.advance();
        let mut elems = Vec::new();
        match self.parse_rule_element() {
            Some(elem) => elems.push(elem),
            None => {
                self.error("at least one rule element is required in a rule");
                return None;
            }
        }
        while let Some(elem) = self.parse_rule_element() {
            elems.push(elem);
        }
        if self.tokens.current().kind != TokenKind::CloseCurly {
            self.expected("a \"}\"");
            return None;
        }
        self.tokens.advance();
        Some(NonTerminalRule {
            name: name,
            elems: elems,
        })
    }

    /// terminal_rule := TERMINAL_SYMBOL TERMINAL_EXPR
    fn parse_terminal_rule(&mut self) -> Option<TerminalRule> {
        let mark = self.tokens.mark();
        if self.tokens.current().kind != TokenKind::TerminalSymbol {
            self.tokens.reset(mark);
            return None;
        }
        let symbol = self.tokens.advance().clone();
        trace!("terminal_rule: {}", symbol.text);
        if self.tokens.current().kind != TokenKind::TerminalExpr {
            self.expected("a lexical expression");
            return None;
        }
        let expr = self.tokens.advance().clone();
        Some(TerminalRule {
            symbol: symbol,
            expr: expr,
        })
    }

    /// rule_element := NON_TERMINAL | TERMINAL_NAME | TERMINAL_OPER
    ///               | TERMINAL_SYMBOL | or_func | zero_or_more_func
    ///               | zero_or_one_func | one_or_more_func | group_func
    ///
    /// The no-match path restores the saved cursor even when one of the
    /// function alternatives consumed tokens before failing, so the caller
    /// sees the position from before the element was attempted.
    fn parse_rule_element(&mut self) -> Option<RuleElement> {
        let mark = self.tokens.mark();
        match self.tokens.current().kind {
            TokenKind::NonTerminal
            | TokenKind::TerminalName
            | TokenKind::TerminalOper
            | TokenKind::TerminalSymbol => {
                let token = self.tokens.advance().clone();
                trace!("rule_element: token {}", token.text);
                return Some(RuleElement::Token(token));
            }
            _ => (),
        }
        if let Some(func) = self.parse_or_func() {
            return Some(RuleElement::Func(func));
        }
        if let Some(func) = self.parse_zero_or_more_func() {
            return Some(RuleElement::Func(func));
        }
        if let Some(func) = self.parse_zero_or_one_func() {
            return Some(RuleElement::Func(func));
        }
        if let Some(func) = self.parse_one_or_more_func() {
            return Some(RuleElement::Func(func));
        }
        if let Some(func) = self.parse_group_func() {
            return Some(RuleElement::Func(func));
        }
        self.tokens.reset(mark);
        None
    }

    /// Shared body of the four single-operand prefix functions: recognize the
    /// operator token, then require one rule element as the operand.
    fn parse_prefix_func(&mut self, oper: TokenKind) -> Option<RuleElement> {
        let mark = self.tokens.mark();
        if self.tokens.current().kind != oper {
            self.tokens.reset(mark);
            return None;
        }
        self.tokens.advance();
        trace!("prefix func: {:?}", oper);
        match self.parse_rule_element() {
            Some(elem) => Some(elem),
            None => {
                self.expected("one or more rule elements");
                None
            }
        }
    }

    /// one_or_more_func := '+' rule_element
    fn parse_one_or_more_func(&mut self) -> Option<Func> {
        self.parse_prefix_func(TokenKind::OneOrMore)
            .map(|elem| Func::OneOrMore(Box::new(elem)))
    }

    /// zero_or_one_func := '?' rule_element
    fn parse_zero_or_one_func(&mut self) -> Option<Func> {
        self.parse_prefix_func(TokenKind::ZeroOrOne)
            .map(|elem| Func::ZeroOrOne(Box::new(elem)))
    }

    /// zero_or_more_func := '*' rule_element
    fn parse_zero_or_more_func(&mut self) -> Option<Func> {
        self.parse_prefix_func(TokenKind::ZeroOrMore)
            .map(|elem| Func::ZeroOrMore(Box::new(elem)))
    }

    /// or_func := '|' rule_element
    fn parse_or_func(&mut self) -> Option<Func> {
        self.parse_prefix_func(TokenKind::Pipe)
            .map(|elem| Func::Or(Box::new(elem)))
    }

    /// group_func := '(' rule_element+ ')'
    fn parse_group_func(&mut self) -> Option<Func> {
        let mark = self.tokens.mark();
        if self.tokens.current().kind != TokenKind::OpenParen {
            self.tokens.reset(mark);
            return None;
        }
        self.tokens.advance();
        trace!("group_func");
        let mut elems = Vec::new();
        match self.parse_rule_element() {
            Some(elem) => elems.push(elem),
            None => {
                self.expected("one or more rule elements");
                return None;
            }
        }
        while let Some(elem) = self.parse_rule_element() {
            elems.push(elem);
        }
        if self.tokens.current().kind != TokenKind::CloseParen {
            self.expected("a \")\"");
            return None;
        }
        self.tokens.advance();
        Some(Func::Group(elems))
    }
}
