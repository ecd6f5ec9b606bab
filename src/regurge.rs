// Copyright (c) 2018 Fabian Schuiki

//! An AST pass that prints the grammar description back out.
//!
//! The pass is built purely on the `walk` pre/post hook contract and exists
//! to verify that an input was parsed into the expected tree, and to serve as
//! a template for other pass implementations. Formatting differs from the
//! input (one rule per brace-delimited block, operators as prefix glyphs),
//! but rule names, operators, and terminal symbols come back out in order.

use ast::{Grammar, Node, RuleElement};
use walk::{walk, Visit};

/// Reconstruct the source text of a grammar description tree.
pub fn regurge(grammar: &Grammar) -> String {
    let mut pass = Regurge { out: String::new() };
    walk(grammar, &mut pass);
    pass.out
}

/// The regurgitation pass. Accumulates the reconstructed text.
struct Regurge {
    out: String,
}

impl Visit for Regurge {
    fn pre(&mut self, node: Node) {
        match node {
            Node::Grammar(..) => (),
            Node::NonTerminalRule(rule) => {
                self.out.push_str(&rule.name.text);
                self.out.push_str(" {\n        ");
            }
            Node::TerminalRule(rule) => {
                self.out.push_str(&rule.symbol.text);
                self.out.push(' ');
                self.out.push_str(&rule.expr.text);
                self.out.push_str("\n\n");
            }
            Node::RuleElement(elem) => {
                if let RuleElement::Token(ref token) = *elem {
                    self.out.push_str(&token.text);
                    self.out.push(' ');
                }
            }
            Node::OneOrMoreFunc(..) => self.out.push_str("+ "),
            Node::ZeroOrOneFunc(..) => self.out.push_str("? "),
            Node::ZeroOrMoreFunc(..) => self.out.push_str("* "),
            Node::OrFunc(..) => self.out.push_str("|\n        "),
            Node::GroupFunc(..) => self.out.push_str("( "),
        }
    }

    fn post(&mut self, node: Node) {
        match node {
            Node::NonTerminalRule(..) => self.out.push_str("\n    }\n\n"),
            Node::GroupFunc(..) => self.out.push_str(") "),
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser::Parser;

    fn parse(input: &str) -> Grammar {
        let mut parser = Parser::new("test.g", input);
        let grammar = parser.parse().expect("input should parse");
        assert_eq!(parser.error_count(), 0);
        grammar
    }

    #[test]
    fn non_terminal_rule() {
        let output = regurge(&parse("A { +b c }"));
        assert_eq!(output, "A {\n        + b c \n    }\n\n");
    }

    #[test]
    fn terminal_rule() {
        let output = regurge(&parse("'x' /[a-z]+/"));
        assert_eq!(output, "'x' /[a-z]+/\n\n");
    }

    #[test]
    fn alternation_breaks_the_line() {
        let output = regurge(&parse("A { b |c }"));
        assert_eq!(output, "A {\n        b |\n        c \n    }\n\n");
    }

    #[test]
    fn groups_are_parenthesized() {
        let output = regurge(&parse("A { *( b c ) }"));
        assert_eq!(output, "A {\n        * ( b c ) \n    }\n\n");
    }

    #[test]
    fn regurgitated_output_reparses_to_a_fixpoint() {
        let input = "E { T +( \"+\" T ) }\nT { f ?( '*' f ) }\n'f' /[0-9]+/";
        let first = regurge(&parse(input));
        let second = regurge(&parse(&first));
        assert_eq!(first, second);
    }
}
