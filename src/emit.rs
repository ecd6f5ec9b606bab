// Copyright (c) 2018 Fabian Schuiki

//! The emitter phase of the parser generator.
//!
//! Several passes will eventually build up the data structures that
//! facilitate the output: the lists of terminal and non-terminal symbols, a
//! text representation of the rules for debugging, and the rule list the
//! generated parser is produced from. Only the symbol collection pass exists
//! so far; actual code generation is not implemented.

use ast::{Grammar, Node, RuleElement};
use token::TokenKind;
use walk::{walk, Visit};

/// Run the code emission phase on a grammar description tree.
///
/// Currently collects and logs the symbol lists, then stops.
pub fn emit(grammar: &Grammar) {
    let symbols = Symbols::collect(grammar);
    debug!("non-terminal symbols: {:?}", symbols.non_terminals);
    debug!("terminal symbols: {:?}", symbols.terminals);
    warn!(
        "code emission is not implemented; {} rules left unemitted",
        grammar.rules.len()
    );
}

/// The decorated symbol names referenced by a grammar description, collected
/// through the traversal interface.
pub struct Symbols {
    /// Decorated non-terminal names, in order of first reference.
    pub non_terminals: Vec<String>,
    /// Decorated terminal names, in order of first reference.
    pub terminals: Vec<String>,
}

impl Symbols {
    /// Collect the symbol lists of a grammar description tree.
    pub fn collect(grammar: &Grammar) -> Symbols {
        let mut pass = Symbols {
            non_terminals: Vec::new(),
            terminals: Vec::new(),
        };
        walk(grammar, &mut pass);
        pass
    }

    fn add(list: &mut Vec<String>, name: &Option<String>) {
        if let Some(ref name) = *name {
            if !list.iter().any(|n| n == name) {
                list.push(name.clone());
            }
        }
    }
}

impl Visit for Symbols {
    fn pre(&mut self, node: Node) {
        match node {
            Node::NonTerminalRule(rule) => Symbols::add(&mut self.non_terminals, &rule.name.name),
            Node::RuleElement(elem) => {
                if let RuleElement::Token(ref token) = *elem {
                    match token.kind {
                        TokenKind::NonTerminal => {
                            Symbols::add(&mut self.non_terminals, &token.name)
                        }
                        TokenKind::TerminalName | TokenKind::TerminalOper => {
                            Symbols::add(&mut self.terminals, &token.name)
                        }
                        _ => (),
                    }
                }
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser::Parser;

    #[test]
    fn collects_decorated_symbols_once() {
        let mut parser = Parser::new("test.g", "Expr { term \"+\" Expr term }");
        let grammar = parser.parse().expect("input should parse");
        let symbols = Symbols::collect(&grammar);
        assert_eq!(symbols.non_terminals, vec!["EXPR_TOKEN"]);
        assert_eq!(symbols.terminals, vec!["TERM_TOKEN", "PLUS_TOKEN"]);
    }
}
