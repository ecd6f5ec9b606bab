// Copyright (c) 2018 Fabian Schuiki

//! Generic traversal of grammar description trees.
//!
//! A single dispatch keyed on the node variant drives every consumer pass:
//! the `pre` hook fires before a node's children are visited, the children
//! are visited in declaration order, then the `post` hook fires. Container
//! nodes with no payload of their own still receive both calls so a pass can
//! bracket their children. Bare-token rule elements are not recursed into;
//! their token is reachable through the owning element.

use ast::{Func, Grammar, Node, NonTerminalRule, Rule, RuleElement};

/// A consumer pass over a grammar description tree.
///
/// Both hooks default to doing nothing, so a pass only implements the ones
/// it cares about.
pub trait Visit {
    /// Called before a node's children are visited.
    fn pre(&mut self, _node: Node) {}
    /// Called after a node's children have been visited.
    fn post(&mut self, _node: Node) {}
}

/// Walk an entire grammar description tree, invoking the visitor's hooks on
/// every node.
pub fn walk<V: Visit>(grammar: &Grammar, visitor: &mut V) {
    trace!("walk grammar ({} rules)", grammar.rules.len());
    visitor.pre(Node::Grammar(grammar));
    for rule in &grammar.rules {
        match *rule {
            Rule::NonTerminal(ref rule) => walk_non_terminal_rule(rule, visitor),
            Rule::Terminal(ref rule) => {
                trace!("walk terminal rule {}", rule.symbol.text);
                visitor.pre(Node::TerminalRule(rule));
                visitor.post(Node::TerminalRule(rule));
            }
        }
    }
    visitor.post(Node::Grammar(grammar));
}

fn walk_non_terminal_rule<V: Visit>(rule: &NonTerminalRule, visitor: &mut V) {
    trace!("walk non-terminal rule {}", rule.name.text);
    visitor.pre(Node::NonTerminalRule(rule));
    for elem in &rule.elems {
        walk_rule_element(elem, visitor);
    }
    visitor.post(Node::NonTerminalRule(rule));
}

fn walk_rule_element<V: Visit>(elem: &RuleElement, visitor: &mut V) {
    visitor.pre(Node::RuleElement(elem));
    if let RuleElement::Func(ref func) = *elem {
        walk_func(func, visitor);
    }
    visitor.post(Node::RuleElement(elem));
}

fn walk_func<V: Visit>(func: &Func, visitor: &mut V) {
    match *func {
        Func::OneOrMore(ref elem) => {
            visitor.pre(Node::OneOrMoreFunc(elem));
            walk_rule_element(elem, visitor);
            visitor.post(Node::OneOrMoreFunc(elem));
        }
        Func::ZeroOrOne(ref elem) => {
            visitor.pre(Node::ZeroOrOneFunc(elem));
            walk_rule_element(elem, visitor);
            visitor.post(Node::ZeroOrOneFunc(elem));
        }
        Func::ZeroOrMore(ref elem) => {
            visitor.pre(Node::ZeroOrMoreFunc(elem));
            walk_rule_element(elem, visitor);
            visitor.post(Node::ZeroOrMoreFunc(elem));
        }
        Func::Or(ref elem) => {
            visitor.pre(Node::OrFunc(elem));
            walk_rule_element(elem, visitor);
            visitor.post(Node::OrFunc(elem));
        }
        Func::Group(ref elems) => {
            visitor.pre(Node::GroupFunc(elems));
            for elem in elems {
                walk_rule_element(elem, visitor);
            }
            visitor.post(Node::GroupFunc(elems));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::NodeKind;
    use parser::Parser;

    /// Records the hook invocations in order.
    struct Recorder {
        events: Vec<(&'static str, NodeKind)>,
    }

    impl Visit for Recorder {
        fn pre(&mut self, node: Node) {
            self.events.push(("pre", node.kind()));
        }
        fn post(&mut self, node: Node) {
            self.events.push(("post", node.kind()));
        }
    }

    fn record(input: &str) -> Vec<(&'static str, NodeKind)> {
        let mut parser = Parser::new("test.g", input);
        let grammar = parser.parse().expect("input should parse");
        let mut recorder = Recorder { events: Vec::new() };
        walk(&grammar, &mut recorder);
        recorder.events
    }

    #[test]
    fn pre_and_post_bracket_children() {
        use ast::NodeKind::*;
        assert_eq!(
            record("A { ( b c ) }"),
            vec![
                ("pre", Grammar),
                ("pre", NonTerminalRule),
                ("pre", RuleElement),
                ("pre", GroupFunc),
                ("pre", RuleElement),
                ("post", RuleElement),
                ("pre", RuleElement),
                ("post", RuleElement),
                ("post", GroupFunc),
                ("post", RuleElement),
                ("post", NonTerminalRule),
                ("post", Grammar),
            ]
        );
    }

    #[test]
    fn quantifier_nesting_is_depth_faithful() {
        use ast::NodeKind::*;
        let kinds: Vec<_> = record("A { +?b }")
            .into_iter()
            .filter(|&(phase, _)| phase == "pre")
            .map(|(_, kind)| kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                Grammar,
                NonTerminalRule,
                RuleElement,
                OneOrMoreFunc,
                RuleElement,
                ZeroOrOneFunc,
                RuleElement,
            ]
        );
    }

    #[test]
    fn terminal_rules_get_both_hooks() {
        use ast::NodeKind::*;
        assert_eq!(
            record("'x' /[a-z]+/"),
            vec![
                ("pre", Grammar),
                ("pre", TerminalRule),
                ("post", TerminalRule),
                ("post", Grammar),
            ]
        );
    }
}
