// Copyright (c) 2018 Fabian Schuiki

//! The abstract syntax tree of a grammar description.
//!
//! The tree is a strict ownership hierarchy: every composite node exclusively
//! owns its children and there is no sharing between trees. The parser builds
//! the entire tree during a successful parse; consumer passes walk it through
//! the `walk` module and never mutate it.

use token::Token;

/// The root node of a grammar description.
///
/// A grammar produced by a successful parse contains at least one rule.
#[derive(Debug, PartialEq)]
pub struct Grammar {
    /// The rules of the grammar, in declaration order.
    pub rules: Vec<Rule>,
}

/// A top-level rule of a grammar description.
#[derive(Debug, PartialEq)]
pub enum Rule {
    /// A non-terminal rule `NAME { … }`.
    NonTerminal(NonTerminalRule),
    /// A terminal rule `'sym' /expr/`.
    Terminal(TerminalRule),
}

/// A non-terminal rule `NAME { rule_element+ }`.
#[derive(Debug, PartialEq)]
pub struct NonTerminalRule {
    /// The non-terminal naming the rule.
    pub name: Token,
    /// The elements of the rule body; at least one.
    pub elems: Vec<RuleElement>,
}

/// A terminal rule binding a terminal symbol to its lexical expression.
#[derive(Debug, PartialEq)]
pub struct TerminalRule {
    /// The terminal symbol being defined.
    pub symbol: Token,
    /// The lexical expression it matches.
    pub expr: Token,
}

/// A single element of a rule body.
///
/// An element is either a bare token (a non-terminal or terminal reference)
/// or exactly one nested function; the enum makes any other combination
/// unrepresentable.
#[derive(Debug, PartialEq)]
pub enum RuleElement {
    /// A bare token reference.
    Token(Token),
    /// A nested quantifier, alternation, or group.
    Func(Func),
}

/// A quantifier, alternation, or grouping function in a rule body.
///
/// These record that the grammar author wrote the operator at this point;
/// their semantics are interpreted by later passes, not here.
#[derive(Debug, PartialEq)]
pub enum Func {
    /// `+ rule_element`
    OneOrMore(Box<RuleElement>),
    /// `? rule_element`
    ZeroOrOne(Box<RuleElement>),
    /// `* rule_element`
    ZeroOrMore(Box<RuleElement>),
    /// `| rule_element`
    Or(Box<RuleElement>),
    /// `( rule_element+ )`; contains at least one element.
    Group(Vec<RuleElement>),
}

/// A borrowed view of any node in the tree.
///
/// Traversal hooks receive nodes through this view, which lets a pass
/// dispatch on the variant without coupling to the owning structures.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Grammar(&'a Grammar),
    NonTerminalRule(&'a NonTerminalRule),
    TerminalRule(&'a TerminalRule),
    RuleElement(&'a RuleElement),
    OneOrMoreFunc(&'a RuleElement),
    ZeroOrOneFunc(&'a RuleElement),
    ZeroOrMoreFunc(&'a RuleElement),
    OrFunc(&'a RuleElement),
    GroupFunc(&'a [RuleElement]),
}

/// The discriminant of a node, independent of its payload.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Grammar,
    NonTerminalRule,
    TerminalRule,
    RuleElement,
    OneOrMoreFunc,
    ZeroOrOneFunc,
    ZeroOrMoreFunc,
    OrFunc,
    GroupFunc,
}

impl<'a> Node<'a> {
    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match *self {
            Node::Grammar(..) => NodeKind::Grammar,
            Node::NonTerminalRule(..) => NodeKind::NonTerminalRule,
            Node::TerminalRule(..) => NodeKind::TerminalRule,
            Node::RuleElement(..) => NodeKind::RuleElement,
            Node::OneOrMoreFunc(..) => NodeKind::OneOrMoreFunc,
            Node::ZeroOrOneFunc(..) => NodeKind::ZeroOrOneFunc,
            Node::ZeroOrMoreFunc(..) => NodeKind::ZeroOrMoreFunc,
            Node::OrFunc(..) => NodeKind::OrFunc,
            Node::GroupFunc(..) => NodeKind::GroupFunc,
        }
    }
}
