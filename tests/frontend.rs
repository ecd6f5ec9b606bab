// Copyright (c) 2018 Fabian Schuiki
extern crate gander;

use gander::ast::Rule;
use gander::emit::Symbols;
use gander::parser::Parser;
use gander::regurge::regurge;

static CALCULATOR: &str = "
# A small calculator grammar.
Expr {
    Term *( \"+\" Term
          | \"-\" Term )
}

Term {
    Factor *( \"*\" Factor )
}

Factor {
    number
    | '(' Expr ')'
}

'number' /[0-9]+/
";

#[test]
fn parses_a_complete_grammar() {
    let mut parser = Parser::new("calculator.g", CALCULATOR);
    let grammar = parser.parse().expect("grammar should parse");
    assert_eq!(parser.error_count(), 0);
    assert_eq!(grammar.rules.len(), 4);

    let names: Vec<_> = grammar
        .rules
        .iter()
        .map(|rule| match *rule {
            Rule::NonTerminal(ref rule) => rule.name.text.clone(),
            Rule::Terminal(ref rule) => rule.symbol.text.clone(),
        })
        .collect();
    assert_eq!(names, vec!["Expr", "Term", "Factor", "'number'"]);
}

#[test]
fn regurgitation_reaches_a_fixpoint() {
    let mut parser = Parser::new("calculator.g", CALCULATOR);
    let grammar = parser.parse().expect("grammar should parse");
    let first = regurge(&grammar);

    let mut parser = Parser::new("regurgitated.g", &first);
    let reparsed = parser.parse().expect("regurgitated output should parse");
    assert_eq!(parser.error_count(), 0);
    assert_eq!(reparsed.rules.len(), grammar.rules.len());
    assert_eq!(regurge(&reparsed), first);
}

#[test]
fn symbol_collection_covers_the_whole_grammar() {
    let mut parser = Parser::new("calculator.g", CALCULATOR);
    let grammar = parser.parse().expect("grammar should parse");
    let symbols = Symbols::collect(&grammar);
    assert_eq!(
        symbols.non_terminals,
        vec!["EXPR_TOKEN", "TERM_TOKEN", "FACTOR_TOKEN"]
    );
    assert_eq!(
        symbols.terminals,
        vec!["PLUS_TOKEN", "MINUS_TOKEN", "STAR_TOKEN", "NUMBER_TOKEN"]
    );
}

#[test]
fn malformed_grammar_reports_and_fails() {
    let mut parser = Parser::new("broken.g", "Expr { Term\n");
    assert!(parser.parse().is_none());
    assert!(parser.error_count() > 0);
    assert!(parser.diagnostics()[0].starts_with("ERROR: broken.g: "));
}
