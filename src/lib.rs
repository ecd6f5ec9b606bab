// Copyright (c) 2018 Fabian Schuiki

//! A recursive-descent front end for grammar descriptions.
//!
//! This crate reads a small grammar description language (non-terminal
//! rules, terminal rules, and the prefix functions `+ * ? |` plus grouping
//! `( )`) and builds an abstract syntax tree that downstream passes walk
//! through a generic pre/post traversal, either to emit a generated parser or
//! to print the grammar back out.

#![deny(missing_docs)]

#[macro_use]
extern crate log;

pub mod ast;
pub mod emit;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod regurge;
pub mod token;
pub mod walk;
