/// The evaluator module computes the value of an expression tree.
///
/// The evaluator traverses the AST bottom-up and applies each operator to
/// the values of its operands. It cannot fail: every well-formed tree has a
/// double-precision value, possibly infinite or `NaN`.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Follows IEEE-754 for division by zero, overflow and `NaN` propagation.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: numeric literals and the five arithmetic operators. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte spans.
/// - Decodes decimal, integer and scientific literals.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that encodes operator precedence and associativity, using one token
/// of lookahead and no backtracking.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with column info.
/// - Rejects empty input and tokens left over after an expression.
pub mod parser;
