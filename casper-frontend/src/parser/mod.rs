//! Casper structural parser
//!
//! Matches the marker-annotated text produced by the indentation
//! preprocessor against the Casper grammar (`grammar/casper.pest`) and hands
//! back the raw parse tree. Turning that tree into AST nodes is the job of
//! the builder.

pub mod errors;

use casper_preprocessor::PreprocessedSource;
use log::debug;
use pest::error::{Error as PestError, LineColLocation};
use pest::iterators::Pairs;
use pest::Parser;
use pest_derive::Parser;

pub use errors::ParseError;

#[derive(Parser)]
#[grammar = "grammar/casper.pest"]
pub struct CasperParser;

/// Match `source` against the grammar, starting at the `program` rule
pub fn parse_tree(source: &PreprocessedSource) -> Result<Pairs<'_, Rule>, ParseError> {
    let pairs = CasperParser::parse(Rule::program, source.text())
        .map_err(|err| syntax_error(err, source))?;

    debug!("Parsed {} into a concrete syntax tree", source.filename());
    Ok(pairs)
}

/// Convert a pest failure into a `ParseError` located in the user's source
fn syntax_error(err: PestError<Rule>, source: &PreprocessedSource) -> ParseError {
    let err = err.renamed_rules(|rule| describe_rule(*rule).to_string());
    let (line, column) = match err.line_col {
        LineColLocation::Pos(position) => position,
        LineColLocation::Span(start, _) => start,
    };

    ParseError::Syntax {
        message: err.variant.message().into_owned(),
        location: source.original_location(line, column),
    }
}

/// Human-readable name of a rule for "expected ..." messages
fn describe_rule(rule: Rule) -> &'static str {
    match rule {
        Rule::EOI => "end of input",
        Rule::while_stmt
        | Rule::from_stmt
        | Rule::if_stmt
        | Rule::function_decl
        | Rule::var_decl
        | Rule::assignment
        | Rule::break_stmt
        | Rule::return_stmt
        | Rule::call_stmt => "statement",
        Rule::large_block | Rule::small_block => "block",
        Rule::elif_clause => "`elif`",
        Rule::else_clause => "`else`",
        Rule::step => "`by`",
        Rule::param_list | Rule::param => "parameter",
        Rule::fn_type => "parameter types",
        Rule::default_value => "default value",
        Rule::ident_list | Rule::ident => "identifier",
        Rule::var_exp_list | Rule::var_exp => "variable",
        Rule::exp_list
        | Rule::ternary_exp
        | Rule::or_exp
        | Rule::and_exp
        | Rule::rel_exp
        | Rule::add_exp
        | Rule::mul_exp
        | Rule::prefix_exp
        | Rule::postfix_exp
        | Rule::arg_list
        | Rule::arg => "expression",
        Rule::call => "call",
        Rule::subscript => "subscript",
        Rule::list_lit => "list",
        Rule::or_op | Rule::and_op | Rule::rel_op | Rule::add_op | Rule::mul_op => "operator",
        Rule::prefix_op => "prefix operator",
        Rule::postfix_op => "postfix operator",
        Rule::bool_lit => "boolean",
        Rule::num_lit => "number",
        Rule::str_lit => "string",
        Rule::type_name => "type",
        Rule::keyword => "keyword",
        Rule::kw_if => "`if`",
        Rule::kw_elif => "`elif`",
        Rule::kw_else => "`else`",
        Rule::kw_while => "`while`",
        Rule::kw_from => "`from`",
        Rule::kw_to => "`to`",
        Rule::kw_by => "`by`",
        Rule::kw_break => "`break`",
        Rule::kw_return => "`return`",
        _ => "input",
    }
}

/// Whether a rule only marks a keyword and carries no content of its own
pub(crate) fn is_keyword(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::kw_if
            | Rule::kw_elif
            | Rule::kw_else
            | Rule::kw_while
            | Rule::kw_from
            | Rule::kw_to
            | Rule::kw_by
            | Rule::kw_break
            | Rule::kw_return
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use casper_preprocessor::Preprocessor;
    use indoc::indoc;

    fn preprocess(source: &str) -> PreprocessedSource {
        let _ = env_logger::builder().is_test(true).try_init();
        Preprocessor::new().process(source, "test.casper").unwrap()
    }

    fn statement_rules(source: &str) -> Vec<Rule> {
        let preprocessed = preprocess(source);
        let mut pairs = parse_tree(&preprocessed).unwrap();
        let program = pairs.next().unwrap();
        assert_eq!(program.as_rule(), Rule::program);
        program
            .into_inner()
            .map(|pair| pair.as_rule())
            .filter(|rule| *rule != Rule::EOI)
            .collect()
    }

    #[test]
    fn test_parse_simple_statements() {
        let rules = statement_rules(indoc! {"
            int x, y = 1, 2
            x = y + 1
            print(x)
            return
        "});
        assert_eq!(
            rules,
            vec![Rule::var_decl, Rule::assignment, Rule::call_stmt, Rule::return_stmt]
        );
    }

    #[test]
    fn test_parse_compound_statements() {
        let rules = statement_rules(indoc! {"
            int fib(int n):
                if n < 2: return n
                return fib(n - 1) + fib(n - 2)

            while true:
                from 1 to 10 by 2:
                    break
            if a: x = 1
            elif b: x = 2
            else: x = 3
        "});
        assert_eq!(rules, vec![Rule::function_decl, Rule::while_stmt, Rule::if_stmt]);
    }

    #[test]
    fn test_parse_empty_program() {
        assert!(statement_rules("").is_empty());
        assert!(statement_rules("// nothing here\n\n").is_empty());
    }

    #[test]
    fn test_keywords_are_not_identifiers() {
        let preprocessed = preprocess("int while = 1\n");
        assert!(parse_tree(&preprocessed).is_err());

        // A keyword prefix is still a valid identifier
        assert_eq!(statement_rules("int whileLoop = 1\n"), vec![Rule::var_decl]);
    }

    #[test]
    fn test_syntax_error_location_is_in_original_source() {
        let preprocessed = preprocess(indoc! {"
            while x:
                y = = 2
        "});
        match parse_tree(&preprocessed) {
            Err(ParseError::Syntax { location, message }) => {
                assert_eq!(location.filename, "test.casper");
                assert_eq!(location.line, 2);
                assert_eq!(location.column, 9);
                assert!(!message.is_empty());
            }
            other => panic!("Expected syntax error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_stray_indentation_is_a_syntax_error() {
        let preprocessed = preprocess("x = 1\n    y = 2\n");
        assert!(matches!(
            parse_tree(&preprocessed),
            Err(ParseError::Syntax { .. })
        ));
    }

    #[test]
    fn test_conditional_needs_three_operands() {
        let preprocessed = preprocess("x = a ? b\n");
        assert!(matches!(
            parse_tree(&preprocessed),
            Err(ParseError::Syntax { .. })
        ));
    }

    #[test]
    fn test_numeric_literal_forms() {
        let preprocessed = preprocess("x = 1e3\ny = 1.5E-2\nz = 2e+1\nw = 0.25\n");
        assert!(parse_tree(&preprocessed).is_ok());
    }

    #[test]
    fn test_syntax_error_converts_to_compiler_error() {
        let preprocessed = preprocess("x = \n");
        let err: casper_common::CompilerError = match parse_tree(&preprocessed) {
            Err(err) => err.into(),
            Ok(_) => panic!("Expected syntax error"),
        };
        assert_eq!(err.kind(), casper_common::ErrorKind::Syntax);
    }
}
