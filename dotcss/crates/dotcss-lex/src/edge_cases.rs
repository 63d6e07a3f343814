//! Edge case tests for dotcss-lex
