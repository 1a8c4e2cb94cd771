//! Edge case tests for mlc-lex
