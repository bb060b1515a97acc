//! Unit tests for derive attribute parsing.

mod literals;
