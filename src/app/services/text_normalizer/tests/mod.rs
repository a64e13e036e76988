//! Tests for the text normalization parsers
