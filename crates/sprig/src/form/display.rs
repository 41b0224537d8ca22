//! Display and Debug implementations for Form

use std::fmt;

use super::Form;
use crate::printer::{print_form, PrintOptions};

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_form(self, PrintOptions::readable()))
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is the unescaped rendering, Debug reads back
        f.write_str(&print_form(self, PrintOptions::display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_readable() {
        assert_eq!(format!("{:?}", Form::string("a\"b")), r#""a\"b""#);
    }

    #[test]
    fn test_display_is_raw() {
        assert_eq!(Form::string("a\"b").to_string(), "a\"b");
        assert_eq!(Form::list(vec![Form::int(1), Form::keyword("k")]).to_string(), "(1 :k)");
    }
}
