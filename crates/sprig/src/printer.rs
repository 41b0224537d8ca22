//! Printer: renders forms back to text

use crate::form::Form;
use crate::string_escape::encode_string;

/// How strings are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintOptions {
    /// Quote and escape strings so the output reads back as the same form
    pub print_readably: bool,
}

impl PrintOptions {
    /// Strings quoted and escaped.
    pub fn readable() -> Self {
        Self {
            print_readably: true,
        }
    }

    /// Strings printed as their raw decoded text.
    pub fn display() -> Self {
        Self {
            print_readably: false,
        }
    }
}

/// Render `form` as text.
///
/// ```
/// use sprig::printer::{print_form, PrintOptions};
/// use sprig::Form;
///
/// let form = Form::list(vec![Form::symbol("str"), Form::string("a\nb")]);
/// assert_eq!(print_form(&form, PrintOptions::readable()), r#"(str "a\nb")"#);
/// assert_eq!(print_form(&form, PrintOptions::display()), "(str a\nb)");
/// ```
pub fn print_form(form: &Form, options: PrintOptions) -> String {
    let mut out = String::new();
    write_form(&mut out, form, options);
    out
}

fn write_form(out: &mut String, form: &Form, options: PrintOptions) {
    match form {
        Form::Int { value, .. } => out.push_str(&value.to_string()),
        Form::Symbol { name, .. } => out.push_str(name),
        Form::Str { value, .. } => {
            if options.print_readably {
                out.push_str(&encode_string(value));
            } else {
                out.push_str(value);
            }
        }
        Form::Keyword { keyword, .. } => {
            out.push(':');
            out.push_str(keyword.name());
        }
        Form::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Form::List(seq) => write_members(out, '(', seq.members(), ')', options),
        Form::Vector(seq) => write_members(out, '[', seq.members(), ']', options),
        Form::HashMap(map) => {
            out.push('{');
            for (i, (key, value)) in map.entries().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_form(out, key, options);
                out.push(' ');
                write_form(out, value, options);
            }
            out.push('}');
        }
        Form::Builtin(func) => {
            out.push_str("#<builtin ");
            out.push_str(&func.name);
            out.push('>');
        }
    }
}

fn write_members(
    out: &mut String,
    open: char,
    members: &[Form],
    close: char,
    options: PrintOptions,
) {
    out.push(open);
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_form(out, member, options);
    }
    out.push(close);
}
