//! Type formatting.
//!
//! Two renderings:
//! - the canonical form (`Display`), used for comparison and fixtures:
//!   `!t0!t1.((t0 t1) -> (t0 (t0 t1)))`
//! - the stack form ([`Type::pretty`]), which flattens the cons cells of
//!   stack effects: `(t0 t1 -> t0 t0 t1)`

use std::fmt;

use hrank_stack::ensure_sufficient_stack;

use crate::{Type, TypeArray, REC_TAG};

impl Type {
    /// Format a type in canonical form into an existing buffer.
    pub fn format_into(&self, buf: &mut String) {
        match self {
            Type::Constant(name) | Type::Variable(name) => buf.push_str(name.as_str()),
            Type::Array(array) => array.format_into(buf),
        }
    }

    /// Stack-effect rendering; see the module docs.
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }

    fn pretty_into(&self, buf: &mut String) {
        ensure_sufficient_stack(|| match self {
            Type::Constant(name) | Type::Variable(name) => buf.push_str(name.as_str()),
            Type::Array(_) => {
                if let Some((input, output)) = self.as_function() {
                    buf.push('(');
                    input.pretty_stack_into(buf);
                    buf.push_str(" -> ");
                    output.pretty_stack_into(buf);
                    buf.push(')');
                } else if self.is_cons_cell() {
                    buf.push('[');
                    self.pretty_stack_into(buf);
                    buf.push(']');
                } else {
                    self.format_into(buf);
                }
            }
        });
    }

    /// Write `(a (b c))` as `a b c`.
    fn pretty_stack_into(&self, buf: &mut String) {
        let mut rest = self;
        loop {
            match rest.as_array().map(TypeArray::types) {
                Some([head, tail]) if rest.is_cons_cell() => {
                    head.pretty_into(buf);
                    buf.push(' ');
                    rest = tail;
                }
                _ => {
                    rest.pretty_into(buf);
                    return;
                }
            }
        }
    }

    fn is_cons_cell(&self) -> bool {
        match self.as_array() {
            Some(array) => {
                array.len() == 2
                    && !array.is_sum()
                    && !array.types()[0].is_constant_named(REC_TAG)
            }
            None => false,
        }
    }
}

impl TypeArray {
    /// Format in canonical form: `!p1!p2.(child child ...)`.
    pub fn format_into(&self, buf: &mut String) {
        ensure_sufficient_stack(|| {
            let params = self.type_parameter_names();
            if !params.is_empty() {
                for param in params {
                    buf.push('!');
                    buf.push_str(param.as_str());
                }
                buf.push('.');
            }
            buf.push('(');
            for (i, child) in self.types.iter().enumerate() {
                if i > 0 {
                    buf.push(' ');
                }
                child.format_into(buf);
            }
            buf.push(')');
        });
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Constant(name) | Type::Variable(name) => f.write_str(name.as_str()),
            Type::Array(array) => array.fmt(f),
        }
    }
}

impl fmt::Display for TypeArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.format_into(&mut buf);
        f.write_str(&buf)
    }
}

/// See [`Type::pretty`].
pub struct Pretty<'a>(&'a Type);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.0.pretty_into(&mut buf);
        f.write_str(&buf)
    }
}
