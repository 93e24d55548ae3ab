//! Type formatting for debugging and error messages.

use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool, RefId, TypeKind, UnifyError, VarState};

impl Pool {
    /// Format a type as a human-readable string.
    ///
    /// Unbound variables print as `$id`. Bound variables print as
    /// `$id=<value>` so the binding is visible without dereferencing.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        let mut active = Vec::new();
        self.format_inner(idx, buf, &mut active);
    }

    /// `active` holds the variables being printed on the current path, so a
    /// malformed cycle of links prints once instead of forever.
    fn format_inner(&self, idx: Idx, buf: &mut String, active: &mut Vec<RefId>) {
        ensure_sufficient_stack(|| match self.kind(idx) {
            TypeKind::Nil => buf.push_str("nil"),
            TypeKind::Int => buf.push_str("int"),
            TypeKind::Str => buf.push_str("str"),

            TypeKind::Func { params, result } => {
                buf.push('(');
                self.format_list(params, ", ", buf, active);
                buf.push_str(") -> ");
                self.format_inner(*result, buf, active);
            }

            TypeKind::Union { alternatives } => {
                buf.push('(');
                self.format_list(alternatives, " | ", buf, active);
                buf.push(')');
            }

            TypeKind::Ref(id) => {
                buf.push_str(&id.to_string());
                let VarState::Link { target } = self.var_state(*id) else {
                    return;
                };
                buf.push('=');
                if active.contains(id) {
                    buf.push_str("...");
                    return;
                }
                active.push(*id);
                let wrap = matches!(self.kind(*target), TypeKind::Func { .. });
                if wrap {
                    buf.push('(');
                }
                self.format_inner(*target, buf, active);
                if wrap {
                    buf.push(')');
                }
                active.pop();
            }
        });
    }

    fn format_list(&self, elems: &[Idx], sep: &str, buf: &mut String, active: &mut Vec<RefId>) {
        for (i, &elem) in elems.iter().enumerate() {
            if i > 0 {
                buf.push_str(sep);
            }
            self.format_inner(elem, buf, active);
        }
    }

    /// Format a unification error with both operands and their positions.
    pub fn format_error(&self, error: &UnifyError) -> String {
        format!(
            "{}: {} at {} vs {} at {}",
            error.kind,
            self.format_type(error.left),
            self.pos(error.left),
            self.format_type(error.right),
            self.pos(error.right),
        )
    }

    /// Format the provenance trail of a node, newest first.
    ///
    /// Each step prints as `<type> @ <pos>`, joined by ` <- `.
    pub fn format_provenance(&self, idx: Idx) -> String {
        let mut buf = String::new();
        for (i, step) in std::iter::once(idx).chain(self.provenance(idx)).enumerate() {
            if i > 0 {
                buf.push_str(" <- ");
            }
            self.format_type_into(step, &mut buf);
            buf.push_str(" @ ");
            buf.push_str(&self.pos(step).to_string());
        }
        buf
    }
}
