//! The example program, typed by hand.
//!
//! ```text
//! 1  fun p123(x, f) {
//! 2      var a = 123;
//! 3      return f(x, a);
//! 4  }
//! 5  fun add(x, y) {
//! 6      return x + y;
//! 7  }
//! 8  print p123(20000, add);
//! 9  print p123("str", add);
//! ```
//!
//! Each call site is a function type built from the argument types and a
//! fresh result variable. The result variable of a call inside a function
//! body is bound to the function's own result variable, since nothing
//! unifies results. Top-level call sites use instantiated copies of the
//! function types so the two `print` lines bind independently.

use mvp_types::{Context, FilePos, Idx, InvariantError, UnifyError};

/// One checked definition or call site.
#[derive(Clone, Debug)]
pub struct Step {
    /// Label shown in the report.
    pub name: &'static str,
    /// The function type the step checked.
    pub ty: Idx,
    pub errors: Vec<UnifyError>,
}

/// Everything produced by checking the example program.
#[derive(Debug)]
pub struct ProgramReport {
    pub ctx: Context,
    pub steps: Vec<Step>,
}

impl ProgramReport {
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.name == name)
    }

    pub fn error_count(&self) -> usize {
        self.steps.iter().map(|step| step.errors.len()).sum()
    }
}

fn at(line: u32, token: &str) -> FilePos {
    FilePos::new(line, token)
}

/// Type the example program.
///
/// Fails only if the hand-written bindings break a variable invariant.
#[tracing::instrument(level = "debug")]
pub fn check_example() -> Result<ProgramReport, InvariantError> {
    let mut ctx = Context::new();
    let mut steps = Vec::with_capacity(4);

    // Builtins
    let builtin = FilePos::builtin();
    let int = ctx.int(builtin.clone());
    let str_ = ctx.str(builtin.clone());
    let plus_int = ctx.func(builtin.clone(), &[int, int], int);
    let plus_str = ctx.func(builtin.clone(), &[str_, str_], str_);
    let plus = ctx.union(builtin, &[plus_int, plus_str]);

    // fun p123(x, f)
    let p123_x = ctx.new_ref(at(1, "x"), None);
    let p123_f = ctx.new_ref(at(1, "f"), None);
    let p123_ret = ctx.new_ref(at(1, "p123"), None);
    let p123 = ctx.func(at(1, "p123(x, f)"), &[p123_x, p123_f], p123_ret);

    // var a = 123;
    let p123_a = ctx.new_ref(at(2, "a"), None);
    let lit_123 = ctx.int(at(2, "123"));
    ctx.bind(p123_a, lit_123)?;

    // return f(x, a);
    let f_arg_x = ctx.new_ref(at(3, "x"), None);
    let f_arg_a = ctx.new_ref(at(3, "a"), None);
    let f_ret = ctx.new_ref(at(3, "f"), None);
    let f_call = ctx.func(at(3, "f(x, a)"), &[f_arg_x, f_arg_a], f_ret);
    ctx.bind(f_ret, p123_ret)?;
    let unifier = ctx.unify(f_call, p123_f);
    steps.push(Step {
        name: "p123",
        ty: p123,
        errors: unifier.errors().to_vec(),
    });

    // fun add(x, y)
    let add_x = ctx.new_ref(at(5, "x"), None);
    let add_y = ctx.new_ref(at(5, "y"), None);
    let add_ret = ctx.new_ref(at(5, "add"), None);
    let add = ctx.func(at(5, "add(x, y)"), &[add_x, add_y], add_ret);

    // return x + y;
    let plus_x = ctx.new_ref(at(6, "x"), None);
    let plus_y = ctx.new_ref(at(6, "y"), None);
    let plus_ret = ctx.new_ref(at(6, "+"), None);
    let plus_call = ctx.func(at(6, "x + y"), &[plus_x, plus_y], plus_ret);
    ctx.bind(plus_ret, add_ret)?;
    let plus_here = ctx.copy(plus, Some(at(6, "+")));
    let unifier = ctx.unify(plus_call, plus_here);
    steps.push(Step {
        name: "add",
        ty: add,
        errors: unifier.errors().to_vec(),
    });

    // print p123(20000, add);
    let lit_20000 = ctx.int(at(8, "20000"));
    let add_here = ctx.copy(add, Some(at(8, "add")));
    let p123_here = ctx.copy(p123, Some(at(8, "p123")));
    let call_ret = ctx.new_ref(at(8, "p123"), None);
    let call = ctx.func(at(8, "p123(20000, add)"), &[lit_20000, add_here], call_ret);
    let unifier = ctx.unify(p123_here, call);
    steps.push(Step {
        name: "print #1",
        ty: p123_here,
        errors: unifier.errors().to_vec(),
    });

    // print p123("str", add);
    let lit_str = ctx.str(at(9, "\"str\""));
    let add_here = ctx.copy(add, Some(at(9, "add")));
    let p123_here = ctx.copy(p123, Some(at(9, "p123")));
    let call_ret = ctx.new_ref(at(9, "p123"), None);
    let call = ctx.func(at(9, "p123(\"str\", add)"), &[lit_str, add_here], call_ret);
    let unifier = ctx.unify(call, p123_here);
    steps.push(Step {
        name: "print #2",
        ty: p123_here,
        errors: unifier.errors().to_vec(),
    });

    tracing::debug!(refs = ctx.ref_count(), nodes = ctx.pool().len(), "example checked");
    Ok(ProgramReport { ctx, steps })
}
