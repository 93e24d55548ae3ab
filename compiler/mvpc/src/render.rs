//! Text report for a checked program.

use std::fmt;

use crate::ProgramReport;

/// What to include beyond types and errors.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    /// Print the `pred` chain of both operands of every error.
    pub provenance: bool,
}

/// Display adapter over a [`ProgramReport`].
pub struct Render<'a> {
    report: &'a ProgramReport,
    options: RenderOptions,
}

impl<'a> Render<'a> {
    pub fn new(report: &'a ProgramReport, options: RenderOptions) -> Self {
        Self { report, options }
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pool = self.report.ctx.pool();
        for step in &self.report.steps {
            writeln!(f, "{}: {}", step.name, pool.format_type(step.ty))?;
            if step.errors.is_empty() {
                writeln!(f, "{} errors: none", step.name)?;
                continue;
            }
            writeln!(f, "{} errors:", step.name)?;
            for error in &step.errors {
                writeln!(f, "  {}", pool.format_error(error))?;
                if self.options.provenance {
                    writeln!(f, "    left:  {}", pool.format_provenance(error.left))?;
                    writeln!(f, "    right: {}", pool.format_provenance(error.right))?;
                }
            }
        }
        Ok(())
    }
}
