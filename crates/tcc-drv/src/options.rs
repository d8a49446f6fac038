//! Caller-facing compile configuration.

use tcc_gen::{DivisionMode, EmitOptions};

/// Options a caller embedding this crate can use to pick between the two
/// defensible readings `spec.md` §9 left open. Both fields default to the
/// decision recorded in DESIGN.md.
#[derive(Clone, Copy, Debug)]
pub struct CompileOptions {
    /// Lowering strategy for `DIV` — signed (`cqo`/`idiv`, default) or
    /// unsigned (`xor rdx,rdx`/`div`).
    pub division: DivisionMode,
    /// If `true` (the default), a `LOOP` counter must already be declared
    /// by an earlier `VAR`.
    pub loop_requires_declared_counter: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        let defaults = EmitOptions::default();
        Self {
            division: defaults.division,
            loop_requires_declared_counter: defaults.loop_requires_declared_counter,
        }
    }
}

impl CompileOptions {
    pub(crate) fn to_emit_options(self) -> EmitOptions {
        EmitOptions {
            division: self.division,
            loop_requires_declared_counter: self.loop_requires_declared_counter,
        }
    }
}
