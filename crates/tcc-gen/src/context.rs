//! The emitter's per-compile mutable state.

use indexmap::{IndexMap, IndexSet};
use tcc_util::{Error, Result, Stage};

/// Selects the lowering strategy for `DIV`.
///
/// Defaults to [`DivisionMode::Signed`] — see DESIGN.md's Open Question
/// Decisions for why the unsigned reading was rejected as the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DivisionMode {
    /// `cqo` (sign-extend rax into rdx) then `idiv`.
    #[default]
    Signed,
    /// `xor rdx, rdx` (zero-extend) then `div`.
    Unsigned,
}

/// Compile-time choices the emitter makes where `spec.md` §9 left an open
/// question. Each field defaults to the decision recorded in DESIGN.md.
#[derive(Clone, Copy, Debug)]
pub struct EmitOptions {
    /// Lowering strategy for `DIV`.
    pub division: DivisionMode,
    /// If `true` (the default), `LOOP`'s counter must already be declared
    /// by an earlier `VAR`; using an undeclared one is a semantic error
    /// rather than an implicit declaration, unlike `FOR`'s counter.
    pub loop_requires_declared_counter: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            division: DivisionMode::Signed,
            loop_requires_declared_counter: true,
        }
    }
}

/// Which text buffer new instructions/labels are appended to.
///
/// Function bodies are emitted after the program epilogue (`spec.md`
/// §4.3.7), so [`EmitContext::emit_func_def`] temporarily redirects here
/// while it walks a function's statements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextTarget {
    Main,
    Functions,
}

/// The mutable state threaded through one `emit` call.
///
/// Never a true global (`spec.md` §9 "Global mutable state") — a fresh
/// context is built per call, so repeated compiles of the same program
/// produce byte-identical output.
pub(crate) struct EmitContext {
    data: String,
    bss: String,
    main_text: String,
    functions_text: String,
    target: TextTarget,
    label_counter: u32,
    /// Declared variable name -> its initializer, `None` for `.bss`-only.
    /// An `IndexMap` keeps `.data`/`.bss` emission in first-declaration
    /// order, matching `spec.md` §5's determinism invariant.
    declared_vars: IndexMap<String, Option<i64>>,
    defined_functions: IndexSet<String>,
    pub(crate) used_print: bool,
    pub(crate) used_input: bool,
    pub(crate) options: EmitOptions,
}

impl EmitContext {
    pub(crate) fn new(options: EmitOptions) -> Self {
        Self {
            data: String::new(),
            bss: String::new(),
            main_text: String::new(),
            functions_text: String::new(),
            target: TextTarget::Main,
            label_counter: 0,
            declared_vars: IndexMap::new(),
            defined_functions: IndexSet::new(),
            used_print: false,
            used_input: false,
            options,
        }
    }

    /// Returns the next unique label suffix, advancing the counter.
    ///
    /// Called exactly once per block construct (`spec.md` §4.3.6's "the
    /// counter is advanced once per block construct") — a construct with a
    /// paired label (`while_start_N`/`while_end_N`, `for_start_N`/
    /// `for_end_N`, ...) calls this once and formats both labels from the
    /// same `id`, rather than calling it once per label.
    pub(crate) fn next_label_id(&mut self) -> u32 {
        let id = self.label_counter;
        self.label_counter += 1;
        id
    }

    /// Appends one already-formatted instruction line to the current
    /// target buffer, indented to match the teacher's generated-assembly
    /// convention.
    pub(crate) fn line(&mut self, instruction: &str) {
        let buf = match self.target {
            TextTarget::Main => &mut self.main_text,
            TextTarget::Functions => &mut self.functions_text,
        };
        buf.push_str("    ");
        buf.push_str(instruction);
        buf.push('\n');
    }

    /// Appends a label definition (unindented) to the current target
    /// buffer.
    pub(crate) fn label(&mut self, name: &str) {
        let buf = match self.target {
            TextTarget::Main => &mut self.main_text,
            TextTarget::Functions => &mut self.functions_text,
        };
        buf.push_str(name);
        buf.push_str(":\n");
    }

    /// Runs `body` with new instructions/labels redirected into the
    /// functions buffer, restoring the previous target afterward.
    pub(crate) fn in_functions_buffer(&mut self, body: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        let previous = self.target;
        self.target = TextTarget::Functions;
        let result = body(self);
        self.target = previous;
        result
    }

    pub(crate) fn is_declared(&self, name: &str) -> bool {
        self.declared_vars.contains_key(name)
    }

    pub(crate) fn mark_function_defined(&mut self, name: &str) {
        self.defined_functions.insert(name.to_string());
    }

    /// Registers `name` as a declared variable, appending its `.data`/
    /// `.bss` entry the first time it is seen.
    ///
    /// A redeclaration with the same initializer is a silent no-op
    /// (`spec.md` §4.3.2 "idempotently registered"); a redeclaration with a
    /// *different* initializer is a semantic error.
    pub(crate) fn declare_var(&mut self, name: &str, init: Option<i64>) -> Result<()> {
        if let Some(existing) = self.declared_vars.get(name) {
            if *existing == init {
                return Ok(());
            }
            return Err(Error::new(
                Stage::Semantic,
                0,
                0,
                format!(
                    "variable '{name}' redeclared with a conflicting initializer \
                     (was {existing:?}, now {init:?})"
                ),
            ));
        }
        match init {
            Some(v) => self.data.push_str(&format!("{name} dq {v}\n")),
            None => self.bss.push_str(&format!("{name} resq 1\n")),
        }
        self.declared_vars.insert(name.to_string(), init);
        Ok(())
    }

    /// Declares `name` in `.bss` with no initializer if it is not already
    /// declared. Used for `FOR`'s implicitly-declared counter.
    pub(crate) fn declare_implicit_bss(&mut self, name: &str) {
        if !self.is_declared(name) {
            self.bss.push_str(&format!("{name} resq 1\n"));
            self.declared_vars.insert(name.to_string(), None);
        }
    }

    /// Assembles the final NASM source: `.data`, `.bss`, `.text` (program
    /// body + epilogue), user function bodies, then I/O helpers, in that
    /// order (`spec.md` §4.3).
    pub(crate) fn finish(self) -> String {
        let mut out = String::new();

        let mut data = self.data;
        if self.used_print {
            data.push_str("newline db 10\n");
        }
        if !data.is_empty() {
            out.push_str("section .data\n");
            out.push_str(&data);
        }

        let mut bss = self.bss;
        if self.used_print {
            bss.push_str("digit_buffer resb 32\n");
        }
        if self.used_input {
            bss.push_str("input_buffer resb 32\n");
        }
        if !bss.is_empty() {
            out.push_str("section .bss\n");
            out.push_str(&bss);
        }

        out.push_str("section .text\n");
        out.push_str("    global _start\n");
        out.push_str("_start:\n");
        out.push_str(&self.main_text);

        if !self.functions_text.is_empty() {
            out.push_str(&self.functions_text);
        }

        if self.used_print {
            out.push_str(crate::io::PRINT_INT_HELPER);
        }
        if self.used_input {
            out.push_str(crate::io::READ_INT_HELPER);
        }

        out
    }
}
