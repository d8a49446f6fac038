//! Virtual-to-physical register mapping.

/// Maps a virtual register `1..=8` to its physical x86-64 name.
///
/// # Panics
///
/// Panics if `n` is outside `1..=8`. This never happens on a program that
/// reached the emitter: `tcc-lex` only ever produces `Register` tokens for
/// `R1`..`R8` (see `lexer::identifier::register_index`), and `tcc-par`
/// copies the index through unchanged.
pub fn phys(n: u8) -> &'static str {
    match n {
        1 => "rax",
        2 => "rbx",
        3 => "rcx",
        4 => "rdx",
        5 => "rsi",
        6 => "rdi",
        7 => "r8",
        8 => "r9",
        other => panic!("virtual register out of range: R{other}"),
    }
}
