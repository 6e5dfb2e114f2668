use std::sync::OnceLock;

/// The program name used to prefix error output, set once at startup.
///
/// The original tool this was ported from exposes `progname` as a writable
/// global that any function could read or reassign. Here it is an immutable
/// value: the binary sets it once via [`init`] before doing anything else,
/// and the library only ever reads it through [`get`].
static PROGNAME: OnceLock<String> = OnceLock::new();

/// Set the program name. Calling this more than once is a no-op after the
/// first call.
pub fn init(name: &str) {
    let _ = PROGNAME.set(name.to_string());
}

/// Get the program name, or `"sslkit"` if [`init`] was never called.
pub fn get() -> &'static str {
    PROGNAME.get().map(String::as_str).unwrap_or("sslkit")
}

/// Print `error` to stderr prefixed with the program name, as
/// `<progname>: <error>`.
pub fn report(error: &dyn std::fmt::Display) {
    eprintln!("{}: {}", get(), error);
}
