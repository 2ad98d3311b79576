//! The runtime linked against a compiled program. It calls the program's
//! `scheme_entry` and prints the value it returns.
use miette::IntoDiagnostic;
use pasquim::{entry, Word};

extern "C" {
    // The \x01 keeps LLVM from adding a leading underscore on targets that
    // mangle C symbols, the compiler emits the bare name.
    #[link_name = "\x01scheme_entry"]
    fn scheme_entry() -> libc::intptr_t;
}

fn main() -> miette::Result<()> {
    // Install the panic handler.
    bupropion::install(bupropion::BupropionHandlerOpts::new).into_diagnostic()?;
    env_logger::init();

    // Command line arguments are accepted and ignored.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    entry::run(|| Word(unsafe { scheme_entry() }), &mut out)?;

    Ok(())
}
