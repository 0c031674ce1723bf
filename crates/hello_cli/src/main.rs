/* 📖 # hello

No arguments are parsed; anything passed on the command line is ignored.
The greeting is the only thing written to stdout. Diagnostics go to stderr
and are filtered through `RUST_LOG` (default `warn`).

Exit code: 0 on every invocation. If stdout refuses the greeting, the error
is reported once on stderr and the process still exits successfully.
*/

use std::io;

use hello_base::init_tracing;

fn main() {
    if let Err(err) = init_tracing() {
        eprintln!("Warning: {}", err);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = hello_cli::run(&mut out) {
        eprintln!("Error: {}", err);
    }
}
