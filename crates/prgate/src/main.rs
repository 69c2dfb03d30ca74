//! Entrypoint.

fn main() {
    if let Err(err) = prgate::initialize_command_line() {
        prgate::report_failure(&err);
        std::process::exit(1);
    }
}
