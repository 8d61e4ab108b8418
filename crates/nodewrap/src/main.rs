use std::process;

fn main() {
    nodewrap::logging::init();

    let code = match nodewrap::try_run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("nodewrap: {e:#}");
            nodewrap::LAUNCH_FAILURE
        }
    };
    process::exit(code);
}
