use std::process::ExitCode;

fn main() -> ExitCode {
    match katas::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(katas::errors::get_exit_code(&e))
        }
    }
}
