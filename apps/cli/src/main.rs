use std::process::ExitCode;

fn main() -> ExitCode {
    match katacant::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
