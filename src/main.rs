use std::env::args_os;
use std::process::ExitCode;

use huffman_sim::{compress_sources, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match compress_sources(&arguments) {
        Ok(reports) => {
            for report in reports {
                println!("{}", report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Compression failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
