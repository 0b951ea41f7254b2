use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgGroup, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.try_parse(itr).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse<I, T>(&mut self, itr: I) -> clap::error::Result<Arguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(itr)?;
        Ok(Self::extract_arguments(&matches))
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_text_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_show_codes_argument(command);
        Self::register_sources_group(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_text_argument(command: Command) -> Command {
        command.arg(Self::create_text_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_show_codes_argument(command: Command) -> Command {
        command.arg(Self::create_show_codes_argument())
    }

    fn register_sources_group(command: Command) -> Command {
        command.group(
            ArgGroup::new("sources")
                .args(["input_files", "text"])
                .required(true)
                .multiple(true),
        )
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths of files to compress, every byte is one symbol")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .num_args(1..)
    }

    fn create_text_argument() -> Arg {
        arg!(text: -s --text <TEXT> "Text to compress, every character is one symbol")
            .action(ArgAction::Append)
            .required(false)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_show_codes_argument() -> Arg {
        arg!(show_codes: -c --show_codes "Print the code of every symbol")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_files: Self::extract_input_files_argument(matches),
            texts: Self::extract_text_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            show_codes: Self::extract_show_codes_argument(matches),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_text_argument(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("text")
            .map(|texts| texts.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_show_codes_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_codes")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::CLIParser;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_files_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_files_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "first.txt", "second.bin"]);
        let input_files = CLIParser::extract_input_files_argument(&matches);
        assert_eq!(input_files.len(), 2);
        assert_eq!(input_files[0].file_name().unwrap(), "first.txt");
        assert_eq!(input_files[1].file_name().unwrap(), "second.bin");
    }

    #[test]
    fn parse_repeated_text_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_text_argument(command);
        let matches = command.get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--text",
            "AABBBCCCC",
            "-s",
            "AAAA",
        ]);
        let texts = CLIParser::extract_text_argument(&matches);
        assert_eq!(texts, vec!["AABBBCCCC".to_string(), "AAAA".to_string()]);
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        let expected = 5;
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_number_of_threads_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-t", "many"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for threads not detected");
        }
    }

    #[test]
    fn parse_show_codes_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_show_codes_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-c"]);
        assert!(CLIParser::extract_show_codes_argument(&matches));

        let command = CLIParser::register_show_codes_argument(Command::new("test"));
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert!(!CLIParser::extract_show_codes_argument(&matches));
    }

    #[test]
    fn parse_without_any_source_fails() {
        let mut cli_parser = CLIParser::default();
        let result = cli_parser.try_parse(vec![PROGRAM_NAME_ARGUMENT, "-t", "2"]);
        match result {
            Err(error) => assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument),
            Ok(_) => panic!("Missing input not detected"),
        }
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.txt";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, &input_file_path, "-t", "8"]);
        assert_eq!(
            arguments.input_files[0].file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert!(arguments.texts.is_empty(), "texts do not match");
        assert!(!arguments.show_codes, "show_codes does not match");
        assert_eq!(
            arguments.number_of_threads, 8,
            "number_of_threads does not match"
        );
    }
}
