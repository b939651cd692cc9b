use crate::cli::main_types::{
    Commands, ConfigCommands, EnvCommands, FilterCommands, FixtureCommands, TestsCommands,
};
use crate::core::services::config_service::ConfigService;
use crate::core::{environment, file_diff, fixtures, gtest, strings};
use crate::display::ReportDisplay;
use crate::error::{AppError, CliError};
use crate::storage::config::{Config, OutputFormat};
use crate::utils::logging::VerboseLogger;
use crate::utils::validation::validate_byte;
use std::path::PathBuf;

pub struct Dispatcher {
    config_service: ConfigService,
    config_path: Option<PathBuf>,
    logger: VerboseLogger,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config_service: ConfigService::new(config),
            config_path,
            logger: VerboseLogger::new(verbose),
        }
    }

    pub fn dispatch(&mut self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Split {
                text,
                pattern,
                json,
            } => {
                self.logger
                    .log(&format!("Splitting {:?} on {:?}", text, pattern));
                let fields = strings::split(&text, pattern.as_deref());
                println!("{}", ReportDisplay::for_stdout().render_fields(&fields, json)?);
                Ok(())
            }
            Commands::Join { separator, fields } => {
                self.logger
                    .log(&format!("Joining {} field(s)", fields.len()));
                println!("{}", strings::join(&fields, separator.as_deref()));
                Ok(())
            }
            Commands::Compare {
                left,
                right,
                max_differences,
                format,
            } => self.handle_compare(&left, &right, max_differences, format),
            Commands::Filter { command } => self.handle_filter_command(command),
            Commands::Env { command } => self.handle_env_command(command),
            Commands::Fixture { command } => self.handle_fixture_command(command),
            Commands::Tests { command } => self.handle_tests_command(command),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_compare(
        &self,
        left: &str,
        right: &str,
        max_differences: Option<usize>,
        format: Option<OutputFormat>,
    ) -> Result<(), AppError> {
        let max_differences =
            max_differences.unwrap_or_else(|| self.config_service.max_differences());
        let format = format.unwrap_or_else(|| self.config_service.output_format());
        self.logger.log(&format!(
            "Comparing '{}' with '{}' (max {} differences, {} output)",
            left,
            right,
            max_differences,
            format.as_str()
        ));

        let comparison = file_diff::compare(left, right, max_differences);
        println!(
            "{}",
            ReportDisplay::for_stdout().render_comparison(&comparison, format)?
        );

        if comparison.equal {
            Ok(())
        } else {
            Err(CliError::FilesDiffer {
                reason: comparison.reason,
            }
            .into())
        }
    }

    fn handle_filter_command(&self, command: FilterCommands) -> Result<(), AppError> {
        match command {
            FilterCommands::Split { filter } => {
                let (positive, negative) = gtest::split_filter(&filter);
                println!("positive: {}", positive);
                println!("negative: {}", negative);
                Ok(())
            }
            FilterCommands::Merge {
                positive,
                negative,
                existing,
            } => {
                println!(
                    "{}",
                    gtest::merge_filter(&positive, &negative, existing.as_deref())
                );
                Ok(())
            }
        }
    }

    fn handle_env_command(&self, command: EnvCommands) -> Result<(), AppError> {
        match command {
            EnvCommands::Get { name } => {
                println!("{}", environment::get_environment_variable(&name));
                Ok(())
            }
            EnvCommands::Info => {
                let bitness = if environment::is_process_64_bit() {
                    "64-bit"
                } else {
                    "32-bit"
                };
                let configuration = if environment::is_configuration_debug() {
                    "debug"
                } else {
                    "release"
                };
                let processor = if environment::is_processor_x64() {
                    "x64"
                } else if environment::is_processor_x86() {
                    "x86"
                } else {
                    std::env::consts::ARCH
                };
                let line_separator = environment::line_separator().escape_default();

                println!("Process: {}", bitness);
                println!("Configuration: {}", configuration);
                println!("Processor: {}", processor);
                println!("Line separator: {}", line_separator);
                Ok(())
            }
        }
    }

    fn handle_fixture_command(&self, command: FixtureCommands) -> Result<(), AppError> {
        match command {
            FixtureCommands::Create { path, size } => {
                match size {
                    Some(size) => fixtures::create_file(&path, size)?,
                    None => fixtures::create_text_file(&path)?,
                }
                println!("Created {}", path);
                Ok(())
            }
            FixtureCommands::Patch {
                path,
                offset,
                value,
            } => {
                let value = validate_byte(&value)?;
                fixtures::change_file_content(&path, offset, value)?;
                println!("Patched {} at offset {}", path, offset);
                Ok(())
            }
        }
    }

    fn handle_tests_command(&self, command: TestsCommands) -> Result<(), AppError> {
        match command {
            TestsCommands::List { executable } => {
                self.logger
                    .log(&format!("Listing tests of '{}'", executable));
                for test in gtest::get_test_list(&executable)? {
                    println!("{}", test);
                }
                Ok(())
            }
        }
    }

    fn handle_config_command(&mut self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                println!("Current Configuration:");
                println!("=====================");
                println!("max-differences: {}", self.config_service.max_differences());
                println!(
                    "output-format: {}",
                    self.config_service.output_format().as_str()
                );
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.logger.log(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));
                self.config_service.set_field(&key, &value)?;
                self.config_service.save_config(self.config_path.clone())?;
                println!("✅ {} set to {}", key, value);
                Ok(())
            }
        }
    }
}
