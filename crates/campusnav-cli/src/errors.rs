use campusnav_core::error::CampusError;
use campusnav_core::models::Building;
use console::style;
use std::fmt;
use std::path::Path;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Reference tables missing from the data directory
pub fn data_files_missing(data_dir: &Path, missing: &[&Path]) -> CliError {
    let files: Vec<String> = missing.iter().map(|p| format!("  {}", p.display())).collect();

    CliError::new("Reference data not found")
        .with_context(format!(
            "The building and route tables could not both be found.\n\nData directory: {}\nMissing:\n{}",
            data_dir.display(),
            files.join("\n")
        ))
        .with_suggestion("Point to the tables: campusnav --data-dir <DIR> ...")
        .with_suggestion("Or set CAMPUSNAV_DATA_DIR, or data_dir in campusnav.toml")
        .with_help("Run: campusnav --help")
}

/// Unknown building name, with close matches when there are any
pub fn building_not_found(name: &str, similar: &[&Building]) -> CliError {
    let mut error = CliError::new(format!("Building not found: {}", name))
        .with_context("Building names must match exactly, including case.");

    if !similar.is_empty() {
        let names: Vec<&str> = similar.iter().take(5).map(|b| b.name.as_str()).collect();
        error = error.with_suggestion(format!("Did you mean: {}", names.join(", ")));
    }

    error
        .with_suggestion(format!("Search by part of the name: campusnav search \"{}\"", name))
        .with_suggestion("List every building: campusnav buildings")
        .with_help("Run: campusnav route --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check campusnav.toml for syntax errors")
        .with_suggestion("Check CAMPUSNAV_* environment variables")
        .with_help("Run: campusnav config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let error = match error.downcast::<CliError>() {
        Ok(cli_error) => return cli_error,
        Err(other) => other,
    };

    if let Some(campus_error) = error.downcast_ref::<CampusError>() {
        return match campus_error {
            CampusError::ConfigInvalid { key, reason } => invalid_config(key, reason),
            CampusError::DataSource { table, path, reason } => {
                CliError::new(format!("Failed to load the {} table", table))
                    .with_context(format!("File: {}\n\nError: {}", path.display(), reason))
                    .with_suggestion("Check that the file is a CSV export with the expected columns")
            }
            CampusError::BuildingNotFound { name } => building_not_found(name, &[]),
            other => CliError::new(other.to_string()),
        };
    }

    let message = format!("{:#}", error);
    if message.contains("No such file or directory") {
        CliError::new("File not found")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check the file path and try again")
    } else if message.to_lowercase().contains("permission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check file permissions")
    } else {
        CliError::new(message)
    }
}
