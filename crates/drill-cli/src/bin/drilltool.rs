use clap::{Parser, Subcommand};

use drill_cli::commands::{sample_ops, settings_ops, simulate, snippet_ops};

#[derive(Parser)]
#[command(name = "drilltool", about = "Guided typing engine diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a keystroke script against a reference file
    Simulate {
        /// Path to the reference text file
        reference_file: String,
        /// Keystroke script (`\n` Enter, `\b` Backspace, `\\` backslash)
        script: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit a snippet store file
    Snippets {
        #[command(subcommand)]
        command: SnippetsCommand,
    },

    /// Print a built-in sample, or list supported languages
    Samples {
        /// Language of the sample to print
        language: Option<String>,
    },

    /// Settings file utilities
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand)]
enum SnippetsCommand {
    /// List snippets and folders
    List {
        /// Path to the snippet store JSON file
        store_file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add a snippet from a code file
    Add {
        /// Path to the snippet store JSON file
        store_file: String,
        /// Snippet name
        name: String,
        /// Path to the file holding the snippet code
        code_file: String,
        /// Snippet language
        #[arg(long, default_value = "javascript")]
        language: String,
        /// Folder id to file the snippet under
        #[arg(long)]
        folder: Option<String>,
    },
    /// Remove a snippet by id
    Remove {
        /// Path to the snippet store JSON file
        store_file: String,
        /// Snippet id
        id: String,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the embedded default settings TOML
    Export,
    /// Parse and validate a settings file
    Validate {
        /// Path to the settings TOML file
        file: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            reference_file,
            script,
            json,
        } => simulate::run(&reference_file, &script, json),

        Command::Snippets { command } => match command {
            SnippetsCommand::List { store_file, json } => snippet_ops::list(&store_file, json),
            SnippetsCommand::Add {
                store_file,
                name,
                code_file,
                language,
                folder,
            } => snippet_ops::add(&store_file, &name, &language, &code_file, folder),
            SnippetsCommand::Remove { store_file, id } => snippet_ops::remove(&store_file, &id),
        },

        Command::Samples { language } => match language {
            Some(language) => sample_ops::show(&language),
            None => sample_ops::list(),
        },

        Command::Settings { command } => match command {
            SettingsCommand::Export => settings_ops::export(),
            SettingsCommand::Validate { file } => settings_ops::validate(&file),
        },
    }
}
