//! study-helper: CLI for tracking self-study courses and quiz progress
//!
//! Courses live in a local store with two lists: in progress and completed.
//! A course is created with day/quiz/question bounds, accumulates quiz
//! completions, and moves to the completed list when finished.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use study_helper::course::CourseFields;

mod commands;

#[derive(Parser)]
#[command(name = "study-helper")]
#[command(about = "CLI for tracking self-study courses and quiz progress", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a course, or overwrite the one marked by `edit`
    Add {
        /// Course name
        name: String,

        /// Days to complete (1-365)
        #[arg(short = 'd', long)]
        days: String,

        /// Quizzes per day (1-5)
        #[arg(short = 'q', long)]
        quizzes_per_day: String,

        /// Questions per quiz (1-50)
        #[arg(long)]
        questions_per_quiz: String,

        /// Additional info (truncated at 500 characters)
        #[arg(short, long, default_value = "")]
        info: String,
    },

    /// Update a course, or mark it as the target of the next `add`
    Edit {
        /// Course position as shown by `list` (1-based)
        position: Option<usize>,

        /// Stable course id - use instead of a position (see `list --with-id`)
        #[arg(long, conflicts_with = "position")]
        id: Option<String>,

        /// New course name
        #[arg(long)]
        name: Option<String>,

        /// New days to complete (1-365)
        #[arg(short = 'd', long)]
        days: Option<String>,

        /// New quizzes per day (1-5)
        #[arg(short = 'q', long)]
        quizzes_per_day: Option<String>,

        /// New questions per quiz (1-50)
        #[arg(long)]
        questions_per_quiz: Option<String>,

        /// New additional info (truncated at 500 characters)
        #[arg(short, long)]
        info: Option<String>,
    },

    /// Record a completed quiz for a course
    Quiz {
        /// Course position as shown by `list` (1-based)
        position: Option<usize>,

        /// Stable course id - use instead of a position
        #[arg(long, conflicts_with = "position")]
        id: Option<String>,
    },

    /// Move a course to the completed list
    Complete {
        /// Course position as shown by `list` (1-based)
        position: Option<usize>,

        /// Stable course id - use instead of a position
        #[arg(long, conflicts_with = "position")]
        id: Option<String>,
    },

    /// Delete an in-progress course
    Delete {
        /// Course position as shown by `list` (1-based)
        position: Option<usize>,

        /// Stable course id - use instead of a position
        #[arg(long, conflicts_with = "position")]
        id: Option<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List tracked courses
    List {
        /// Show completed courses instead of in-progress ones
        #[arg(long, conflicts_with = "all")]
        completed: bool,

        /// Show both lists
        #[arg(long)]
        all: bool,

        /// Show the stable course id for each row (use with --id)
        #[arg(long)]
        with_id: bool,

        /// Sort by: created, name, progress (default: created)
        #[arg(long, short, default_value = "created")]
        sort: String,

        /// Reverse sort order
        #[arg(long, short)]
        reverse: bool,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show aggregate course statistics
    Stats,

    /// Export courses to a readable format
    Export {
        /// Output format: md or json (default: md)
        #[arg(long, short, default_value = "md")]
        format: String,

        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<String>,

        /// Export completed courses instead of in-progress ones
        #[arg(long, conflicts_with = "all")]
        completed: bool,

        /// Export both lists
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            name,
            days,
            quizzes_per_day,
            questions_per_quiz,
            info,
        } => {
            let fields = CourseFields {
                name,
                days_to_complete: days,
                quizzes_per_day,
                questions_per_quiz,
                additional_info: info,
            };
            commands::add::execute(fields)?;
        }

        Commands::Edit {
            position,
            id,
            name,
            days,
            quizzes_per_day,
            questions_per_quiz,
            info,
        } => {
            let fields = commands::edit::EditFields {
                name,
                days_to_complete: days,
                quizzes_per_day,
                questions_per_quiz,
                additional_info: info,
            };
            commands::edit::execute(position, id.as_deref(), fields)?;
        }

        Commands::Quiz { position, id } => {
            commands::quiz::execute(position, id.as_deref())?;
        }

        Commands::Complete { position, id } => {
            commands::complete::execute(position, id.as_deref())?;
        }

        Commands::Delete { position, id, yes } => {
            commands::delete::execute(position, id.as_deref(), yes)?;
        }

        Commands::List {
            completed,
            all,
            with_id,
            sort,
            reverse,
            limit,
        } => {
            let options = commands::list::ListOptions {
                completed,
                all,
                with_id,
                sort,
                reverse,
                limit,
            };
            let output = commands::list::execute(options)?;
            println!("{}", output);
        }

        Commands::Stats => {
            let stats = commands::stats::execute()?;
            println!("{}", commands::stats::format_stats(&stats));
        }

        Commands::Export {
            format,
            output,
            completed,
            all,
        } => {
            let format = commands::export::ExportFormat::from_str(&format)
                .context("Invalid format. Use 'md' or 'json'")?;
            let options = commands::export::ExportOptions { completed, all };
            commands::export::execute(format, output.as_deref(), options)?;
        }
    }

    Ok(())
}
