//! Course Tracker - Main Entry Point
//!
//! Thin command-line front end over the `course_tracker` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use course_tracker::Dashboard;
use course_tracker::config::Config;
use course_tracker::handlers::course::{CourseEditForm, CourseForm};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Course Tracker - track courses, learning resources and study sessions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the data files (overrides the config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a course
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        platform: String,
        #[arg(long)]
        instructor: String,
        /// Due date YYYY-MM-DD
        #[arg(long, default_value = "")]
        due_date: String,
        #[arg(long, default_value = "")]
        url: String,
    },
    /// List courses
    List,
    /// Show a course with its resources
    Show { id: String },
    /// Edit course details
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        instructor: Option<String>,
        /// Due date YYYY-MM-DD, empty to clear
        #[arg(long)]
        due_date: Option<String>,
        /// Course URL, empty to clear
        #[arg(long)]
        url: Option<String>,
    },
    /// Set course progress (0-100)
    Progress {
        id: String,
        #[arg(allow_negative_numbers = true)]
        progress: i64,
    },
    /// Delete a course
    Delete { id: String },
    /// Attach a resource to a course
    ResourceAdd {
        course_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        /// article, video, book or other
        #[arg(long = "type", default_value = "article")]
        resource_type: String,
    },
    /// Remove a resource from a course
    ResourceRemove { course_id: String, resource_id: String },
    /// Plan a study session
    SessionAdd {
        course_id: String,
        /// Date YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Minutes
        #[arg(long, default_value = "60")]
        duration: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a study session
    SessionRemove { id: String },
    /// Sessions on a date (default: today)
    Sessions { date: Option<String> },
    /// Show a month of the study calendar
    Calendar {
        /// Month YYYY-MM (default: current)
        month: Option<String>,
        /// Selected day YYYY-MM-DD (default: today)
        #[arg(long)]
        select: Option<String>,
    },
    /// Progress overview
    Stats,
    /// Interactive session; deletions can be undone until it ends
    Shell,
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Core(Command),
    /// List deleted courses
    Trash,
    /// Restore a deleted course
    Restore { id: String },
    /// Permanently drop deleted courses
    EmptyTrash,
    /// Restore the last removed resource
    UndoResource,
    /// Leave the shell
    Exit,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = args.command else {
        // No subcommand provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    };

    let data_dir = args.data_dir.unwrap_or(config.data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "opening dashboard");
    let mut dashboard = Dashboard::open(&data_dir, config.week_start);

    let reply = run(&mut dashboard, command)?;
    println!("{}", reply.trim_end());
    Ok(())
}

fn run(dashboard: &mut Dashboard, command: Command) -> Result<String> {
    match command {
        Command::Add {
            title,
            description,
            category,
            platform,
            instructor,
            due_date,
            url,
        } => dashboard.add_course(CourseForm {
            title,
            description,
            category,
            platform,
            instructor,
            due_date,
            url,
        }),
        Command::List => Ok(dashboard.list_courses()),
        Command::Show { id } => dashboard.show_course(&id),
        Command::Update {
            id,
            title,
            description,
            category,
            platform,
            instructor,
            due_date,
            url,
        } => dashboard.update_course(
            &id,
            CourseEditForm {
                title,
                description,
                category,
                platform,
                instructor,
                due_date,
                url,
            },
        ),
        Command::Progress { id, progress } => dashboard.set_progress(&id, progress),
        Command::Delete { id } => dashboard.delete_course(&id),
        Command::ResourceAdd {
            course_id,
            title,
            url,
            resource_type,
        } => dashboard.add_resource(&course_id, &title, &url, &resource_type),
        Command::ResourceRemove {
            course_id,
            resource_id,
        } => dashboard.remove_resource(&course_id, &resource_id),
        Command::SessionAdd {
            course_id,
            date,
            duration,
            notes,
        } => dashboard.add_session(&course_id, &date, &duration, notes),
        Command::SessionRemove { id } => dashboard.remove_session(&id),
        Command::Sessions { date } => dashboard.sessions_on(date.as_deref()),
        Command::Calendar { month, select } => {
            dashboard.calendar(month.as_deref(), select.as_deref())
        }
        Command::Stats => Ok(dashboard.progress_summary()),
        Command::Shell => {
            shell(dashboard)?;
            Ok(String::new())
        }
    }
}

fn shell(dashboard: &mut Dashboard) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let words = split_words(&line);
        if words.is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                e.print().ok();
                continue;
            }
        };

        let reply = match parsed.command {
            ShellCommand::Exit => return Ok(()),
            ShellCommand::Core(Command::Shell) => Ok("Already in the shell".to_string()),
            ShellCommand::Core(command) => run(dashboard, command),
            ShellCommand::Trash => Ok(dashboard.list_trash()),
            ShellCommand::Restore { id } => dashboard.undo_delete_course(&id),
            ShellCommand::EmptyTrash => Ok(dashboard.empty_trash()),
            ShellCommand::UndoResource => dashboard.undo_remove_resource(),
        };

        match reply {
            Ok(text) => println!("{}", text.trim_end()),
            Err(e) => eprintln!("Error: {:#}", e),
        }
    }
}

/// Split a shell line on whitespace, keeping double-quoted runs together
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }

    words
}
