//! LearnBridge CLI - course catalog, progress tracking, and the training assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::Level;

use learnbridge_assistant::ConversationClient;
use learnbridge_catalog::Catalog;
use learnbridge_progress::ProgressTracker;
use learnbridge_storage::JsonFileStore;

#[derive(Parser)]
#[command(name = "learnbridge")]
#[command(about = "E-learning catalog and progress tracker", long_about = None)]
struct Cli {
    /// Storage directory for progress state
    #[arg(long, default_value = ".learnbridge")]
    data_dir: std::path::PathBuf,

    /// Load the catalog from a JSON file instead of the built-in set
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all courses in the catalog
    Courses,
    /// Show a course with modules, lessons, and completion
    Show {
        /// Course ID
        course: String,
    },
    /// Enroll in a course
    Enroll {
        /// Course ID
        course: String,
    },
    /// Leave a course (progress is kept)
    Unenroll {
        /// Course ID
        course: String,
    },
    /// Mark a lesson completed
    Complete {
        /// Course ID
        course: String,
        /// Lesson ID
        lesson: String,
    },
    /// Mark a lesson not completed
    Uncomplete {
        /// Course ID
        course: String,
        /// Lesson ID
        lesson: String,
    },
    /// Show enrolled courses and overall progress
    Dashboard,
    /// Start a training-assistant conversation and print its URL
    Assistant,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Arc::new(Catalog::from_json_file(path)?),
        None => Arc::new(Catalog::builtin()),
    };

    let store = JsonFileStore::new(&cli.data_dir).await?;
    let mut tracker = ProgressTracker::load(catalog.clone(), store).await;

    match cli.command {
        Commands::Courses => {
            println!("Courses ({})", catalog.len());
            for course in catalog.courses() {
                println!(
                    "  {} | {} | {} | {} lessons | {}",
                    course.id,
                    course.level,
                    course.duration,
                    course.lesson_count(),
                    course.title,
                );
            }
        }
        Commands::Show { course } => {
            let Some(course) = catalog.get(&course) else {
                println!("Course not found");
                return Ok(());
            };

            println!("{} ({})", course.title, course.id);
            println!("  Instructor: {}", course.instructor);
            println!("  Level: {} | Duration: {}", course.level, course.duration);
            println!("  Tags: {}", course.tags.join(", "));
            println!(
                "  Enrolled: {} | Progress: {}%",
                if tracker.is_enrolled(&course.id) { "yes" } else { "no" },
                tracker.course_progress(&course.id),
            );
            for module in &course.modules {
                println!("  {}", module.title);
                for lesson in &module.lessons {
                    let mark = if tracker.is_lesson_completed(&course.id, &lesson.id) {
                        "x"
                    } else {
                        " "
                    };
                    println!(
                        "    [{}] {} | {} | {} - {}",
                        mark, lesson.id, lesson.kind, lesson.duration, lesson.title,
                    );
                }
            }

            if tracker.is_enrolled(&course.id) {
                tracker.touch_last_accessed(&course.id).await?;
            }
        }
        Commands::Enroll { course } => {
            tracker.enroll(&course).await?;
            println!("Enrolled in {}", course);
        }
        Commands::Unenroll { course } => {
            tracker.unenroll(&course).await;
            println!("Left {} (progress kept)", course);
        }
        Commands::Complete { course, lesson } => {
            tracker.mark_lesson_completed(&course, &lesson).await?;
            let title = catalog
                .get(&course)
                .and_then(|c| c.find_lesson(&lesson))
                .map(|l| l.title.as_str())
                .unwrap_or(&lesson);
            println!(
                "Completed {} - course at {}%",
                title,
                tracker.course_progress(&course),
            );
        }
        Commands::Uncomplete { course, lesson } => {
            tracker.mark_lesson_incomplete(&course, &lesson).await?;
            println!(
                "Unmarked {}/{} - course at {}%",
                course,
                lesson,
                tracker.course_progress(&course),
            );
        }
        Commands::Dashboard => {
            let summary = tracker.summary();
            println!("Dashboard");
            println!("  Enrolled courses: {}", summary.enrolled_courses);
            println!("  Lessons completed: {}", summary.lessons_completed);
            println!("  Average progress: {}%", summary.average_percent);
            for course in tracker.enrolled_courses() {
                let accessed = tracker
                    .last_accessed(&course.id)
                    .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                    .unwrap_or_else(|| "never".to_string());
                println!(
                    "  {} | {:>3}% | last accessed {} | {}",
                    course.id,
                    tracker.course_progress(&course.id),
                    accessed,
                    course.title,
                );
            }
        }
        Commands::Assistant => {
            let client = ConversationClient::from_env()?;
            match client.create_conversation().await {
                Ok(url) => println!("Conversation ready: {}", url),
                Err(e) => {
                    tracing::warn!("conversation request failed: {:#}", e);
                    println!("Could not start the assistant. Please try again later.");
                }
            }
        }
    }

    Ok(())
}
