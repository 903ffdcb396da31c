use crate::advisory::{CareerCenter, Evaluation, JobPosting, MatchQuery, MatchResult};
use crate::config::CatalogConfig;
use crate::error::AppError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct JobsArgs {
    /// Job title or keyword, fuzzy-matched against listing titles
    #[arg(long)]
    pub(crate) keywords: Option<String>,
    /// Exact location, or "All"
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Skill to look for in the listing's skill tags
    #[arg(long)]
    pub(crate) skills: Option<String>,
    /// Apply to the listing with this title
    #[arg(long)]
    pub(crate) apply: Option<String>,
    /// Print the location choices and exit
    #[arg(long)]
    pub(crate) locations: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AdviseArgs {
    /// Free-text career goals
    #[arg(default_value = "")]
    pub(crate) goal: String,
    /// Also request a session with a career counselor
    #[arg(long)]
    pub(crate) counseling: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReviewArgs {
    /// Resume text
    #[arg(default_value = "", conflicts_with = "file")]
    pub(crate) text: String,
    /// Read the resume text from a file instead
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Print general resume tips after the review
    #[arg(long)]
    pub(crate) tips: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TipsArgs {
    /// Job type, e.g. "software engineer"
    #[arg(default_value = "")]
    pub(crate) job_type: String,
}

#[derive(Args, Debug)]
pub(crate) struct MockArgs {
    /// Answer to a practice question
    #[arg(default_value = "")]
    pub(crate) answer: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct PostArgs {
    #[arg(long, default_value = "")]
    pub(crate) title: String,
    #[arg(long, default_value = "")]
    pub(crate) company: String,
    #[arg(long, default_value = "")]
    pub(crate) location: String,
    #[arg(long, default_value = "")]
    pub(crate) salary: String,
    #[arg(long, default_value = "")]
    pub(crate) description: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RecruitArgs {
    /// Request contact from a recruitment specialist
    #[arg(long)]
    pub(crate) assist: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TrainingArgs {
    /// Request information about the named program
    #[arg(long)]
    pub(crate) info: Option<String>,
}

pub(crate) fn run_jobs(args: JobsArgs, catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;

    if args.locations {
        for option in center.location_options() {
            println!("{option}");
        }
        return Ok(());
    }

    if let Some(title) = args.apply {
        print_text(center.apply(&title));
        return Ok(());
    }

    let query = MatchQuery {
        keywords: args.keywords,
        location: args.location,
        skills: args.skills,
    };
    render_matches(&center.find_jobs(&query));
    Ok(())
}

pub(crate) fn run_advise(args: AdviseArgs, catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;
    print_text(center.advise(&args.goal));
    if args.counseling {
        print_text(center.request_counseling(&args.goal));
    }
    Ok(())
}

pub(crate) fn run_review(args: ReviewArgs, catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;
    let resume = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => args.text,
    };

    println!("Resume feedback");
    print_lines(center.review_resume(&resume).into_lines());

    if args.tips {
        println!("\nResume tips");
        print_lines(center.resume_tips());
    }
    Ok(())
}

pub(crate) fn run_tips(args: TipsArgs, catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;
    print_text(center.interview_tips(&args.job_type));
    println!("\nGeneral interview tips");
    print_lines(center.interview_general_tips());
    Ok(())
}

pub(crate) fn run_questions(catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;
    println!("Practice questions");
    for (index, question) in center.interview_questions().iter().enumerate() {
        println!("{}. {}", index + 1, question);
    }
    Ok(())
}

pub(crate) fn run_mock(args: MockArgs, catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;
    println!("Mock interview feedback");
    print_lines(center.mock_feedback(&args.answer).into_lines());
    Ok(())
}

pub(crate) fn run_post(args: PostArgs, catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;
    let posting = JobPosting {
        title: args.title,
        company: args.company,
        location: args.location,
        salary: args.salary,
        description: args.description,
    };
    print_text(center.post_job(&posting));
    Ok(())
}

pub(crate) fn run_recruit(args: RecruitArgs, catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;
    println!("{}", center.recruitment_advice());
    println!("\nServices");
    print_lines(center.recruitment_services());
    if args.assist {
        println!("\n{}", center.request_recruitment_assistance());
    }
    Ok(())
}

pub(crate) fn run_training(args: TrainingArgs, catalog: &CatalogConfig) -> Result<(), AppError> {
    let center = CareerCenter::from_config(catalog)?;

    if let Some(name) = args.info {
        print_text(center.request_program_info(&name));
        return Ok(());
    }

    println!("Training programs");
    for program in center.training_programs() {
        println!(
            "- {} | {} | {} | {}",
            program.name, program.provider, program.duration, program.cost
        );
    }
    Ok(())
}

fn render_matches(outcome: &Evaluation<Vec<MatchResult>>) {
    let results = match outcome {
        Evaluation::Ready { result } => result,
        Evaluation::NoMatch => {
            println!("No job listings matched your search.");
            return;
        }
        Evaluation::NeedsInput { prompt } => {
            println!("{prompt}");
            return;
        }
    };

    println!("Job listings ({} found)", results.len());
    for result in results {
        let listing = &result.listing;
        let score = match result.score {
            Some(score) => format!(" | match {score:.0}"),
            None => String::new(),
        };
        println!(
            "- {} | {} | {} | {} | posted {}{}",
            listing.title,
            listing.company,
            listing.location,
            listing.salary_range,
            listing.posted_on,
            score
        );
    }
}

fn print_text(outcome: Evaluation<String>) {
    match outcome {
        Evaluation::NoMatch => println!("No matching entry was found."),
        other => println!("{}", other.into_text()),
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("- {line}");
    }
}
