use crate::config::{AppConfig, CatalogConfig};
use crate::demo::{
    run_advise, run_jobs, run_mock, run_post, run_questions, run_recruit, run_review, run_tips,
    run_training, AdviseArgs, JobsArgs, MockArgs, PostArgs, RecruitArgs, ReviewArgs, TipsArgs,
    TrainingArgs,
};
use crate::error::AppError;
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Career Workforce Center",
    about = "Job matching and career advice for job seekers and employers",
    version
)]
struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Search job listings by keyword, location, and skill
    Jobs(JobsArgs),
    /// Get career advice for a goal statement
    Advise(AdviseArgs),
    /// Review resume text for common gaps
    Review(ReviewArgs),
    /// Get interview tips for a job type
    Tips(TipsArgs),
    /// Print the practice interview questions
    Questions,
    /// Get feedback on a mock interview answer
    Mock(MockArgs),
    /// Validate a job posting
    Post(PostArgs),
    /// Show recruitment support for employers
    Recruit(RecruitArgs),
    /// List training programs or request program information
    Training(TrainingArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// CSV export of job listings replacing the built-in catalog
    #[arg(long, global = true)]
    pub(crate) listings_csv: Option<PathBuf>,
    /// CSV export of training programs replacing the built-in list
    #[arg(long, global = true)]
    pub(crate) programs_csv: Option<PathBuf>,
}

impl CatalogArgs {
    fn apply(self, config: &mut CatalogConfig) {
        if let Some(path) = self.listings_csv {
            config.listings_csv = Some(path);
        }
        if let Some(path) = self.programs_csv {
            config.programs_csv = Some(path);
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    cli.catalog.apply(&mut config.catalog);

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, config).await,
        Command::Jobs(args) => run_jobs(args, &config.catalog),
        Command::Advise(args) => run_advise(args, &config.catalog),
        Command::Review(args) => run_review(args, &config.catalog),
        Command::Tips(args) => run_tips(args, &config.catalog),
        Command::Questions => run_questions(&config.catalog),
        Command::Mock(args) => run_mock(args, &config.catalog),
        Command::Post(args) => run_post(args, &config.catalog),
        Command::Recruit(args) => run_recruit(args, &config.catalog),
        Command::Training(args) => run_training(args, &config.catalog),
    }
}
