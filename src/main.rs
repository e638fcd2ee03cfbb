use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use careerpath::config::AppConfig;
use careerpath::engine::domain::{Answer, Question, QuestionCatalog, QuestionId, QuestionKind};
use careerpath::engine::{
    AssessmentEngine, AssessmentReport, CareerId, CareerProfile, EngineConfig,
};
use careerpath::error::AppError;
use careerpath::intake::{career_catalog_from_path, question_catalog_from_path, AnswerImporter};
use careerpath::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "CareerPath Assessment Engine",
    about = "Score psychometric assessments and rank career matches from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an exported assessment and rank career matches
    Score(ScoreArgs),
    /// Run a self-contained sample assessment (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Question catalog export (JSON)
    #[arg(long)]
    questions: PathBuf,
    /// Answer export (CSV)
    #[arg(long)]
    answers: PathBuf,
    /// Career catalog export (JSON); omit to score without matching
    #[arg(long)]
    careers: Option<PathBuf>,
    /// Restrict scoring to a single respondent id from the export
    #[arg(long)]
    respondent: Option<String>,
    /// Number of career matches to display
    #[arg(long, default_value_t = 5)]
    top: usize,
    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Number of career matches to display
    #[arg(long, default_value_t = 3)]
    top: usize,
    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self { top: 3, json: false }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let (catalog, catalog_issues) = question_catalog_from_path(&args.questions)?;
    for issue in &catalog_issues {
        warn!(%issue, "question catalog record excluded");
    }

    let imported = AnswerImporter::from_path(&args.answers, args.respondent.as_deref())?;
    for note in &imported.notes {
        warn!(%note, "answer export row skipped");
    }

    let careers = match &args.careers {
        Some(path) => career_catalog_from_path(path)?,
        None => Vec::new(),
    };

    info!(
        questions = catalog.len(),
        answers = imported.answers.len(),
        careers = careers.len(),
        "scoring assessment"
    );

    let engine = AssessmentEngine::new(EngineConfig::default());
    let report = engine.assess(&catalog, &imported.answers, &careers);

    render_report(&report, args.top, args.json)
}

fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("CareerPath assessment demo");

    let catalog = demo_catalog()?;
    let answers = demo_answers();
    let careers = demo_careers();

    let engine = AssessmentEngine::new(EngineConfig::default());
    let report = engine.assess(&catalog, &answers, &careers);

    render_report(&report, args.top, args.json)
}

fn render_report(report: &AssessmentReport, top: usize, as_json: bool) -> Result<(), AppError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("\nAptitude");
    for (sub_domain, score) in &report.scores.aptitude {
        println!(
            "  {:<14} raw {:>5.1}  adjusted {:>5.1}  ({}/{} correct, {}s)",
            sub_domain, score.raw, score.adjusted, score.correct, score.total,
            score.time_spent_seconds
        );
    }
    println!("  overall        {:>5.1}", report.scores.aptitude_overall);

    println!("\nPersonality");
    for (trait_name, score) in &report.scores.personality {
        println!("  {:<18} {:>5.1}", trait_name, score);
    }

    println!("\nInterests");
    for (dimension, score) in &report.scores.interest {
        println!("  {:<18} {:>5.1}", dimension, score);
    }

    if !report.scores.reliability.is_empty() {
        println!("\nReliability");
        for (section, coefficient) in &report.scores.reliability {
            println!("  {:<14} {:.2}", section, coefficient);
        }
    }

    println!("\nTop career matches");
    if report.matches.is_empty() {
        println!("  (no careers in catalog)");
    }
    for career_match in report.matches.iter().take(top) {
        println!(
            "  {:<24} {:>5.1}%  (interest {:>5.1}, personality {:>5.1}, aptitude {:>5.1})",
            career_match.career.title,
            career_match.match_percentage,
            career_match.factors.interest,
            career_match.factors.personality,
            career_match.factors.aptitude
        );
    }

    println!("\n{}", report.narrative.trait_summary);
    println!("{}", report.narrative.interest_summary);

    println!("\nStrengths");
    for strength in &report.narrative.strengths {
        println!("  - {strength}");
    }

    println!("\nDevelopment areas");
    for area in &report.narrative.development_areas {
        println!("  - {area}");
    }

    println!("\nRecommendations");
    for recommendation in &report.narrative.recommendations {
        println!("  {}", recommendation.title);
        println!("    {}", recommendation.description);
        for item in &recommendation.action_items {
            println!("    * {item}");
        }
    }

    if !report.issues.is_empty() {
        println!("\nExcluded answers");
        for issue in &report.issues {
            println!("  - {issue}");
        }
    }

    Ok(())
}

fn demo_catalog() -> Result<QuestionCatalog, AppError> {
    let mut questions = Vec::new();

    for (sub_domain, correct) in [("logical", 1), ("numerical", 2), ("verbal", 0), ("spatial", 3)]
    {
        for index in 0..4 {
            questions.push(Question {
                id: QuestionId(format!("apt-{sub_domain}-{index}")),
                kind: QuestionKind::Aptitude {
                    sub_domain: sub_domain.to_string(),
                    correct_option: correct,
                    option_count: Some(4),
                },
            });
        }
    }

    for (index, (trait_name, reversed)) in [
        ("openness", false),
        ("conscientiousness", false),
        ("extraversion", true),
        ("agreeableness", false),
        ("neuroticism", true),
    ]
    .into_iter()
    .enumerate()
    {
        questions.push(Question {
            id: QuestionId(format!("per-{index}")),
            kind: QuestionKind::Personality {
                trait_name: trait_name.to_string(),
                reversed,
            },
        });
    }

    for code in ["R", "I", "A", "S", "E", "C"] {
        questions.push(Question {
            id: QuestionId(format!("int-{code}")),
            kind: QuestionKind::Interest {
                riasec_code: code.to_string(),
            },
        });
    }

    Ok(QuestionCatalog::new(questions)?)
}

fn demo_answers() -> Vec<Answer> {
    let mut answers = Vec::new();

    for (sub_domain, correct_option) in
        [("logical", 1u32), ("numerical", 2), ("verbal", 0), ("spatial", 3)]
    {
        for index in 0..4u32 {
            // Three of four correct per sub-domain, answered briskly.
            let value = if index < 3 {
                correct_option
            } else {
                (correct_option + 1) % 4
            };
            answers.push(Answer {
                question_id: QuestionId(format!("apt-{sub_domain}-{index}")),
                respondent_id: None,
                value,
                time_spent_seconds: Some(35 + index * 5),
            });
        }
    }

    for (index, value) in [4u32, 3, 1, 3, 1].into_iter().enumerate() {
        answers.push(Answer {
            question_id: QuestionId(format!("per-{index}")),
            respondent_id: None,
            value,
            time_spent_seconds: None,
        });
    }

    for (code, value) in [("R", 1u32), ("I", 4), ("A", 2), ("S", 3), ("E", 1), ("C", 2)] {
        answers.push(Answer {
            question_id: QuestionId(format!("int-{code}")),
            respondent_id: None,
            value,
            time_spent_seconds: None,
        });
    }

    answers
}

fn demo_careers() -> Vec<CareerProfile> {
    fn career(
        id: &str,
        title: &str,
        description: &str,
        riasec: &[(&str, f64)],
        fit: &[(&str, f64)],
    ) -> CareerProfile {
        CareerProfile {
            id: CareerId(id.to_string()),
            title: title.to_string(),
            description: description.to_string(),
            riasec_profile: riasec.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            personality_fit: fit.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    vec![
        career(
            "career-data-analyst",
            "Data Analyst",
            "Turns raw operational data into decisions.",
            &[("I", 90.0), ("C", 60.0)],
            &[("openness", 75.0), ("conscientiousness", 80.0)],
        ),
        career(
            "career-social-worker",
            "Social Worker",
            "Supports individuals and families through casework.",
            &[("S", 95.0), ("E", 40.0)],
            &[("agreeableness", 85.0), ("extraversion", 70.0)],
        ),
        career(
            "career-mechanical-technician",
            "Mechanical Technician",
            "Maintains and repairs production machinery.",
            &[("R", 90.0), ("I", 45.0)],
            &[("conscientiousness", 75.0)],
        ),
        career(
            "career-graphic-designer",
            "Graphic Designer",
            "Designs visual identities and product artwork.",
            &[("A", 90.0), ("E", 50.0)],
            &[("openness", 85.0)],
        ),
    ]
}
