use clap::Args;
use club_compass::error::AppError;
use club_compass::workflows::catalog::{Club, ClubCatalogImporter, ClubDomain};
use club_compass::workflows::quiz::{Answer, QuestionBank, QuizEngine, QuizResult};
use club_compass::workflows::recommendation::RecommendationEngine;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuizScoreArgs {
    /// Answer as `<question id>=<option text>`; repeat once per question
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<Answer>,
    /// CSV export to recommend from instead of the bundled catalog
    #[arg(long)]
    pub(crate) clubs_csv: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ClubsListArgs {
    /// Restrict the listing to one domain (Technical, Cultural, Sports, ...)
    #[arg(long, value_parser = parse_domain)]
    pub(crate) domain: Option<ClubDomain>,
    /// CSV export to list instead of the bundled catalog
    #[arg(long)]
    pub(crate) clubs_csv: Option<PathBuf>,
}

pub(crate) fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (id, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected '<question id>=<answer>', got '{raw}'"))?;
    let question_id = id
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid question id '{}' ({err})", id.trim()))?;
    Ok(Answer::new(question_id, text.trim()))
}

pub(crate) fn parse_domain(raw: &str) -> Result<ClubDomain, String> {
    raw.parse::<ClubDomain>().map_err(|err| err.to_string())
}

pub(crate) fn load_catalog(clubs_csv: Option<PathBuf>) -> Result<Vec<Club>, AppError> {
    match clubs_csv {
        Some(path) => ClubCatalogImporter::from_path(path).map_err(AppError::from),
        None => ClubCatalogImporter::standard().map_err(AppError::from),
    }
}

pub(crate) fn score_answers(answers: &[Answer], catalog: &[Club]) -> QuizResult {
    let engine = QuizEngine::new(Arc::new(QuestionBank::standard()));
    let outcome = engine.score(answers);
    QuizResult {
        personality_type: outcome.personality.label().to_string(),
        personality_description: outcome.personality.description().to_string(),
        recommendations: RecommendationEngine::default().recommend(&outcome.scores, catalog),
    }
}

pub(crate) fn run_quiz_questions() -> Result<(), AppError> {
    let bank = QuestionBank::standard();

    println!("Club Compass personality quiz");
    for question in bank.public_view() {
        println!("\n{}. {}", question.id, question.question);
        for option in question.options {
            println!("   - {option}");
        }
    }

    Ok(())
}

pub(crate) fn run_quiz_score(args: QuizScoreArgs) -> Result<(), AppError> {
    let QuizScoreArgs {
        answers,
        clubs_csv,
        json,
    } = args;

    let catalog = load_catalog(clubs_csv)?;
    let result = score_answers(&answers, &catalog);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Result payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Personality: {}", result.personality_type);
    println!("{}", result.personality_description);

    if result.recommendations.is_empty() {
        println!("\nRecommended clubs: none (catalog is empty)");
    } else {
        println!("\nRecommended clubs");
        for (rank, recommendation) in result.recommendations.iter().enumerate() {
            println!(
                "  {}. {} ({}% match)\n     {}",
                rank + 1,
                recommendation.club_name,
                recommendation.match_percentage,
                recommendation.reason
            );
        }
    }

    Ok(())
}

pub(crate) fn run_clubs_list(args: ClubsListArgs) -> Result<(), AppError> {
    let ClubsListArgs { domain, clubs_csv } = args;

    let catalog = load_catalog(clubs_csv)?;
    let listing: Vec<&Club> = catalog
        .iter()
        .filter(|club| domain.map_or(true, |domain| club.domain == domain))
        .collect();

    match domain {
        Some(domain) => println!("{} clubs ({})", domain.label(), listing.len()),
        None => println!("All clubs ({})", listing.len()),
    }

    for club in listing {
        println!(
            "  {:<40} {:<11} {:<9} {}",
            club.name,
            club.domain.label(),
            club.recruitment_status.label(),
            club.time_commitment
        );
    }

    Ok(())
}
