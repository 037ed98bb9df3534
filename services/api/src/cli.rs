use crate::commands::{
    run_clubs_list, run_quiz_questions, run_quiz_score, ClubsListArgs, QuizScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use club_compass::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Club Compass",
    about = "Serve the club recommendation API or run the quiz from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the question bank or score a set of answers offline
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Browse the club catalog
    Clubs {
        #[command(subcommand)]
        command: ClubsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Print every question with its answer options
    Questions,
    /// Classify a set of answers and print club recommendations
    Score(QuizScoreArgs),
}

#[derive(Subcommand, Debug)]
enum ClubsCommand {
    /// List clubs, optionally narrowed to one domain
    List(ClubsListArgs),
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
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz {
            command: QuizCommand::Questions,
        } => run_quiz_questions(),
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_quiz_score(args),
        Command::Clubs {
            command: ClubsCommand::List(args),
        } => run_clubs_list(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_repeated_answers() {
        let cli = Cli::try_parse_from([
            "club-compass-api",
            "quiz",
            "score",
            "--answer",
            "1=Coding or building tech projects",
            "--answer",
            "4=Hackathons and tech competitions",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Quiz {
                command: QuizCommand::Score(args),
            }) => {
                assert_eq!(args.answers.len(), 2);
                assert_eq!(args.answers[1].question_id, 4);
                assert_eq!(args.answers[1].answer, "Hackathons and tech competitions");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn malformed_answer_is_rejected() {
        let result = Cli::try_parse_from(["club-compass-api", "quiz", "score", "--answer", "nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["club-compass-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
