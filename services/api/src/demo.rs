use crate::infra::InMemoryStore;
use clap::{Args, ValueEnum};
use cyrano::accounts::{AccountService, UserId, UserProfile, UserUpdate};
use cyrano::config::AccountsConfig;
use cyrano::error::AppError;
use cyrano::quiz::{
    answers_from_letters, evaluate_archetype, evaluate_mbti, AnswerOutcome, ArchetypeResult,
    Choice, Dimension, MbtiResult, QuizMode, QuizService, ARCHETYPE_BANK, MBTI_BANK,
};
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum QuizVariant {
    #[default]
    Archetype,
    Mbti,
}

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Question set to answer: full or quick
    #[arg(long, default_value = "full")]
    pub(crate) mode: QuizMode,
    /// Which quiz to score
    #[arg(long, value_enum, default_value_t = QuizVariant::Archetype)]
    pub(crate) variant: QuizVariant,
    /// One A/B letter per question in presentation order; missing trailing answers are skipped
    #[arg(long)]
    pub(crate) answers: String,
    /// Print the classification as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Use the ten-question quick quiz for the scripted session
    #[arg(long)]
    pub(crate) quick: bool,
    /// Letters for the scripted session; defaults to alternating answers
    #[arg(long)]
    pub(crate) answers: Option<String>,
}

fn letter_count(letters: &str) -> usize {
    letters.chars().filter(|c| !c.is_whitespace()).count()
}

fn check_length(letters: &str, total: usize) -> Result<(), AppError> {
    let given = letter_count(letters);
    if given > total {
        return Err(AppError::Input(format!(
            "{given} answers supplied but the quiz has {total} questions"
        )));
    }
    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let output = match args.variant {
        QuizVariant::Archetype => {
            let questions = ARCHETYPE_BANK.sequence(args.mode);
            check_length(&args.answers, questions.len())?;
            let answers = answers_from_letters(&questions, &args.answers)
                .map_err(|error| AppError::Input(error.to_string()))?;
            let result = evaluate_archetype(args.mode, &answers);
            if args.json {
                to_json(&result)?
            } else {
                render_archetype(&result)
            }
        }
        QuizVariant::Mbti => {
            let questions = MBTI_BANK.sequence(args.mode);
            check_length(&args.answers, questions.len())?;
            let answers = answers_from_letters(&questions, &args.answers)
                .map_err(|error| AppError::Input(error.to_string()))?;
            let result = evaluate_mbti(args.mode, &answers);
            if args.json {
                to_json(&result)?
            } else {
                render_mbti(&result)
            }
        }
    };

    println!("{output}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|error| AppError::Input(error.to_string()))
}

pub(crate) fn render_archetype(result: &ArchetypeResult) -> String {
    let mut out = String::new();
    let primary = result.outcome.primary.profile();
    let _ = writeln!(out, "Primary archetype: {} {} ({})", primary.emoji, primary.name, primary.id);
    let _ = writeln!(out, "  {}", primary.tagline);
    match result.outcome.secondary {
        Some(secondary) => {
            let _ = writeln!(out, "Secondary archetype: {}", secondary.profile().name);
        }
        None => {
            let _ = writeln!(out, "Secondary archetype: none");
        }
    }

    let _ = writeln!(out, "\nRankings");
    for ranking in &result.outcome.rankings {
        let _ = writeln!(out, "  {:<13} {:>6.1}", ranking.archetype.as_str(), ranking.score.value());
    }

    let _ = writeln!(out, "\nScores");
    for (dimension, value) in result.scores.iter() {
        let _ = writeln!(out, "  {:<13} {:>4}", dimension.label(), value);
    }

    let _ = write!(out, "\nWeakness: {}", primary.weakness);
    out
}

pub(crate) fn render_mbti(result: &MbtiResult) -> String {
    let mut out = String::new();
    let _ = write!(out, "Type: {}", result.outcome.code);
    if let Some(description) = result.outcome.description {
        let _ = write!(out, " ({})", description.name);
    }
    let _ = writeln!(out);
    for axis in &result.outcome.axes {
        let (first, second) = axis.axis.letters();
        let _ = writeln!(
            out,
            "  {:?}/{:?}: {:?} ({}% {:?})",
            first, second, axis.letter, axis.first_letter_percent, first
        );
    }
    if let Some(description) = result.outcome.description {
        let _ = write!(out, "Weakness: {}", description.weakness);
    }
    out.trim_end().to_string()
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryStore::default());
    let accounts = AccountService::new(
        store.clone(),
        store.clone(),
        AccountsConfig {
            free_credits: 3,
            admin_ids: vec!["demo-admin".to_string()],
        },
    );
    let quiz = QuizService::new(store.clone());

    println!("Cyrano demo");

    let admin = UserId("demo-admin".to_string());
    for (id, email) in [
        ("demo-admin", "admin@cyrano.local"),
        ("demo-user", "user@cyrano.local"),
        ("demo-pro", "pro@cyrano.local"),
    ] {
        let user = accounts
            .sign_in(UserProfile {
                id: UserId(id.to_string()),
                name: None,
                email: Some(email.to_string()),
                image: None,
            })
            .await
            .map_err(|error| AppError::Input(error.to_string()))?;
        println!("  signed in {} ({:?}, {} credits)", user.id, user.role, user.credits);
    }

    accounts
        .update_user(
            &admin,
            &UserId("demo-pro".to_string()),
            UserUpdate {
                plan: Some(cyrano::accounts::Plan::Pro),
                ..UserUpdate::default()
            },
        )
        .await
        .map_err(|error| AppError::Input(error.to_string()))?;

    let mode = if args.quick { QuizMode::Quick } else { QuizMode::Full };
    let member = UserId("demo-user".to_string());
    let started = quiz
        .start(&member, mode)
        .await
        .map_err(|error| AppError::Input(error.to_string()))?;
    let questions = ARCHETYPE_BANK.sequence(mode);
    let letters = args
        .answers
        .unwrap_or_else(|| "AB".repeat(questions.len().div_ceil(2)));
    check_length(&letters, questions.len())?;
    let choices: Vec<Choice> = letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Choice::from_char)
        .collect::<Result<_, _>>()
        .map_err(|error| AppError::Input(error.to_string()))?;
    if choices.len() < questions.len() {
        return Err(AppError::Input(format!(
            "the scripted session needs {} answers",
            questions.len()
        )));
    }

    println!("\nScripted {} quiz ({} questions)", mode.as_str(), started.total);
    let mut outcome = None;
    for (question, choice) in questions.iter().zip(choices) {
        outcome = Some(
            quiz.submit_answer(&member, &started.session_id, question.id, choice)
                .await
                .map_err(|error| AppError::Input(error.to_string()))?,
        );
    }

    if let Some(AnswerOutcome::Completed { result, saved, .. }) = outcome {
        println!("{}", render_archetype(&result));
        println!("  saved: {saved}");
    }

    let stats = accounts
        .stats(&admin)
        .await
        .map_err(|error| AppError::Input(error.to_string()))?;
    println!("\nAdmin stats");
    println!("  total users: {}", stats.total_users);
    println!("  users in the last 7 days: {}", stats.users_last_7_days);
    for plan in &stats.users_by_plan {
        println!("  plan {}: {}", plan.plan.label(), plan.count);
    }
    for archetype in &stats.users_by_archetype {
        println!("  archetype {}: {}", archetype.archetype, archetype.count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyrano::quiz::AnswerSet;

    #[test]
    fn archetype_summary_names_primary_and_rankings() {
        let result = evaluate_archetype(QuizMode::Full, &AnswerSet::new());
        let text = render_archetype(&result);

        assert!(text.contains("(INTERROGATOR)"));
        assert!(text.contains("Secondary archetype: none"));
        assert!(text.contains("GHOST"));
    }

    #[test]
    fn mbti_summary_lists_every_axis() {
        let questions = MBTI_BANK.sequence(QuizMode::Full);
        let answers = answers_from_letters(&questions, "BBBBBBBBBBBBBBBB").expect("valid");
        let text = render_mbti(&evaluate_mbti(QuizMode::Full, &answers));

        assert!(text.starts_with("Type: INFP"));
        assert_eq!(text.lines().filter(|line| line.contains('%')).count(), 4);
    }

    #[test]
    fn too_many_answers_are_rejected() {
        let error = check_length("ABABABABABA", 10).expect_err("eleven letters");
        assert!(error.to_string().contains("11 answers"));
        assert!(check_length("A B", 10).is_ok());
    }

    #[tokio::test]
    async fn demo_runs_end_to_end() {
        run_demo(DemoArgs {
            quick: true,
            answers: None,
        })
        .await
        .expect("demo completes");
    }
}
