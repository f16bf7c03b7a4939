//! Behaviour-driven step definitions driving the score CLI scenarios.

use super::helpers::{Workspace, sparse_profile, write_utf8};
use super::*;
use crate::score::run_score_with;
use camino::Utf8PathBuf;
use profile_score_core::ProfileScore;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct ScoreWorld {
    _workspace: Workspace,
    profile_path: Utf8PathBuf,
    include_profile: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let profile_path = workspace.path("profile.json");
        Self {
            _workspace: workspace,
            profile_path,
            include_profile: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["profile-score".to_owned(), "score".to_owned()];
        if *self.include_profile.borrow() {
            argv.push(self.profile_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

#[given("a sparse profile exists on disk")]
fn sparse_profile_exists(#[from(world)] world: &ScoreWorld) {
    write_utf8(&world.profile_path, sparse_profile().to_string().as_bytes());
}

#[given("I request a summary")]
fn request_summary(#[from(world)] world: &ScoreWorld) {
    world.cli_args.borrow_mut().push("--summary".to_owned());
}

#[given("the profile contains invalid JSON")]
fn profile_contains_invalid_json(#[from(world)] world: &ScoreWorld) {
    write_utf8(&world.profile_path, b"{ not valid json");
}

#[given("I omit the profile path")]
fn omit_profile_path(#[from(world)] world: &ScoreWorld) {
    *world.include_profile.borrow_mut() = false;
}

#[given("the profile path names a directory")]
fn profile_path_is_directory(#[from(world)] world: &ScoreWorld) {
    std::fs::create_dir(&world.profile_path).expect("profile directory");
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &ScoreWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Score(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_score_with(args, &mut *buffer)
        }
        Command::Rubric => panic!("expected score command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints a JSON report")]
fn command_succeeds_and_prints_json(#[from(world)] world: &ScoreWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let report: ProfileScore =
        serde_json::from_str(&world.stdout()).expect("output should be a JSON report");
    assert_eq!(report.total_score(), 20);
    assert_eq!(report.max_total_score(), 118);
}

#[then("the summary ends with the total and grade")]
fn summary_ends_with_total(#[from(world)] world: &ScoreWorld) {
    let stdout = world.stdout();
    assert!(stdout.starts_with("linkedInUrl: 0/5\n"));
    assert_eq!(stdout.lines().last(), Some("total: 20/118 (17%, F)"));
}

#[then("the command fails because the profile JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &ScoreWorld) {
    match &*world.error() {
        CliError::ParseProfile { .. } => {}
        other => panic!("expected ParseProfile, found {other:?}"),
    }
}

#[then("the command fails because the profile path is missing")]
fn command_fails_missing_profile_path(#[from(world)] world: &ScoreWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_SCORE_PROFILE);
            assert_eq!(*env, ENV_SCORE_PROFILE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the profile path is not a file")]
fn command_fails_not_file(#[from(world)] world: &ScoreWorld) {
    match &*world.error() {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(*field, ARG_SCORE_PROFILE);
            assert_eq!(*path, world.profile_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_happy_path, "scoring a profile from JSON");
register_score_scenario!(score_summary, "printing a summary");
register_score_scenario!(score_invalid_json, "rejecting invalid JSON input");
register_score_scenario!(score_missing_profile, "rejecting missing profile paths");
register_score_scenario!(score_directory_profile, "rejecting directories");
