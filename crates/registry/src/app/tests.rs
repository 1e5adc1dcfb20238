use artisan_signature::{ArgumentValue, BindError, HELP_HINT, OptionValue, OptionValueSource};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::command::Command;
use crate::error::CommandError;
use crate::loader::BuiltinCommands;
use crate::resolve::ClosestChoice;
use crate::test_support::{Fails, Recorder};

const GREET: &str = "greet {name: Who to greet} {--y|yell: Shout}";

struct Fixture {
	app: Application,
	greet: std::sync::Arc<std::sync::Mutex<Vec<artisan_signature::Input>>>,
}

fn fixture(config: ArtisanConfig) -> Fixture {
	let greet = Recorder::new(GREET).described("Say hello");
	let seen = greet.inputs();

	let mut builder = RegistryBuilder::new();
	builder.load(&BuiltinCommands).unwrap();
	builder.register(greet);
	builder.register(Fails);

	Fixture {
		app: Application::build(config, builder).unwrap(),
		greet: seen,
	}
}

fn run(app: &Application, args: &[&str]) -> (Result<(), DispatchError>, String) {
	let mut out = Vec::new();
	let result = app.run(args, &mut out);
	(result, String::from_utf8(out).unwrap())
}

#[test]
fn binds_and_runs_command() {
	let fx = fixture(ArtisanConfig::default());
	let (result, out) = run(&fx.app, &["greet", "Ada", "-y"]);
	result.unwrap();
	assert_eq!(out, "ran greet\n");

	let seen = fx.greet.lock().unwrap();
	assert_eq!(seen.len(), 1);
	let input = &seen[0];
	assert_eq!(input.arguments["name"], ArgumentValue::Single("Ada".into()));
	assert_eq!(input.options["yell"], OptionValue::Flag(true));
	assert_eq!(input.options["help"], OptionValue::Flag(false));
	assert_eq!(input.options["verbose"], OptionValue::Flag(false));
}

#[test]
fn global_flags_bind_on_every_command() {
	let fx = fixture(ArtisanConfig::default());
	run(&fx.app, &["greet", "--verbose", "Ada"]).0.unwrap();
	assert!(fx.greet.lock().unwrap()[0].flag("verbose"));
}

#[rstest]
#[case(&["greet", "--help"])]
#[case(&["greet", "-h", "--bogus", "a", "b"])]
#[case(&["greet", "Ada", "--help"])]
fn help_flag_skips_binding(#[case] args: &[&str]) {
	let fx = fixture(ArtisanConfig::default());
	let (result, out) = run(&fx.app, args);
	result.unwrap();
	assert_eq!(out, "Description:\n  Say hello\n\nArguments:\n  name                Who to greet\n\nOptions:\n  -h, --help          Show help of a command\n  -v, --verbose       Get verbose output\n  -y, --yell          Shout\n\n");
	assert!(fx.greet.lock().unwrap().is_empty());
}

#[rstest]
#[case(&[])]
#[case(&["-h"])]
#[case(&["--help"])]
fn root_screen_then_list(#[case] args: &[&str]) {
	let fx = fixture(ArtisanConfig::default());
	let (result, out) = run(&fx.app, args);
	result.unwrap();
	assert_eq!(out, "Artisan\n\nOptions:\n  -h, --help          Show help of a command\n  -v, --verbose       Get verbose output\n\nAvailable Commands:\n  list                          Print all available commands\n  greet                         Say hello\n  fail\n");
}

#[test]
fn root_screen_without_list_reports_not_found() {
	let mut builder = RegistryBuilder::new();
	builder.register(Recorder::new("greet {name}"));
	let app = Application::build(ArtisanConfig::default(), builder).unwrap();

	let (result, out) = run(&app, &[]);
	assert!(out.starts_with("Artisan\n"), "{out}");
	assert!(matches!(result, Err(DispatchError::CommandNotFound { ref base, .. }) if base == "list"));
}

#[test]
fn binding_errors_hint_at_help() {
	let fx = fixture(ArtisanConfig::default());
	let (result, out) = run(&fx.app, &["greet"]);
	let err = result.unwrap_err();

	assert!(matches!(err, DispatchError::Bind(BindError::TooFewArguments { ref argument }) if argument == "name"));
	assert_eq!(err.to_string(), "too few arguments: no value for \"name\"");
	assert_eq!(err.hint(), Some(HELP_HINT));
	assert_eq!(out, "");
}

#[test]
fn unknown_option_is_reported() {
	let fx = fixture(ArtisanConfig::default());
	let err = run(&fx.app, &["greet", "Ada", "--loud"]).0.unwrap_err();
	assert_eq!(err.to_string(), "unknown option specified: --loud");
}

#[test]
fn unknown_command_lists_suggestions() {
	let fx = fixture(ArtisanConfig::default());
	let err = run(&fx.app, &["gret", "Ada"]).0.unwrap_err();

	assert_eq!(err.to_string(), "no command found: \"gret\"");
	assert_eq!(err.hint(), Some(crate::LIST_HINT));
	match err {
		DispatchError::CommandNotFound { suggestions, .. } => assert_eq!(suggestions, vec!["greet", "list"]),
		other => panic!("unexpected error: {other:?}"),
	}
	assert!(fx.greet.lock().unwrap().is_empty());
}

#[test]
fn accepted_suggestion_runs_with_given_tokens() {
	let fx = fixture(ArtisanConfig::default());
	let app = fx.app.with_chooser(ClosestChoice);

	let mut out = Vec::new();
	app.run(&["gret", "Ada"], &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "ran greet\n");
	assert_eq!(fx.greet.lock().unwrap()[0].arguments["name"], ArgumentValue::Single("Ada".into()));
}

#[test]
fn command_failures_propagate() {
	let fx = fixture(ArtisanConfig::default());
	let err = run(&fx.app, &["fail", "boom"]).0.unwrap_err();

	assert!(matches!(err, DispatchError::Command(CommandError::Failed(ref msg)) if msg == "boom"));
	assert_eq!(err.to_string(), "boom");
	assert_eq!(err.hint(), None);
}

#[test]
fn positional_option_values_follow_config() {
	let make = || {
		let mut builder = RegistryBuilder::new();
		let recorder = Recorder::new("make {--dir=}");
		let seen = recorder.inputs();
		builder.register(recorder);
		(builder, seen)
	};

	let (builder, seen) = make();
	let app = Application::build(ArtisanConfig::default(), builder).unwrap();
	run(&app, &["make", "--dir", "src"]).0.unwrap();
	assert_eq!(seen.lock().unwrap()[0].options["dir"], OptionValue::Value("src".into()));

	let (builder, _) = make();
	let config = ArtisanConfig {
		option_values: OptionValueSource::InlineOnly,
		..ArtisanConfig::default()
	};
	let app = Application::build(config, builder).unwrap();
	let err = run(&app, &["make", "--dir", "src"]).0.unwrap_err();
	assert!(matches!(err, DispatchError::Bind(BindError::TooManyArguments { ref extra }) if extra == &["src"]));
}

struct Probe;

impl Command for Probe {
	fn signature(&self) -> &str {
		"probe {target}"
	}

	fn handle(&self, ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
		let target = ctx.argument("target")?.as_str().unwrap_or_default().to_string();
		ctx.line(format!("target={target} verbose={}", ctx.flag("verbose")?))?;
		ctx.argument("missing")?;
		Ok(())
	}
}

#[test]
fn context_rejects_undeclared_names() {
	let mut builder = RegistryBuilder::new();
	builder.register(Probe);
	let app = Application::build(ArtisanConfig::default(), builder).unwrap();

	let (result, out) = run(&app, &["probe", "db", "-v"]);
	assert_eq!(out, "target=db verbose=true\n");
	assert_eq!(
		result.unwrap_err().to_string(),
		"invalid argument: argument \"missing\" is not registered on signature"
	);
}

#[test]
fn custom_global_options_replace_defaults() {
	let config = ArtisanConfig {
		global_options: "{--q|quiet: Silence output}".into(),
		..ArtisanConfig::default()
	};
	let mut builder = RegistryBuilder::new();
	let recorder = Recorder::new("greet {name}");
	let seen = recorder.inputs();
	builder.register(recorder);
	let app = Application::build(config, builder).unwrap();

	run(&app, &["greet", "-q", "Ada"]).0.unwrap();
	let seen = seen.lock().unwrap();
	assert!(seen[0].flag("quiet"));
	assert!(seen[0].option("verbose").is_none());
}
