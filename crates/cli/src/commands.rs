//! Commands bundled with the `artisan` binary.

use artisan_registry::{ArgumentValue, Command, CommandContext, CommandError};
use tracing::debug;

/// `greet`: prints a greeting.
pub struct Greet;

impl Command for Greet {
	fn signature(&self) -> &str {
		"greet {name: Who to greet} {greeting=Hello: Greeting to use} {--y|yell: Shout the greeting}"
	}

	fn description(&self) -> &str {
		"Greet someone"
	}

	fn handle(&self, ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
		let name = single(ctx.argument("name")?, "name")?;
		let greeting = single(ctx.argument("greeting")?, "greeting")?;
		let mut line = format!("{greeting}, {name}!");
		if ctx.flag("yell")? {
			line = line.to_uppercase();
		}
		ctx.line(line)
	}
}

/// `sum`: adds numbers.
pub struct Sum;

impl Command for Sum {
	fn signature(&self) -> &str {
		"sum {numbers*: Numbers to add} {--p|precision=2: Decimal places}"
	}

	fn description(&self) -> &str {
		"Add numbers together"
	}

	fn handle(&self, ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
		let numbers = ctx
			.argument("numbers")?
			.as_list()
			.ok_or_else(|| CommandError::InvalidArgument("\"numbers\" takes a list".into()))?;

		let mut total = 0.0_f64;
		for raw in numbers {
			let value: f64 = raw
				.parse()
				.map_err(|_| CommandError::InvalidArgument(format!("\"{raw}\" is not a number")))?;
			total += value;
		}

		let precision = match ctx.option("precision")?.as_str() {
			Some(raw) => raw
				.parse::<usize>()
				.map_err(|_| CommandError::InvalidArgument(format!("precision \"{raw}\" is not a whole number")))?,
			None => 0,
		};

		if ctx.flag("verbose")? {
			debug!(count = numbers.len(), precision, "summing");
			ctx.line(format!("{} = {total:.precision$}", numbers.join(" + ")))
		} else {
			ctx.line(format!("{total:.precision$}"))
		}
	}
}

fn single<'a>(value: &'a ArgumentValue, name: &str) -> Result<&'a str, CommandError> {
	value
		.as_str()
		.ok_or_else(|| CommandError::InvalidArgument(format!("\"{name}\" has no value")))
}
