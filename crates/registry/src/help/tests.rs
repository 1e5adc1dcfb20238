use artisan_signature::parse_descriptions;
use pretty_assertions::assert_eq;

use super::*;

fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
	let mut out = Vec::new();
	f(&mut out).unwrap();
	String::from_utf8(out).unwrap()
}

fn greet_help(descriptions: Descriptions) -> CommandHelp<'static> {
	CommandHelp {
		base: "greet",
		description: "Say hello",
		descriptions,
	}
}

#[test]
fn command_help_lists_sections_in_order() {
	let mut descriptions = parse_descriptions("{--h|help: Show help of a command}").unwrap();
	descriptions.extend(parse_descriptions("greet {name: Who to greet} {--y|yell: Shout}").unwrap());

	let text = render(|out| PlainHelp.command(&greet_help(descriptions), out));
	assert_eq!(
		text,
		"Description:\n  Say hello\n\nArguments:\n  name                Who to greet\n\nOptions:\n  -h, --help          Show help of a command\n  -y, --yell          Shout\n\n"
	);
}

#[test]
fn arguments_section_needs_some_text() {
	let descriptions = parse_descriptions("greet {name} {--y|yell: Shout}").unwrap();
	let text = render(|out| PlainHelp.command(&greet_help(descriptions), out));
	assert!(!text.contains("Arguments:"), "{text}");
	assert!(text.contains("Options:\n  -y, --yell          Shout\n"), "{text}");
}

#[test]
fn empty_description_is_skipped() {
	let help = CommandHelp {
		base: "list",
		description: "",
		descriptions: parse_descriptions("{--q|quiet}").unwrap(),
	};
	let text = render(|out| PlainHelp.command(&help, out));
	assert_eq!(text, "Options:\n  -q, --quiet\n\n");
}

#[test]
fn long_keys_keep_a_space() {
	let text = render(|out| write_row(out, "--an-exceptionally-long-option", "Text", HELP_KEY_WIDTH));
	assert_eq!(text, "  --an-exceptionally-long-option Text\n");
}

#[test]
fn root_prints_banner_then_globals() {
	let globals = parse_descriptions("{--h|help: Show help of a command} {--v|verbose: Get verbose output}").unwrap();
	let text = render(|out| PlainHelp.root("Artisan", &globals, out));
	assert_eq!(
		text,
		"Artisan\n\nOptions:\n  -h, --help          Show help of a command\n  -v, --verbose       Get verbose output\n\n"
	);

	let text = render(|out| PlainHelp.root("", &globals, out));
	assert!(text.starts_with("Options:\n"), "{text}");
}

#[test]
fn options_heading_printed_without_options() {
	let help = CommandHelp {
		base: "list",
		description: "",
		descriptions: Descriptions::default(),
	};
	assert_eq!(render(|out| PlainHelp.command(&help, out)), "Options:\n\n");
	assert_eq!(render(|out| PlainHelp.root("", &Descriptions::default(), out)), "Options:\n\n");
}
