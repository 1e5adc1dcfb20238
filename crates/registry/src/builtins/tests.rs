use pretty_assertions::assert_eq;

use super::*;
use crate::Input;
use crate::config::DEFAULT_GLOBAL_OPTIONS;
use crate::loader::BuiltinCommands;
use crate::registry::RegistryBuilder;
use crate::test_support::Recorder;

#[test]
fn list_prints_bases_in_registration_order() {
	let mut builder = RegistryBuilder::new();
	builder.load(&BuiltinCommands).unwrap();
	builder.register(Recorder::new("greet {name}").described("Say hello"));
	builder.register(Recorder::new("cache:clear"));
	let registry = builder.build(DEFAULT_GLOBAL_OPTIONS).unwrap();

	let mut out = Vec::new();
	let mut ctx = CommandContext::new(Input::default(), &registry, &mut out);
	ListCommands.handle(&mut ctx).unwrap();

	assert_eq!(
		String::from_utf8(out).unwrap(),
		"Available Commands:\n  list                          Print all available commands\n  greet                         Say hello\n  cache:clear\n"
	);
}
