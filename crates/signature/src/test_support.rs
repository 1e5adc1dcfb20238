//! Shared proptest strategies.

use proptest::prelude::*;

fn description() -> impl Strategy<Value = Option<String>> {
	prop::option::of("[a-z][a-z ]{0,12}")
}

/// Well-formed signatures with a `cmd` base, up to four arguments and four options.
///
/// Only the last argument may be variadic; option short keys are unique capitals.
pub fn arb_signature() -> impl Strategy<Value = String> {
	(
		prop::collection::btree_set("[a-z][a-z0-9_]{0,5}", 0..4),
		prop::collection::vec((0u8..4, description()), 4),
		prop::collection::btree_set("[a-z][a-z0-9]{1,6}", 0..4),
		prop::collection::vec((any::<bool>(), any::<bool>(), description()), 4),
	)
		.prop_map(|(args, arg_meta, opts, opt_meta)| {
			let mut signature = String::from("cmd");

			let last = args.len().saturating_sub(1);
			for (i, (name, (kind, desc))) in args.iter().zip(arg_meta).enumerate() {
				let marker = match kind {
					1 => "?",
					2 => "=dflt",
					3 if i == last => "*",
					_ => "",
				};
				let desc = desc.map(|d| format!(": {d}")).unwrap_or_default();
				signature.push_str(&format!(" {{{name}{marker}{desc}}}"));
			}

			for (i, (long, (has_short, has_value, desc))) in opts.iter().zip(opt_meta).enumerate() {
				let short = if has_short { format!("{}|", (b'A' + i as u8) as char) } else { String::new() };
				let value = if has_value { "=" } else { "" };
				let desc = desc.map(|d| format!(" : {d}")).unwrap_or_default();
				signature.push_str(&format!(" {{--{short}{long}{value}{desc}}}"));
			}

			signature
		})
}
