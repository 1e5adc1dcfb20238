use indexmap::IndexMap;

/// Value bound to a positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
	Single(String),
	/// Tokens captured by a variadic argument.
	List(Vec<String>),
	/// Optional argument without a token or default.
	Missing,
}

impl ArgumentValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Single(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			Self::List(values) => Some(values),
			_ => None,
		}
	}

	pub fn is_missing(&self) -> bool {
		matches!(self, Self::Missing)
	}
}

/// Value bound to an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
	/// Boolean flag state.
	Flag(bool),
	Value(String),
	/// Value option that was not given and has no default.
	Missing,
}

impl OptionValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Value(value) => Some(value),
			_ => None,
		}
	}

	/// `true` for a set flag or any present value.
	pub fn is_set(&self) -> bool {
		match self {
			Self::Flag(set) => *set,
			Self::Value(_) => true,
			Self::Missing => false,
		}
	}
}

pub type BoundArguments = IndexMap<String, ArgumentValue>;
pub type BoundOptions = IndexMap<String, OptionValue>;

/// Result of a successful bind: every declared argument and option has a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
	pub arguments: BoundArguments,
	pub options: BoundOptions,
}

impl Input {
	pub fn argument(&self, name: &str) -> Option<&ArgumentValue> {
		self.arguments.get(name)
	}

	pub fn option(&self, long: &str) -> Option<&OptionValue> {
		self.options.get(long)
	}

	/// Shorthand for `option(long).is_set()`; undeclared options read as unset.
	pub fn flag(&self, long: &str) -> bool {
		self.option(long).is_some_and(OptionValue::is_set)
	}
}
