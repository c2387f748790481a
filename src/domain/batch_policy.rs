use serde::Deserialize;

/// How a multi-payment request reacts to a failing record.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
	/// Abort on the first failure. Records already paid stay paid, but their
	/// results are not reported.
	#[default]
	FailFast,
	/// Attempt every record and report a result or an error for each one.
	ReportPartial,
}
