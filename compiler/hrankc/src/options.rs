use hrank_types::{CompositionOrder, Naming};

use crate::CliError;

/// Inference settings shared by the commands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InferOptions {
    pub order: CompositionOrder,
    pub naming: Naming,
    /// Print stack effects with flattened stacks.
    pub pretty: bool,
    /// Reject results that fail the validity check.
    pub check: bool,
}

/// Split `args` into flags, applied on top of `defaults`, and positional
/// arguments.
pub fn parse_infer_options(
    args: &[String],
    defaults: InferOptions,
) -> Result<(InferOptions, Vec<&str>), CliError> {
    let mut options = defaults;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--reverse" | "-r" => options.order = CompositionOrder::RightToLeft,
            "--alpha" | "-a" => options.naming = Naming::Alphabetic,
            "--numeric" | "-n" => options.naming = Naming::Numeric,
            "--pretty" | "-p" => options.pretty = true,
            "--check" | "-c" => options.check = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::UnknownOption(flag.to_owned()))
            }
            _ => positional.push(arg.as_str()),
        }
    }
    Ok((options, positional))
}
