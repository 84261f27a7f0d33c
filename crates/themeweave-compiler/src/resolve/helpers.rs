//! Dispatch of helper placeholders onto the color functions.

use serde_json::Value;

use super::number;
use crate::colors::{self, ColorError};

/// Apply a whitelisted helper to resolved arguments.
pub fn apply_helper(name: &str, args: &[Value]) -> Result<Value, ColorError> {
    match name {
        "alpha" => Ok(Value::String(colors::alpha(
            color_arg(name, args, 0)?,
            number_arg(name, args, 1)?,
        )?)),
        "lighten" => Ok(Value::String(colors::lighten(
            color_arg(name, args, 0)?,
            number_arg(name, args, 1)?,
        )?)),
        "darken" => Ok(Value::String(colors::darken(
            color_arg(name, args, 0)?,
            number_arg(name, args, 1)?,
        )?)),
        "emphasize" => {
            let coefficient = match args.get(1) {
                None | Some(Value::Null) => 0.15,
                Some(_) => number_arg(name, args, 1)?,
            };
            Ok(Value::String(colors::emphasize(
                color_arg(name, args, 0)?,
                coefficient,
            )?))
        }
        "getContrastRatio" => Ok(number(colors::get_contrast_ratio(
            color_arg(name, args, 0)?,
            color_arg(name, args, 1)?,
        )?)),
        other => Err(ColorError::InvalidArgument(format!(
            "unknown helper '{other}'"
        ))),
    }
}

fn color_arg<'a>(name: &str, args: &'a [Value], index: usize) -> Result<&'a str, ColorError> {
    args.get(index).and_then(Value::as_str).ok_or_else(|| {
        ColorError::InvalidArgument(format!(
            "{name}() argument {} must be a color string",
            index + 1
        ))
    })
}

fn number_arg(name: &str, args: &[Value], index: usize) -> Result<f64, ColorError> {
    args.get(index).and_then(Value::as_f64).ok_or_else(|| {
        ColorError::InvalidArgument(format!(
            "{name}() argument {} must be a number",
            index + 1
        ))
    })
}
