//! Interactive well query prompts
//!
//! After the survey plots are written, the operator can ask for the
//! reading at one extra point, as if sinking a monitoring well there.
//! This module owns that conversation.
//!
//! All prompts are generic over [`BufRead`] and [`Write`] so the exchange
//! can be driven from a test through [`io::Cursor`] exactly as it runs on
//! stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::physics::ConcentrationModel;

// =================================================================================================
// Well Query
// =================================================================================================

/// Location of a requested monitoring-well reading
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WellQuery {
    /// Distance downgradient of the source \[m\], strictly positive
    pub x: f64,
    /// Offset from the plume centerline \[m\]
    pub y: f64,
}

// =================================================================================================
// Prompt Functions
// =================================================================================================

/// Ask whether the operator wants a well reading, and where.
///
/// The yes/no question repeats until the answer is one of `y`, `Y`, `n`
/// or `N`. Coordinates repeat until they parse as finite numbers, with
/// the downgradient distance additionally required to be positive (the
/// model is only defined downgradient of the source plane). End of input
/// at any prompt counts as declining.
///
/// # Arguments
///
/// * `input` - Where to read answers from (stdin in production)
/// * `output` - Where to write prompts to (stdout in production)
///
/// # Returns
///
/// `Ok(Some(query))` with the validated location, `Ok(None)` when the
/// operator declines, or `Err` when the streams fail.
pub fn prompt_well_query<R, W>(input: &mut R, output: &mut W) -> io::Result<Option<WellQuery>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(
            output,
            "Would you like to test the water at a specific point? (y/n) "
        )?;
        output.flush()?;

        match read_trimmed_line(input)? {
            None => return Ok(None),
            Some(answer) if answer == "y" || answer == "Y" => break,
            Some(answer) if answer == "n" || answer == "N" => return Ok(None),
            Some(_) => writeln!(output, "Please answer y or n.")?,
        }
    }

    let x = loop {
        write!(output, "Distance downgradient of the source (m): ")?;
        output.flush()?;

        match read_trimmed_line(input)? {
            None => return Ok(None),
            Some(answer) => match answer.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => break value,
                _ => writeln!(
                    output,
                    "That is not a valid location. Enter a positive distance \
                     downgradient of the source."
                )?,
            },
        }
    };

    let y = loop {
        write!(output, "Distance from the plume centerline (m): ")?;
        output.flush()?;

        match read_trimmed_line(input)? {
            None => return Ok(None),
            Some(answer) => match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => break value,
                _ => writeln!(
                    output,
                    "That is not a valid offset. Enter a distance from the \
                     centerline (negative for the far side)."
                )?,
            },
        }
    };

    Ok(Some(WellQuery { x, y }))
}

/// Run the full well-query exchange against a model.
///
/// Prompts for a location, evaluates the model there and reports the
/// reading to two decimals. A declined query writes nothing further.
///
/// # Arguments
///
/// * `model` - Concentration model to read from
/// * `input` - Where to read answers from
/// * `output` - Where to write prompts and the reading to
///
/// # Example
///
/// ```rust
/// use plume_rs::cli::run_well_query;
/// use plume_rs::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
/// use std::io::Cursor;
///
/// let plume = DomenicoPlume::new(
///     SourceGeometry::new(10.0, 5.0, 100.0),
///     AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0),
///     36_500.0,
/// );
///
/// let mut input = Cursor::new("y\n50\n0\n");
/// let mut output = Vec::new();
/// run_well_query(&plume, &mut input, &mut output)?;
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("µg/L"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn run_well_query<M, R, W>(model: &M, input: &mut R, output: &mut W) -> io::Result<()>
where
    M: ConcentrationModel + ?Sized,
    R: BufRead,
    W: Write,
{
    if let Some(query) = prompt_well_query(input, output)? {
        let reading = model.concentration_at(query.x, query.y);
        writeln!(
            output,
            "Estimated concentration at ({} m, {} m): {:.2} µg/L",
            query.x, query.y, reading
        )?;
    }

    Ok(())
}

/// Read one line, trimmed. `None` marks end of input.
fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// =================================================================================================
// Tests
// =================================================================================================
