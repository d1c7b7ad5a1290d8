/// Renders a float using the conventions of Python's `str(float)`.
///
/// The scoring tool names its report after the cutoffs it received on the command line, so the
/// cutoff strings passed to it and the strings used to predict the report name must be produced
/// by the same function. Integral values keep a trailing `.0` (`15.0`), values outside
/// `[1e-4, 1e16)` switch to scientific notation with a signed, two-digit exponent (`1e-05`,
/// `1.5e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:?}` already yields the shortest round-trip digits and switches to exponent form at
    // the same magnitudes as Python; only the exponent spelling differs.
    let debug = format!("{:?}", value);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => debug,
    }
}
