/**
Renders a float using the shortest digits that round-trip back to the same value.

Integral values keep a trailing `.0`. Magnitudes below 1e-4 or at/above 1e16 are
written in exponent form with a signed exponent of at least two digits, e.g.
`1e+16` or `1.5e-05`. Non-finite values render as `inf`, `-inf` and `nan`.

## Arguments
- `value`: The value to render.

## Returns
The rendered string.
 */
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    // `{:?}` already gives shortest round-trip digits, switching to
    // exponent form at the same magnitudes; only the exponent differs.
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
