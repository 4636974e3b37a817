use crate::{data::seven_segment::SEGMENTS, error::{NetError, Result}, math::matrix::Matrix};

/// Width of one rendered digit in characters.
pub const DIGIT_WIDTH: usize = 9;
/// Rows per digit: three bars plus two 4-row vertical sections.
pub const DIGIT_HEIGHT: usize = 11;
const VERTICAL_ROWS: usize = 4;
const BAR: &str = " # # # # ";

/// A segment is lit when its output is strictly above 0.5.
pub fn threshold(values: &[f64]) -> Vec<bool> {
    values.iter().map(|&v| v > 0.5).collect()
}

/// Renders one 7-element output vector as ASCII art, one line per row,
/// without a trailing newline. An unlit bar becomes an empty line.
pub fn render_digit(values: &[f64]) -> Result<String> {
    let rows = digit_rows(values, "")?;
    Ok(rows.join("\n"))
}

/// Renders every row of `outputs` next to each other, separated by `gap`
/// spaces. Trailing whitespace is trimmed from each line.
pub fn render_side_by_side(outputs: &Matrix, gap: usize) -> Result<String> {
    let blank_bar = " ".repeat(DIGIT_WIDTH);
    let digits = outputs
        .iter_rows()
        .map(|values| digit_rows(values, &blank_bar))
        .collect::<Result<Vec<_>>>()?;

    let spacer = " ".repeat(gap);
    let lines: Vec<String> = (0..DIGIT_HEIGHT)
        .map(|r| {
            let line = digits.iter().map(|rows| rows[r].as_str()).collect::<Vec<_>>().join(spacer.as_str());
            line.trim_end().to_string()
        })
        .collect();
    Ok(lines.join("\n"))
}

fn digit_rows(values: &[f64], unlit_bar: &str) -> Result<Vec<String>> {
    if values.len() != SEGMENTS {
        return Err(NetError::ShapeMismatch {
            op: "render",
            left: (1, values.len()),
            right: (1, SEGMENTS),
        });
    }
    let lit = threshold(values);
    let mark = |on: bool| if on { '#' } else { ' ' };
    let bar = |on: bool| if on { BAR.to_string() } else { unlit_bar.to_string() };
    let vertical = |left: bool, right: bool| format!("{}       {}", mark(left), mark(right));

    let (a, b, c, d, e, f, g) = (lit[0], lit[1], lit[2], lit[3], lit[4], lit[5], lit[6]);

    let mut rows = Vec::with_capacity(DIGIT_HEIGHT);
    rows.push(bar(a));
    rows.extend(std::iter::repeat(vertical(f, b)).take(VERTICAL_ROWS));
    rows.push(bar(g));
    rows.extend(std::iter::repeat(vertical(e, c)).take(VERTICAL_ROWS));
    rows.push(bar(d));
    Ok(rows)
}
