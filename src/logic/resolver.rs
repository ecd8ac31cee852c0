//! Statement-boundary resolution over a line buffer.
//!
//! A statement is a run of lines closed by a line that contains `;`. Lines are
//! matched naively: a `;` inside a string literal or a comment still counts as
//! a terminator. Given the cursor line, [`resolve`] finds the statement the
//! cursor belongs to, or the statement it is still being typed into.
//!
//! Resolution is a pure function of the lines and the cursor line. Nothing is
//! cached between calls, so resolving the same input twice gives the same range.
use crate::*;

/// Character closing a statement.
pub const TERMINATOR: char = ';';

/// True if `line` contains a statement terminator anywhere.
pub fn has_terminator(line: &str) -> bool {
    line.contains(TERMINATOR)
}

/// Split buffer text into lines on `'\n'`, keeping a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Resolve the statement under `cursor_line`.
///
/// If the cursor line is itself terminated, the statement runs from the line
/// after the previous terminator (or the top of the buffer) through the cursor
/// line. Otherwise it runs from the line after the nearest terminator at or
/// above the cursor through the nearest terminator at or below it.
///
/// Errors:
/// - [`Error::InvalidArgument`] when the buffer is empty or `cursor_line` is
///   outside it.
/// - [`Error::UnterminatedStatement`] when no line from the cursor to the end of
///   the buffer is terminated.
pub fn resolve<S: AsRef<str>>(lines: &[S], cursor_line: usize) -> Result<LineRange> {
    if cursor_line >= lines.len() {
        return Err(Error::InvalidArgument {
            line: cursor_line,
            len: lines.len(),
        });
    }
    let terminated = |i: usize| has_terminator(lines[i].as_ref());

    let range = if terminated(cursor_line) {
        let start = previous_terminator(cursor_line, terminated).map_or(0, |i| i + 1);
        trace!("Cursor line {cursor_line} is terminated, statement starts at {start}");
        LineRange::new(start, cursor_line + 1)
    } else {
        let qend = (cursor_line..lines.len())
            .find(|&i| terminated(i))
            .ok_or(Error::UnterminatedStatement { line: cursor_line })?;
        let start = (0..=cursor_line)
            .rev()
            .find(|&i| terminated(i))
            .map_or(0, |i| i + 1);
        trace!("Cursor line {cursor_line} is open, statement spans {start}..={qend}");
        LineRange::new(start, qend + 1)
    };

    debug!("Cursor line {cursor_line} resolved to statement {range}");
    Ok(range)
}

/// Split `text` and resolve the statement under `cursor_line`.
///
/// Empty text is an empty buffer, not one blank line, and is rejected with
/// [`Error::InvalidArgument`].
pub fn resolve_text(text: &str, cursor_line: usize) -> Result<LineRange> {
    if text.is_empty() {
        return Err(Error::InvalidArgument {
            line: cursor_line,
            len: 0,
        });
    }
    resolve(&split_lines(text), cursor_line)
}

/// Text of the statement `range` covers in `lines`.
pub fn statement_text<S: AsRef<str>>(lines: &[S], range: LineRange) -> String {
    range.text(lines)
}

/// Nearest terminated line strictly above `line`.
fn previous_terminator(line: usize, terminated: impl Fn(usize) -> bool) -> Option<usize> {
    (0..line).rev().find(|&i| terminated(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::Rng as _;

    #[rstest]
    // Every line terminated: just the cursor line.
    #[case(&["SELECT 1;", "SELECT 2;", "SELECT 3;"], 1, 1..2)]
    // Cursor mid-statement between two terminators.
    #[case(&["SELECT 1;", "SELECT 2", "FROM t;"], 1, 1..3)]
    // Cursor before the first terminator.
    #[case(&["SELECT 1", "FROM t;"], 0, 0..2)]
    // Terminated cursor line with no terminator above.
    #[case(&["SELECT *", "FROM t", "WHERE a = 1;"], 2, 0..3)]
    // Terminated cursor line with a terminator further up.
    #[case(&["SELECT 1;", "", "SELECT *", "FROM t;"], 3, 1..4)]
    // Blank line following a terminator belongs to the next statement.
    #[case(&["SELECT 1;", "", "SELECT 2;"], 1, 1..3)]
    // Several terminators on one line still count once.
    #[case(&["SELECT 1; SELECT 2;", "SELECT 3;"], 0, 0..1)]
    // Semicolon inside a literal is still a terminator.
    #[case(&["SELECT ';'", "FROM t;"], 0, 0..1)]
    // Single terminated line.
    #[case(&["A;"], 0, 0..1)]
    fn resolves_statement_range(
        #[case] lines: &[&str],
        #[case] cursor_line: usize,
        #[case] expected: std::ops::Range<usize>,
    ) {
        common_init();
        let range = resolve(lines, cursor_line).expect("statement should resolve");
        assert_eq!(range, LineRange::from(expected));
    }

    #[rstest]
    #[case(&["A;"], 5)]
    #[case(&["A;", "B;"], 2)]
    #[case(&[], 0)]
    fn out_of_bounds_cursor_is_invalid(#[case] lines: &[&str], #[case] cursor_line: usize) {
        let err = resolve(lines, cursor_line).unwrap_err();
        assert!(
            matches!(err, Error::InvalidArgument { line, len } if line == cursor_line && len == lines.len()),
            "Unexpected error {err:?}"
        );
    }

    #[rstest]
    #[case(&["SELECT 1", "FROM t"], 0)]
    #[case(&["SELECT 1;", "SELECT 2", "FROM t"], 1)]
    #[case(&["SELECT 1;", ""], 1)]
    fn missing_forward_terminator_is_unterminated(
        #[case] lines: &[&str],
        #[case] cursor_line: usize,
    ) {
        let err = resolve(lines, cursor_line).unwrap_err();
        assert!(
            matches!(err, Error::UnterminatedStatement { line } if line == cursor_line),
            "Unexpected error {err:?}"
        );
    }

    #[test]
    fn resolve_text_splits_on_newlines() {
        let text = "SELECT * FROM a;\nSELECT *\nFROM b;\n";
        assert_eq!(resolve_text(text, 2).unwrap(), LineRange::from(1..3));
        // Trailing newline leaves an empty, unterminated last line.
        assert!(matches!(
            resolve_text(text, 3),
            Err(Error::UnterminatedStatement { line: 3 })
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    fn empty_text_is_invalid(#[case] cursor_line: usize) {
        let err = resolve_text("", cursor_line).unwrap_err();
        assert!(
            matches!(err, Error::InvalidArgument { line, len: 0 } if line == cursor_line),
            "Unexpected error {err:?}"
        );
    }

    #[test]
    fn statement_text_joins_covered_lines() {
        let lines = split_lines("SELECT 1;\nSELECT *\nFROM t;");
        let range = resolve(&lines, 1).unwrap();
        assert_eq!(statement_text(&lines, range), "SELECT *\nFROM t;");
    }

    /// Independent restatement of the resolution rules used to check random buffers.
    fn expected_range(lines: &[String], c: usize) -> Option<(usize, usize)> {
        let term: Vec<bool> = lines.iter().map(|l| l.contains(';')).collect();
        if term[c] {
            let start = (0..c).rev().find(|&i| term[i]).map(|i| i + 1).unwrap_or(0);
            Some((start, c + 1))
        } else {
            let qend = (c..lines.len()).find(|&i| term[i])?;
            let start = (0..=c).rev().find(|&i| term[i]).map(|i| i + 1).unwrap_or(0);
            Some((start, qend + 1))
        }
    }

    #[test]
    fn random_buffers_obey_range_laws() {
        const PIECES: [&str; 6] = ["SELECT 1", "FROM t", "", ";", "WHERE x = 'a;b'", "  -- ;"];
        let mut rng = rand::rng();
        for _ in 0..500 {
            let len = rng.random_range(1..12);
            let lines: Vec<String> = (0..len)
                .map(|_| PIECES[rng.random_range(0..PIECES.len())].to_string())
                .collect();
            let c = rng.random_range(0..len);

            let first = resolve(&lines, c);
            let second = resolve(&lines, c);
            match (expected_range(&lines, c), first, second) {
                (Some((start, end)), Ok(a), Ok(b)) => {
                    assert_eq!(a, b, "resolution must be idempotent for {lines:?} @ {c}");
                    assert_eq!((a.start(), a.end()), (start, end), "{lines:?} @ {c}");
                    assert!(a.start() <= a.end());
                    assert!(a.contains(c), "{a} should cover cursor line {c}");
                    // Only the last covered line is terminated.
                    let covered = a.slice(&lines);
                    assert!(has_terminator(covered.last().unwrap()));
                    assert!(covered[..covered.len() - 1].iter().all(|l| !has_terminator(l)));
                }
                (None, Err(Error::UnterminatedStatement { line }), Err(_)) => {
                    assert_eq!(line, c);
                    assert!(lines[c..].iter().all(|l| !has_terminator(l)));
                }
                (expected, a, b) => {
                    panic!("Mismatch for {lines:?} @ {c}: expected {expected:?}, got {a:?} / {b:?}")
                }
            }

            assert!(matches!(
                resolve(&lines, len + c),
                Err(Error::InvalidArgument { .. })
            ));
        }
    }
}
