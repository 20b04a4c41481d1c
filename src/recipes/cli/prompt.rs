use std::io::{self, BufRead, Write};

pub const DELETE_QUESTION: &str = "Delete this recipe?";

/// Asks a yes/no question; anything but "y" or "yes" (including end of input) is a no.
pub fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "{} [y/N] ", question)?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answer: &str) -> (bool, String) {
        let mut out = Vec::new();
        let yes = confirm(DELETE_QUESTION, &mut Cursor::new(answer), &mut out).unwrap();
        (yes, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_y_and_yes() {
        assert!(ask("y\n").0);
        assert!(ask(" YES \n").0);
    }

    #[test]
    fn anything_else_declines() {
        assert!(!ask("\n").0);
        assert!(!ask("nope\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn shows_the_question() {
        assert_eq!(ask("n\n").1, "Delete this recipe? [y/N] ");
    }
}
