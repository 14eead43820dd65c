/// Escape Python source so it can sit verbatim inside a JavaScript
/// template literal without terminating it or triggering interpolation.
///
/// The backslash pass must run first: the backtick and `${` passes
/// introduce backslashes of their own that must not be doubled again.
pub fn escape_for_js_template_literal(python_code: &str) -> String {
    python_code
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_backslashes() {
        assert_eq!(
            escape_for_js_template_literal(r"print('Hello \n World')"),
            r"print('Hello \\n World')"
        );
        assert_eq!(
            escape_for_js_template_literal(r"path = 'c:\users\name'"),
            r"path = 'c:\\users\\name'"
        );
    }

    #[test]
    fn escapes_backticks() {
        assert_eq!(
            escape_for_js_template_literal("print(f`Hello`)"),
            r"print(f\`Hello\`)"
        );
    }

    #[test]
    fn escapes_interpolation_sequences() {
        assert_eq!(
            escape_for_js_template_literal("const x = `${variable}`"),
            r"const x = \`\${variable}\`"
        );
    }

    #[test]
    fn backslash_pass_runs_first() {
        // A pre-escaped backtick must come out with the backslash doubled
        // and the backtick escaped on its own, not swallowed.
        assert_eq!(escape_for_js_template_literal(r"\`"), r"\\\`");
        assert_eq!(escape_for_js_template_literal(r"\${"), r"\\\${");
    }

    #[test]
    fn passes_through_everything_else() {
        assert_eq!(escape_for_js_template_literal(""), "");
        assert_eq!(
            escape_for_js_template_literal("line1\nline2\ttab\n日本語 🚀"),
            "line1\nline2\ttab\n日本語 🚀"
        );
        // A bare dollar sign not followed by a brace is left alone.
        assert_eq!(escape_for_js_template_literal("cost = $5"), "cost = $5");
    }

    #[test]
    fn output_has_no_unescaped_backtick_or_interpolation() {
        let inputs = [
            "st.markdown(`raw`)",
            r"weird \` mix ${a} \\ ${b} ``",
            "${${${",
            "```",
        ];
        for input in inputs {
            let escaped = escape_for_js_template_literal(input);
            let bytes = escaped.as_bytes();
            for (i, &b) in bytes.iter().enumerate() {
                if b == b'`' {
                    assert!(i > 0 && bytes[i - 1] == b'\\', "bare backtick in {escaped:?}");
                }
                if b == b'{' && i > 0 && bytes[i - 1] == b'$' {
                    assert!(i > 1 && bytes[i - 2] == b'\\', "bare ${{ in {escaped:?}");
                }
            }
        }
    }

    #[test]
    fn round_trips_through_a_template_literal() {
        // Simulate a JS engine reading the escaped text back out of a
        // template literal: \\ -> \, \` -> `, \$ -> $.
        fn unescape(s: &str) -> String {
            let mut out = String::with_capacity(s.len());
            let mut chars = s.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    match chars.next() {
                        Some(next) => out.push(next),
                        None => out.push(c),
                    }
                } else {
                    out.push(c);
                }
            }
            out
        }

        let samples = [
            r"print('Hello \n World')",
            "st.write(f`${x}`)",
            "plain text, no escapes",
            r"c:\path\to\file",
        ];
        for s in samples {
            assert_eq!(unescape(&escape_for_js_template_literal(s)), s);
        }
    }
}
