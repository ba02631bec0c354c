use std::ffi::OsStr;

/// How each level is presented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Connected line segments in a single colour.
    #[default]
    Plain,
    /// Supersampled vertex coverage drawn in grey shades.
    Antialiased,
}

const ANTIALIAS_PREFIX: &str = "-aa";
const ANTIALIAS_TOKENS: &[&str] = &["aa", "antialias"];

impl RenderMode {
    /// Picks the mode from the first positional argument after the program
    /// name. Anything starting with `-aa`, or the words `aa` and `antialias`
    /// with any leading dashes, selects [`RenderMode::Antialiased`]. Anything
    /// else, including arguments that are not valid UTF-8, is
    /// [`RenderMode::Plain`].
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let flag = args.into_iter().nth(1);

        match flag.as_ref().and_then(|flag| flag.as_ref().to_str()) {
            Some(flag) if Self::is_antialias_token(flag) => Self::Antialiased,
            _ => Self::Plain,
        }
    }

    fn is_antialias_token(flag: &str) -> bool {
        if flag.starts_with(ANTIALIAS_PREFIX) {
            return true;
        }

        let token = flag.trim_start_matches('-').to_ascii_lowercase();
        ANTIALIAS_TOKENS.contains(&token.as_str())
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Plain => "plain",
            Self::Antialiased => "antialiased",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_argument_is_plain() {
        assert_eq!(RenderMode::from_args(["snowflake"]), RenderMode::Plain);
    }

    #[test]
    fn test_aa_flag_is_antialiased() {
        assert_eq!(RenderMode::from_args(["snowflake", "-aa"]), RenderMode::Antialiased);
        assert_eq!(RenderMode::from_args(["snowflake", "aa"]), RenderMode::Antialiased);
    }

    #[test]
    fn test_antialias_word_is_antialiased() {
        assert_eq!(
            RenderMode::from_args(["snowflake", "--antialias"]),
            RenderMode::Antialiased
        );
        assert_eq!(
            RenderMode::from_args(["snowflake", "ANTIALIAS"]),
            RenderMode::Antialiased
        );
    }

    #[test]
    fn test_other_flags_are_plain() {
        assert_eq!(RenderMode::from_args(["snowflake", "-x"]), RenderMode::Plain);
        assert_eq!(RenderMode::from_args(["snowflake", "aax"]), RenderMode::Plain);
        assert_eq!(RenderMode::from_args(["snowflake", "-a"]), RenderMode::Plain);
    }

    #[test]
    fn test_aa_prefix_is_antialiased() {
        assert_eq!(RenderMode::from_args(["snowflake", "-aax"]), RenderMode::Antialiased);
        assert_eq!(RenderMode::from_args(["snowflake", "-aa=on"]), RenderMode::Antialiased);
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_argument_is_plain() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStrExt;

        let args = vec![
            OsString::from("snowflake"),
            OsStr::from_bytes(b"\xff").to_os_string(),
        ];

        assert_eq!(RenderMode::from_args(args), RenderMode::Plain);
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_after_flag_is_ignored() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStrExt;

        let args = vec![
            OsString::from("snowflake"),
            OsString::from("-aa"),
            OsStr::from_bytes(b"\xff").to_os_string(),
        ];

        assert_eq!(RenderMode::from_args(args), RenderMode::Antialiased);
    }

    #[test]
    fn test_only_first_positional_counts() {
        assert_eq!(
            RenderMode::from_args(["snowflake", "plain", "-aa"]),
            RenderMode::Plain
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args = vec!["snowflake".to_string(), "-aa".to_string()];

        assert_eq!(RenderMode::from_args(args), RenderMode::Antialiased);
    }
}
