use crate::lexer::Token;
use std::fmt;

/// Wrap a formatting closure so it can be used wherever `Display` is expected.
pub(crate) fn display_fn<F>(render: F) -> impl fmt::Display
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    struct Rendered<F>(F);

    impl<F> fmt::Display for Rendered<F>
    where
        F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            (self.0)(f)
        }
    }

    Rendered(render)
}

/// Display a token sequence separated by single spaces.
pub fn display_tokens<'a>(tokens: &'a [Token<'a>]) -> impl fmt::Display + 'a {
    display_fn(move |f| {
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    })
}
