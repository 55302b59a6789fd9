/// Diagnostic notifications about what the interpreter is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Echo<'a> {
    /// A variable was declared.
    Declaration {
        #[allow(missing_docs)]
        name: &'a str,
        #[allow(missing_docs)]
        value: &'a str,
    },
    /// A condition was evaluated.
    Condition {
        /// The condition as written, literals separated by spaces.
        text: &'a str,
        #[allow(missing_docs)]
        holds: bool,
    },
    /// An `otherwise` block is about to run.
    Otherwise,
}

/// Receives everything a running program produces.
pub trait Output {
    /// Called once per executed `displayln`.
    fn print(&mut self, text: &str);

    /// Ignores echoes unless overridden.
    fn echo(&mut self, _echo: &Echo<'_>) {}
}

impl Output for Vec<String> {
    fn print(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<O> Output for &mut O
where
    O: Output + ?Sized,
{
    fn print(&mut self, text: &str) {
        (**self).print(text);
    }

    fn echo(&mut self, echo: &Echo<'_>) {
        (**self).echo(echo);
    }
}
