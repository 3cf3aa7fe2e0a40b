/// Trait defining how a single line of text is mapped to its replacement.
///
/// The line never carries its terminator. Implementations are held for the whole
/// lifetime of a transformer and are only ever borrowed immutably, so one instance
/// can serve any number of (possibly concurrent) transforms.
pub trait Transformation {
    /// Transforms one input line into one output line.
    fn apply(&self, line: &str) -> anyhow::Result<String>;
}

impl<F> Transformation for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, line: &str) -> anyhow::Result<String> {
        Ok(self(line))
    }
}

/// Adapter for closures that can fail.
/// Their error is handed back to the caller untouched.
#[derive(Clone)]
pub struct Fallible<F>(pub F);

impl<F> Transformation for Fallible<F>
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    fn apply(&self, line: &str) -> anyhow::Result<String> {
        (self.0)(line)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UpperCase;

impl Transformation for UpperCase {
    fn apply(&self, line: &str) -> anyhow::Result<String> {
        Ok(line.to_uppercase())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LowerCase;

impl Transformation for LowerCase {
    fn apply(&self, line: &str) -> anyhow::Result<String> {
        Ok(line.to_lowercase())
    }
}

/// Copies every line as is. Handy for normalizing line terminators.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Transformation for Identity {
    fn apply(&self, line: &str) -> anyhow::Result<String> {
        Ok(line.to_owned())
    }
}
