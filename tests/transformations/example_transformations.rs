#[cfg(test)]
pub mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::bail;
    use text_file_transformer::transformation::Transformation;
    use tracing::trace;

    /// Prefixes each line with a running line number. Only ever borrowed, so the
    /// counter lives in an atomic.
    #[derive(Default)]
    pub struct LineNumbers {
        pub seen: AtomicUsize,
    }

    impl Transformation for LineNumbers {
        fn apply(&self, line: &str) -> anyhow::Result<String> {
            let n = self.seen.fetch_add(1, Ordering::SeqCst) + 1;
            trace!("numbering line {}", n);
            Ok(format!("{n}: {line}"))
        }
    }

    /// Fails as soon as it meets the given line.
    pub struct FailOn(pub &'static str);

    impl Transformation for FailOn {
        fn apply(&self, line: &str) -> anyhow::Result<String> {
            if line == self.0 {
                bail!("refusing to transform {:?}", line);
            }
            Ok(line.to_uppercase())
        }
    }

    pub fn shout(line: &str) -> String {
        format!("{}!", line.to_uppercase())
    }
}
