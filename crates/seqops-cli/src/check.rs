use crate::suite::Group;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("{group}() check failed: {description}")]
pub(crate) struct CheckFailure {
    group: Group,
    description: String,
}

/// Records the checks of one operation group and stops at the first failure.
#[derive(Debug)]
pub(crate) struct Checker {
    group: Group,
    verbose: bool,
    passed: usize,
}

impl Checker {
    pub(crate) fn new(group: Group, verbose: bool) -> Self {
        Self {
            group,
            verbose,
            passed: 0,
        }
    }

    pub(crate) fn passed(&self) -> usize {
        self.passed
    }

    pub(crate) fn ensure<D>(&mut self, ok: bool, description: D) -> Result<(), CheckFailure>
    where
        D: Into<String>,
    {
        let description = description.into();
        if !ok {
            return Err(CheckFailure {
                group: self.group,
                description,
            });
        }
        if self.verbose {
            eprintln!("  {}: {description} ... ok", self.group);
        }
        self.passed += 1;
        Ok(())
    }

    pub(crate) fn ensure_eq<T>(
        &mut self,
        actual: &T,
        expected: &T,
        what: &str,
    ) -> Result<(), CheckFailure>
    where
        T: PartialEq + std::fmt::Debug,
    {
        self.ensure(
            actual == expected,
            format!("{what}: expected {expected:?}, got {actual:?}"),
        )
    }
}
