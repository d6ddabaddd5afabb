//! Factory system for test data generation
//!
//! Builds one object at a time: construct it (through `Default` or an
//! instantiation closure), then run it through a [`Customizations`] list.
//! [`TestDataFactory`] packages both halves for reuse across many builds.

use crate::customization::CustomizationBounds;
use crate::{batch, Customizations, TestDataConfig, TestDataError, TestDataResult};
use std::fmt;

/// Create a default-constructed `T` and apply `customizations`
///
/// Only types with a parameterless constructor qualify:
///
/// ```compile_fail
/// use elif_testdata::{create, Customizations};
///
/// struct NoDefault(u32);
///
/// let value = create::<NoDefault>(&Customizations::new());
/// ```
pub fn create<T: Default>(customizations: &Customizations<'_, T>) -> TestDataResult<T> {
    create_with(T::default, customizations)
}

/// Create a `T` with `instantiate` and apply `customizations`
///
/// `instantiate` runs exactly once and its value is returned as is, after
/// customization.
pub fn create_with<T, I>(instantiate: I, customizations: &Customizations<'_, T>) -> TestDataResult<T>
where
    I: FnOnce() -> T,
{
    let mut obj = instantiate();
    customizations.apply(&mut obj)?;
    Ok(obj)
}

/// Like [`create_with`], for instantiation closures that may produce nothing
///
/// An absent value passes through untouched when there is nothing to apply.
/// Otherwise it fails with [`TestDataError::MissingTarget`].
pub fn try_create_with<T, I>(
    instantiate: I,
    customizations: &Customizations<'_, T>,
) -> TestDataResult<Option<T>>
where
    I: FnOnce() -> Option<T>,
{
    match instantiate() {
        Some(mut obj) => {
            customizations.apply(&mut obj)?;
            Ok(Some(obj))
        }
        None if customizations.is_empty() => Ok(None),
        None => {
            tracing::debug!("instantiation produced no object to customize");
            Err(TestDataError::MissingTarget)
        }
    }
}

/// Factory trait for creating test data
pub trait Factory<T> {
    /// Build a single instance
    fn build(&mut self) -> TestDataResult<T>;

    /// Build multiple instances, in order
    ///
    /// `count` is bounded by [`TestDataConfig::default`]; implementors with
    /// their own configuration override this.
    fn build_many(&mut self, count: usize) -> TestDataResult<Vec<T>> {
        TestDataConfig::default().check_batch_size(count)?;
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.build()?);
        }
        Ok(results)
    }
}

type Instantiation<'a, T> = Box<dyn FnMut() -> T + 'a>;

/// Reusable factory combining an instantiation closure, customizations and
/// configuration
pub struct TestDataFactory<'a, T> {
    instantiate: Instantiation<'a, T>,
    customizations: Customizations<'a, T>,
    config: TestDataConfig,
}

impl<'a, T: Default + 'a> TestDataFactory<'a, T> {
    /// Create a factory that default-constructs every object
    pub fn new() -> Self {
        Self::using(T::default)
    }
}

impl<'a, T: 'a> TestDataFactory<'a, T> {
    /// Create a factory around an instantiation closure
    pub fn using<I>(instantiate: I) -> Self
    where
        I: FnMut() -> T + 'a,
    {
        Self {
            instantiate: Box::new(instantiate),
            customizations: Customizations::new(),
            config: TestDataConfig::default(),
        }
    }

    /// Append a customization applied to every built object
    pub fn customize_with<F>(mut self, customization: F) -> Self
    where
        F: Fn(&mut T) + CustomizationBounds + 'a,
    {
        self.customizations.push(customization);
        self
    }

    /// Replace the customization list
    pub fn customize_with_all(mut self, customizations: Customizations<'a, T>) -> Self {
        self.customizations = customizations;
        self
    }

    pub fn with_config(mut self, config: TestDataConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TestDataConfig {
        &self.config
    }

    pub fn customizations(&self) -> &Customizations<'a, T> {
        &self.customizations
    }
}

impl<'a, T: Default + 'a> Default for TestDataFactory<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Factory<T> for TestDataFactory<'a, T> {
    fn build(&mut self) -> TestDataResult<T> {
        create_with(&mut self.instantiate, &self.customizations)
    }

    fn build_many(&mut self, count: usize) -> TestDataResult<Vec<T>> {
        let mut results = Vec::new();
        batch::extend_with(
            &mut results,
            count,
            &mut self.instantiate,
            &self.customizations,
            &self.config,
        )?;
        Ok(results)
    }
}

impl<'a, T> fmt::Debug for TestDataFactory<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDataFactory")
            .field("customizations", &self.customizations)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sequence, TestDataConfigBuilder};
    use std::cell::Cell;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct User {
        name: String,
        admin: bool,
    }

    struct Ticket {
        number: usize,
    }

    #[test]
    fn test_create_default() -> TestDataResult<()> {
        let user: User = create(&Customizations::new())?;

        assert_eq!(user, User::default());
        Ok(())
    }

    #[test]
    fn test_create_with_invokes_instantiation_once() -> TestDataResult<()> {
        let calls = Cell::new(0);
        let ticket = create_with(
            || {
                calls.set(calls.get() + 1);
                Ticket { number: 42 }
            },
            &Customizations::new(),
        )?;

        assert_eq!(ticket.number, 42);
        assert_eq!(calls.get(), 1);
        Ok(())
    }

    #[test]
    fn test_create_applies_customizations() -> TestDataResult<()> {
        let user = create(
            &Customizations::new()
                .then(|u: &mut User| u.name = "John Doe".to_string())
                .then(|u: &mut User| u.admin = true),
        )?;

        assert_eq!(user.name, "John Doe");
        assert!(user.admin);
        Ok(())
    }

    #[test]
    fn test_create_propagates_missing_customization() {
        let result = create::<User>(&Customizations::new().then_absent());

        assert_eq!(
            result.unwrap_err(),
            TestDataError::MissingCustomization { index: 0 }
        );
    }

    #[test]
    fn test_try_create_with_absent_and_no_customizations() -> TestDataResult<()> {
        let result = try_create_with(|| None::<User>, &Customizations::new())?;

        assert!(result.is_none());
        Ok(())
    }

    #[test]
    fn test_try_create_with_absent_and_customizations() {
        let result = try_create_with(
            || None::<User>,
            &Customizations::new().then(|u: &mut User| u.admin = true),
        );

        assert_eq!(result.unwrap_err(), TestDataError::MissingTarget);
    }

    #[test]
    fn test_try_create_with_present() -> TestDataResult<()> {
        let user = try_create_with(
            || Some(User::default()),
            &Customizations::new().then(|u: &mut User| u.admin = true),
        )?;

        assert_eq!(user.map(|u| u.admin), Some(true));
        Ok(())
    }

    #[test]
    fn test_factory_build() -> TestDataResult<()> {
        let mut factory = TestDataFactory::<User>::new()
            .customize_with(|u| u.name = "Test User".to_string());

        let user = factory.build()?;

        assert_eq!(user.name, "Test User");
        assert!(!user.admin);
        Ok(())
    }

    #[test]
    fn test_factory_build_many_with_sequence() -> TestDataResult<()> {
        let seq = Sequence::new();
        let mut factory = TestDataFactory::using(|| Ticket { number: seq.next() })
            .customize_with(|t: &mut Ticket| t.number *= 10);

        let tickets = factory.build_many(3)?;

        let numbers: Vec<usize> = tickets.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![0, 10, 20]);
        Ok(())
    }

    #[test]
    fn test_factory_build_many_honours_config() {
        let config = TestDataConfigBuilder::new()
            .max_batch_size(2)
            .build()
            .expect("Failed to build config");
        let mut factory = TestDataFactory::<User>::new().with_config(config);

        let result = factory.build_many(3);

        assert_eq!(
            result.unwrap_err(),
            TestDataError::BatchTooLarge {
                requested: 3,
                max: 2
            }
        );
        assert_eq!(*factory.config().get_max_batch_size(), 2);
    }

    #[test]
    fn test_factory_customize_with_all() -> TestDataResult<()> {
        let mut factory = TestDataFactory::<User>::new().customize_with_all(
            Customizations::new()
                .then(|u: &mut User| u.name = "admin".into())
                .then(|u: &mut User| u.admin = true),
        );

        assert_eq!(factory.customizations().len(), 2);
        let user = factory.build()?;
        assert!(user.admin);
        Ok(())
    }

    struct Counter {
        built: usize,
    }

    impl Factory<usize> for Counter {
        fn build(&mut self) -> TestDataResult<usize> {
            self.built += 1;
            Ok(self.built)
        }
    }

    #[test]
    fn test_default_build_many_is_bounded() {
        let mut counter = Counter { built: 0 };

        let result = counter.build_many(70_000);

        assert_eq!(
            result.unwrap_err(),
            TestDataError::BatchTooLarge {
                requested: 70_000,
                max: 65_535
            }
        );
        assert_eq!(counter.built, 0);
    }

    #[test]
    fn test_default_build_many_builds_in_order() -> TestDataResult<()> {
        let mut counter = Counter { built: 0 };

        assert_eq!(counter.build_many(3)?, vec![1, 2, 3]);
        Ok(())
    }
}
