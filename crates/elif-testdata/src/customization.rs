//! Customizations applied to already constructed objects
//!
//! A customization is a closure that mutates an object in place. An ordered
//! list of them is kept in [`Customizations`] and applied strictly in
//! insertion order, so later steps can build on (or overwrite) earlier ones.

use crate::{TestDataError, TestDataResult};
use std::fmt;

/// A single in-place mutation of `T`
#[cfg(not(feature = "parallel"))]
pub type Customization<'a, T> = Box<dyn Fn(&mut T) + 'a>;

/// A single in-place mutation of `T`, shareable with rayon's pool
#[cfg(feature = "parallel")]
pub type Customization<'a, T> = Box<dyn Fn(&mut T) + Send + Sync + 'a>;

/// Thread-safety required of customization closures
///
/// Empty unless the `parallel` feature is enabled, in which case every
/// customization must be `Send + Sync`.
#[cfg(not(feature = "parallel"))]
pub trait CustomizationBounds {}

#[cfg(not(feature = "parallel"))]
impl<F: ?Sized> CustomizationBounds for F {}

/// Thread-safety required of customization closures
#[cfg(feature = "parallel")]
pub trait CustomizationBounds: Send + Sync {}

#[cfg(feature = "parallel")]
impl<F: ?Sized + Send + Sync> CustomizationBounds for F {}

/// Ordered list of customization slots
///
/// A slot may be absent. Absent slots are only detected when [`apply`]
/// reaches them, after every preceding slot has already run.
///
/// [`apply`]: Customizations::apply
pub struct Customizations<'a, T> {
    steps: Vec<Option<Customization<'a, T>>>,
}

impl<'a, T> Customizations<'a, T> {
    /// Create an empty customization list
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a customization
    pub fn then<F>(mut self, customization: F) -> Self
    where
        F: Fn(&mut T) + CustomizationBounds + 'a,
    {
        self.steps.push(Some(Box::new(customization)));
        self
    }

    /// Append a customization that may be absent
    pub fn then_optional<F>(mut self, customization: Option<F>) -> Self
    where
        F: Fn(&mut T) + CustomizationBounds + 'a,
    {
        self.steps
            .push(customization.map(|f| Box::new(f) as Customization<'a, T>));
        self
    }

    /// Append an absent slot
    pub fn then_absent(mut self) -> Self {
        self.steps.push(None);
        self
    }

    /// Add a customization in place
    pub fn push<F>(&mut self, customization: F)
    where
        F: Fn(&mut T) + CustomizationBounds + 'a,
    {
        self.steps.push(Some(Box::new(customization)));
    }

    /// Build a list from slots that may individually be absent
    pub fn from_optional<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<Customization<'a, T>>>,
    {
        Self {
            steps: slots.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of absent slots
    pub fn absent_count(&self) -> usize {
        self.steps.iter().filter(|step| step.is_none()).count()
    }

    /// Run every customization against `target`, in order
    pub fn apply(&self, target: &mut T) -> TestDataResult<()> {
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                Some(customization) => {
                    tracing::trace!(index, "applying customization");
                    customization(&mut *target);
                }
                None => {
                    tracing::debug!(index, "absent customization aborted customize");
                    return Err(TestDataError::MissingCustomization { index });
                }
            }
        }
        Ok(())
    }
}

impl<'a, T> Default for Customizations<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> fmt::Debug for Customizations<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customizations")
            .field("len", &self.len())
            .field("absent", &self.absent_count())
            .finish()
    }
}

impl<'a, T, F> FromIterator<F> for Customizations<'a, T>
where
    F: Fn(&mut T) + CustomizationBounds + 'a,
{
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            steps: iter
                .into_iter()
                .map(|f| Some(Box::new(f) as Customization<'a, T>))
                .collect(),
        }
    }
}

impl<'a, T> From<Vec<Customization<'a, T>>> for Customizations<'a, T> {
    fn from(customizations: Vec<Customization<'a, T>>) -> Self {
        Self {
            steps: customizations.into_iter().map(Some).collect(),
        }
    }
}

/// Apply `customizations` to `target` and hand the same reference back
pub fn customize<'o, T>(
    target: &'o mut T,
    customizations: &Customizations<'_, T>,
) -> TestDataResult<&'o mut T> {
    customizations.apply(target)?;
    Ok(target)
}

/// Like [`customize`], for callers whose target or list may be absent
///
/// The target is checked first, then the list. Absent entries inside the
/// list fail when reached.
pub fn customize_nullable<'o, T>(
    target: Option<&'o mut T>,
    customizations: Option<&Customizations<'_, T>>,
) -> TestDataResult<&'o mut T> {
    let target = target.ok_or(TestDataError::MissingTarget)?;
    let customizations = customizations.ok_or(TestDataError::MissingCustomizations)?;
    customize(target, customizations)
}

/// Method-call form of [`customize`], available on every sized type
pub trait Customize: Sized {
    /// Customize in place, returning the same reference
    fn customize(&mut self, customizations: &Customizations<'_, Self>) -> TestDataResult<&mut Self> {
        customize(self, customizations)
    }

    /// Customize by value
    fn customized(mut self, customizations: &Customizations<'_, Self>) -> TestDataResult<Self> {
        customizations.apply(&mut self)?;
        Ok(self)
    }
}

impl<T> Customize for T {}
