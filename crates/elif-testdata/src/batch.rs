//! Batch construction of test data
//!
//! Every element is built by one factory call, strictly in index order, with
//! the same instantiation closure reused across the whole batch. A closure
//! that counts or otherwise mutates captured state therefore sees the effect
//! of every earlier element.

use crate::{factory, Customizations, TestDataConfig, TestDataResult};

/// Create `size` default-constructed objects, each customized independently
pub fn create_list_of<T: Default>(
    size: usize,
    customizations: &Customizations<'_, T>,
) -> TestDataResult<Vec<T>> {
    create_list_of_with(size, T::default, customizations)
}

/// Create `size` objects with `instantiate`, each customized independently
///
/// `size` must not exceed [`TestDataConfig::default`]'s bound (65535). With a
/// `size` of zero neither `instantiate` nor any customization is invoked.
pub fn create_list_of_with<T, I>(
    size: usize,
    instantiate: I,
    customizations: &Customizations<'_, T>,
) -> TestDataResult<Vec<T>>
where
    I: FnMut() -> T,
{
    let mut results = Vec::new();
    extend_with(
        &mut results,
        size,
        instantiate,
        customizations,
        &TestDataConfig::default(),
    )?;
    Ok(results)
}

/// Append `size` freshly built objects to `target`
///
/// If an element fails, the elements built before it stay in `target`.
pub fn extend_with<T, I>(
    target: &mut Vec<T>,
    size: usize,
    mut instantiate: I,
    customizations: &Customizations<'_, T>,
    config: &TestDataConfig,
) -> TestDataResult<()>
where
    I: FnMut() -> T,
{
    config.check_batch_size(size)?;
    tracing::debug!(
        size,
        max = *config.get_max_batch_size(),
        customizations = customizations.len(),
        "creating test data batch"
    );

    target.reserve(size);
    for index in 0..size {
        let item = factory::create_with(&mut instantiate, customizations).map_err(|e| {
            tracing::debug!(index, error = %e, "batch element failed");
            e
        })?;
        target.push(item);
    }
    Ok(())
}

/// Parallel variant of [`create_list_of_with`]
///
/// Results keep index order and the batch still holds exactly `size`
/// elements, but `instantiate` and the customizations run on rayon's pool
/// in no particular order. Callers relying on sequential side effects (a
/// counter shared across elements, for instance) must use the sequential
/// functions instead.
#[cfg(feature = "parallel")]
pub fn create_list_of_par<T, I>(
    size: usize,
    instantiate: I,
    customizations: &Customizations<'_, T>,
    config: &TestDataConfig,
) -> TestDataResult<Vec<T>>
where
    T: Send,
    I: Fn() -> T + Send + Sync,
{
    use rayon::prelude::*;

    config.check_batch_size(size)?;
    tracing::debug!(size, "creating test data batch in parallel");

    (0..size)
        .into_par_iter()
        .map(|_| factory::create_with(&instantiate, customizations))
        .collect()
}
