//! Random repository selection

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::models::RepoId;

/// Pick one repository uniformly at random
///
/// Returns `None` only for an empty slice; configuration loading rejects
/// empty repository lists, so callers can treat that as unreachable.
pub fn select<'a, R>(repos: &'a [RepoId], rng: &mut R) -> Option<&'a RepoId>
where
    R: Rng + ?Sized,
{
    repos.choose(rng)
}
