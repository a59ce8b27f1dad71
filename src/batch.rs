//! Hashing many inputs at once, on the rayon pool when the batch is large.
use rayon::prelude::*;

use crate::config::HashOptions;
use crate::error::Result;
use crate::sha1_hash::hash_sha1;

/// Hex digests of `inputs`, in input order.
pub fn hash_sha1_batch<S>(inputs: &[S], options: &HashOptions) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    let parallel = inputs.len() >= options.parallel_threshold();
    tracing::debug!(count = inputs.len(), parallel, "hashing batch");
    if parallel {
        inputs.par_iter().map(|input| hash_sha1(input.as_ref())).collect()
    } else {
        inputs.iter().map(|input| hash_sha1(input.as_ref())).collect()
    }
}
