//! Concurrent fan-out of one operation across all selected profiles
//!
//! Every profile gets its own future. Results are consumed by a single loop as
//! they complete, so merging needs no locking. The first error that is not
//! listed as benign aborts the whole operation and drops the remaining
//! in-flight requests.

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use crate::cosmic::CosmicClient;
use crate::error::{CosmicError, Result};
use crate::profiles::ProfileConfig;

/// Clients for the selected profiles, keyed by profile name
pub struct ClientSet<C = CosmicClient> {
    clients: BTreeMap<String, C>,
    deadline: Option<Duration>,
}

impl<C> Default for ClientSet<C> {
    fn default() -> Self {
        Self {
            clients: BTreeMap::new(),
            deadline: None,
        }
    }
}

impl<C> ClientSet<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a client for a profile
    pub fn insert(&mut self, profile: impl Into<String>, client: C) {
        self.clients.insert(profile.into(), client);
    }

    /// Bound the total time of every fan-out
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Profile names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clients.keys().map(String::as_str)
    }

    /// Client for a single profile
    pub fn get(&self, profile: &str) -> Option<&C> {
        self.clients.get(profile)
    }

    /// Run `op` against every profile concurrently and concatenate the results
    ///
    /// Errors whose message contains one of the `benign` substrings count as
    /// "no results from this profile". Any other error is returned wrapped with
    /// the profile name. Result order across profiles is unspecified.
    /// An empty set is a configuration error.
    pub async fn fan_out<'a, T, F, Fut>(&'a self, benign: &[&str], op: F) -> Result<Vec<T>>
    where
        F: Fn(&'a str, &'a C) -> Fut,
        Fut: Future<Output = Result<Vec<T>>> + 'a,
    {
        if self.clients.is_empty() {
            return Err(CosmicError::Config(
                "No profiles configured, add one to the config file".to_string(),
            ));
        }

        let run = self.collect(benign, op);
        match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, run).await.map_err(|_| {
                CosmicError::Timeout(format!(
                    "not all profiles answered within {}s",
                    deadline.as_secs()
                ))
            })?,
            None => run.await,
        }
    }

    async fn collect<'a, T, F, Fut>(&'a self, benign: &[&str], op: F) -> Result<Vec<T>>
    where
        F: Fn(&'a str, &'a C) -> Fut,
        Fut: Future<Output = Result<Vec<T>>> + 'a,
    {
        let mut pending: FuturesUnordered<_> = self
            .clients
            .iter()
            .map(|(name, client)| {
                let fut = op(name.as_str(), client);
                async move { (name.as_str(), fut.await) }
            })
            .collect();

        let mut merged = Vec::new();
        while let Some((profile, result)) = pending.next().await {
            match result {
                Ok(items) => {
                    debug!("Profile '{}' returned {} item(s)", profile, items.len());
                    merged.extend(items);
                }
                Err(e) if e.is_benign(benign) => {
                    debug!("Ignoring error from profile '{}': {}", profile, e);
                }
                Err(e) => return Err(CosmicError::for_profile(profile, e)),
            }
        }

        Ok(merged)
    }
}

impl ClientSet<CosmicClient> {
    /// Build clients for the named profiles
    pub fn connect(config: &ProfileConfig, names: &[String]) -> Result<Self> {
        let mut set = Self::new();
        for name in names {
            let profile = config.profiles.get(name).ok_or_else(|| {
                CosmicError::Config(format!(
                    "Cannot find config for specified profile \"{}\"",
                    name
                ))
            })?;
            set.insert(name.clone(), CosmicClient::new(profile)?);
        }
        Ok(set)
    }
}
