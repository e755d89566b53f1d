//! Session orchestrator.
//!
//! [`Arena`] owns the loaded content and the session seed, and hands out
//! matchups and paced battles. Each random draw sequence (a random matchup,
//! a battle) gets its own [`PcgRng`] stream derived from the session seed,
//! so a whole session replays from one number.

use std::path::Path;

use arena_content::{ArenaSettings, Catalog, ContentFactory};
use arena_core::{Battle, BattleSink, Matchup, PcgRng, random_matchup, select_matchup};

use crate::error::{Result, RuntimeError};
use crate::session::BattleSession;
use crate::sinks::{FanoutSink, TracingSink};

/// Loaded content plus the deterministic seed of a play session.
#[derive(Debug)]
pub struct Arena {
    catalog: Catalog,
    settings: ArenaSettings,
    info: Option<String>,
    seed: u64,
    next_stream: u64,
}

impl Arena {
    /// Create a new arena builder
    pub fn builder() -> ArenaBuilder {
        ArenaBuilder::new()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &ArenaSettings {
        &self.settings
    }

    /// Info screen text, if it was loaded.
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Matchup from two zero-based preset indices.
    pub fn select(&self, first: usize, second: usize) -> Result<Matchup> {
        Ok(select_matchup(&self.catalog, first, second)?)
    }

    /// Random presets and names.
    pub fn random(&mut self) -> Result<Matchup> {
        let mut rng = self.next_rng();
        Ok(random_matchup(&self.catalog, &self.catalog, &mut rng)?)
    }

    /// Build a battle for `matchup` and wrap it in a paced session.
    ///
    /// Events go to a [`TracingSink`] and to `sink`.
    pub fn start(
        &mut self,
        matchup: Matchup,
        sink: impl BattleSink + Send + 'static,
    ) -> Result<BattleSession> {
        let stream = self.next_stream;
        let rng = self.next_rng();
        let (first, second) = matchup.into_pair();

        tracing::info!(
            seed = self.seed,
            stream,
            first = first.name(),
            second = second.name(),
            "starting battle"
        );

        let battle = Battle::builder(first, second)
            .config(self.settings.battle)
            .rng(rng)
            .sink(FanoutSink::new().with(TracingSink).with(sink))
            .build()?;

        Ok(BattleSession::new(battle, &self.settings.display))
    }

    fn next_rng(&mut self) -> PcgRng {
        let rng = PcgRng::with_stream(self.seed, self.next_stream);
        self.next_stream += 1;
        rng
    }
}

/// Builder for [`Arena`].
///
/// Defaults: built-in catalog, default settings, no info text, seed `0`.
#[derive(Debug, Default)]
pub struct ArenaBuilder {
    catalog: Option<Catalog>,
    settings: Option<ArenaSettings>,
    info: Option<String>,
    seed: u64,
}

impl ArenaBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Load catalog, settings and info text from a data directory.
    pub fn data_dir(mut self, data_dir: impl AsRef<Path>) -> Result<Self> {
        let factory = ContentFactory::new(data_dir.as_ref());
        self.catalog = Some(factory.load_catalog().map_err(RuntimeError::Content)?);
        self.settings = Some(factory.load_settings().map_err(RuntimeError::Content)?);
        self.info = Some(factory.load_info());
        Ok(self)
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn settings(mut self, settings: ArenaSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Adjust the settings loaded so far (or the defaults).
    pub fn configure(mut self, apply: impl FnOnce(&mut ArenaSettings)) -> Self {
        apply(self.settings.get_or_insert_with(ArenaSettings::default));
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Arena {
        Arena {
            catalog: self.catalog.unwrap_or_default(),
            settings: self.settings.unwrap_or_default(),
            info: self.info,
            seed: self.seed,
            next_stream: 0,
        }
    }
}
